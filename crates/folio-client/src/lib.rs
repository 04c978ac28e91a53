//! # folio-client -- Contact endpoint client
//!
//! Sends contact submissions to `POST {base_url}/api/contact` and drives
//! the [`ContactForm`](folio_core::ContactForm) state machine around that
//! call.
//!
//! ## Contract
//!
//! - Exactly one request per genuine submission. No retries.
//! - Any 2xx response is success. The body is parsed when it looks like a
//!   [`SubmissionReceipt`], and ignored otherwise.
//! - A non-2xx response or a transport failure is a failure.
//!
//! The [`ContactTransport`] trait is the seam between the form driver and
//! HTTP so the driver can be exercised without a server.

pub mod config;
pub mod error;
pub mod session;

pub use config::ClientConfig;
pub use error::ClientError;
pub use session::{submit_form, SubmitReport};

use std::future::Future;
use std::time::Duration;

use folio_core::{ContactRequest, SubmissionReceipt};
use url::Url;

/// Anything that can carry a contact request to the server.
pub trait ContactTransport {
    /// Send one request. `Ok` means the server accepted it.
    fn send(
        &self,
        request: &ContactRequest,
    ) -> impl Future<Output = Result<Option<SubmissionReceipt>, ClientError>> + Send;
}

/// HTTP client for the contact endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ContactClient {
    /// Create a new client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint = config.contact_url()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self { http, endpoint })
    }

    /// URL the client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST a contact request.
    pub async fn submit(
        &self,
        request: &ContactRequest,
    ) -> Result<Option<SubmissionReceipt>, ClientError> {
        let endpoint = format!("POST {}", self.endpoint.path());

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Rejected {
                endpoint,
                status,
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;
        match serde_json::from_slice::<SubmissionReceipt>(&bytes) {
            Ok(receipt) => Ok(Some(receipt)),
            Err(e) => {
                tracing::debug!(%endpoint, error = %e, "success response without a receipt body");
                Ok(None)
            }
        }
    }
}

impl ContactTransport for ContactClient {
    async fn send(
        &self,
        request: &ContactRequest,
    ) -> Result<Option<SubmissionReceipt>, ClientError> {
        self.submit(request).await
    }
}
