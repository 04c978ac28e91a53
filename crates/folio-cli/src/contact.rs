//! # Contact Subcommand
//!
//! Sends one message through the same [`ContactForm`] state machine the
//! site uses, so the honeypot and failure messages behave identically.
//!
//! Exit codes: `0` accepted (or silently suppressed), `1` failed.

use anyhow::{Context, Result};
use clap::Args;

use folio_client::{submit_form, ClientConfig, ContactClient, ContactTransport, SubmitReport};
use folio_core::{ContactForm, FormFields};

/// Arguments for the `folio contact` subcommand.
#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Sender name.
    #[arg(long)]
    pub name: String,
    /// Reply-to email address.
    #[arg(long)]
    pub email: String,
    /// Company (optional).
    #[arg(long, default_value = "")]
    pub company: String,
    /// Message body.
    #[arg(long)]
    pub message: String,
    /// Honeypot value. Anything non-empty suppresses the request.
    #[arg(long, default_value = "", hide = true)]
    pub company_website: String,
    /// API base URL. Overrides `FOLIO_API_URL`.
    #[arg(long)]
    pub api_url: Option<String>,
}

impl ContactArgs {
    fn fields(&self) -> FormFields {
        FormFields {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            message: self.message.clone(),
            company_website: self.company_website.clone(),
        }
    }

    fn client_config(&self) -> Result<ClientConfig> {
        let config = match &self.api_url {
            Some(url) => ClientConfig::with_base_url(url)?,
            None => ClientConfig::from_env()?,
        };
        Ok(config)
    }
}

/// Execute the contact subcommand.
pub fn run_contact(args: &ContactArgs) -> Result<u8> {
    let client = ContactClient::new(args.client_config()?)?;
    tracing::debug!(endpoint = %client.endpoint(), "sending contact message");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(send_fields(args.fields(), &client))
}

/// Drive one form submission and print the resulting notice.
pub async fn send_fields<T: ContactTransport>(fields: FormFields, transport: &T) -> Result<u8> {
    let mut form = ContactForm::with_fields(fields);
    let report = submit_form(&mut form, transport).await?;
    let notice = form.notice().unwrap_or_default();

    match report {
        SubmitReport::Sent(receipt) => {
            match receipt {
                Some(receipt) => println!("OK ({}): {notice}", receipt.mode),
                None => println!("OK: {notice}"),
            }
            Ok(0)
        }
        SubmitReport::Suppressed => {
            tracing::info!("honeypot filled; nothing sent");
            println!("OK: {notice}");
            Ok(0)
        }
        SubmitReport::Ignored => Ok(0),
        SubmitReport::Failed(message) => {
            eprintln!("FAILED: {message}");
            Ok(1)
        }
    }
}
