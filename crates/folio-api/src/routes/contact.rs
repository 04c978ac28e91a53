//! # Contact Submission Handler
//!
//! `POST /api/contact`. The body is read as raw bytes and parsed as JSON
//! regardless of content type.
//!
//! | Condition | Status | Body |
//! |---|---|---|
//! | required field missing, non-text or empty | 400 | `{"error": "Missing required field: <f>"}` |
//! | not production, or no delivery credential | 200 | `{"ok": true, "mode": "logged"}` |
//! | production with delivery credential | 200 | `{"ok": true, "mode": "queued"}` |
//! | unparsable body or any other fault | 500 | `{"error": "Unable to send your message right now."}` |
//!
//! Submissions are never stored and never deduplicated.

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use folio_core::{
    ContactSubmission, Delivery, DispatchConfig, DispatchMode, SubmissionReceipt,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::middleware::metrics::ContactOutcome;
use crate::state::AppState;

/// Log target for accepted submissions.
pub const CONTACT_LOG_TARGET: &str = "folio::contact";

/// Request body accepted by the contact endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactPayload {
    #[schema(example = "Jo")]
    pub name: String,
    #[schema(example = "jo@example.com")]
    pub email: String,
    /// Optional. Defaults to an empty string.
    #[serde(default)]
    pub company: Option<String>,
    #[schema(example = "Hi, let's talk about a project.")]
    pub message: String,
}

/// Success body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub ok: bool,
    /// `logged` or `queued`.
    #[schema(example = "logged")]
    pub mode: String,
}

impl From<SubmissionReceipt> for ContactResponse {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            ok: receipt.ok,
            mode: receipt.mode.as_str().to_string(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

/// POST /api/contact: accept a contact submission.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactPayload,
    responses(
        (status = 200, description = "Submission accepted", body = ContactResponse),
        (status = 400, description = "Required field missing", body = ErrorBody),
        (status = 500, description = "Submission could not be processed", body = ErrorBody),
    ),
    tag = "contact"
)]
async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let result = handle_submission(state.dispatch(), state.delivery.as_ref(), &body);
    state.metrics.record_contact(outcome_of(&result));
    result.map(|receipt| Json(receipt.into()))
}

/// Parse, validate, normalize and dispatch one submission.
///
/// `delivery` is carried for the `queued` path but not invoked.
pub fn handle_submission(
    dispatch: &DispatchConfig,
    delivery: &dyn Delivery,
    body: &[u8],
) -> Result<SubmissionReceipt, AppError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Internal(format!("contact body is not valid JSON: {e}")))?;

    let submission = ContactSubmission::from_json(&payload).map_err(|e| {
        tracing::debug!(target: CONTACT_LOG_TARGET, error = %e, "contact submission rejected");
        e
    })?;

    let mode = dispatch.mode();
    match mode {
        DispatchMode::Logged => log_submission(&submission),
        DispatchMode::Queued => {
            tracing::info!(
                target: CONTACT_LOG_TARGET,
                ?delivery,
                "contact submission queued; delivery not wired"
            );
        }
    }
    Ok(SubmissionReceipt::new(mode))
}

fn log_submission(submission: &ContactSubmission) {
    let submission_id = Uuid::new_v4();
    let received_at = Utc::now();
    tracing::info!(
        target: CONTACT_LOG_TARGET,
        %submission_id,
        received_at = %received_at.to_rfc3339(),
        name = %submission.name,
        email = %submission.email,
        company = %submission.company,
        body = %submission.message,
        "contact submission logged"
    );
}

fn outcome_of(result: &Result<SubmissionReceipt, AppError>) -> ContactOutcome {
    match result {
        Ok(receipt) => match receipt.mode {
            DispatchMode::Logged => ContactOutcome::Logged,
            DispatchMode::Queued => ContactOutcome::Queued,
        },
        Err(AppError::MissingField(_)) => ContactOutcome::Rejected,
        Err(_) => ContactOutcome::Failed,
    }
}
