//! Success body and the safe error message of the contact endpoint.

use serde::{Deserialize, Serialize};

use crate::dispatch::DispatchMode;

/// Message returned for every server-side fault. Internal detail is logged,
/// never returned.
pub const SAFE_ERROR_MESSAGE: &str = "Unable to send your message right now.";

/// Success body: `{"ok": true, "mode": "logged" | "queued"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub ok: bool,
    pub mode: DispatchMode,
}

impl SubmissionReceipt {
    pub fn new(mode: DispatchMode) -> Self {
        Self { ok: true, mode }
    }
}
