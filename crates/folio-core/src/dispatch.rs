//! # Dispatch Policy
//!
//! Decides what happens to a validated submission. The decision depends
//! only on an explicit [`DispatchConfig`] value, which the server builds
//! once from its environment and hands to the handler.
//!
//! | production | credential | mode     |
//! |------------|------------|----------|
//! | no         | any        | `logged` |
//! | yes        | absent     | `logged` |
//! | yes        | present    | `queued` |
//!
//! The `queued` mode does not deliver anything yet. [`Delivery`] is the seam
//! a provider integration plugs into.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::ContactSubmission;

/// Where an accepted submission goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Recorded to the operator log only.
    Logged,
    /// Handed to the delivery provider (not yet wired).
    Queued,
}

impl DispatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logged => "logged",
            Self::Queued => "queued",
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the dispatch decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// The deployment runs in its production environment.
    pub production_mode: bool,
    /// An email-delivery credential is configured.
    pub delivery_credential_present: bool,
}

impl DispatchConfig {
    pub fn new(production_mode: bool, delivery_credential_present: bool) -> Self {
        Self {
            production_mode,
            delivery_credential_present,
        }
    }

    /// Select the dispatch mode for a submission.
    pub fn mode(&self) -> DispatchMode {
        if self.production_mode && self.delivery_credential_present {
            DispatchMode::Queued
        } else {
            DispatchMode::Logged
        }
    }
}

/// Acknowledgement returned by a delivery provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAck {
    /// Provider-assigned message identifier.
    pub provider_id: String,
}

/// Delivery provider failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// No provider integration exists.
    #[error("email delivery is not implemented")]
    NotImplemented,

    /// The provider refused the message.
    #[error("delivery provider rejected the message: {0}")]
    Rejected(String),
}

/// Email-delivery provider seam.
///
/// No retry policy, idempotency key or provider contract is implied.
pub trait Delivery: fmt::Debug + Send + Sync {
    fn deliver(&self, submission: &ContactSubmission) -> Result<DeliveryAck, DeliveryError>;
}

/// Placeholder provider used until a real integration lands.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedDelivery;

impl Delivery for UnimplementedDelivery {
    fn deliver(&self, _submission: &ContactSubmission) -> Result<DeliveryAck, DeliveryError> {
        Err(DeliveryError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_table() {
        assert_eq!(DispatchConfig::new(false, false).mode(), DispatchMode::Logged);
        assert_eq!(DispatchConfig::new(false, true).mode(), DispatchMode::Logged);
        assert_eq!(DispatchConfig::new(true, false).mode(), DispatchMode::Logged);
        assert_eq!(DispatchConfig::new(true, true).mode(), DispatchMode::Queued);
    }

    #[test]
    fn default_config_logs() {
        assert_eq!(DispatchConfig::default().mode(), DispatchMode::Logged);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DispatchMode::Logged).unwrap(),
            "\"logged\""
        );
        assert_eq!(
            serde_json::to_string(&DispatchMode::Queued).unwrap(),
            "\"queued\""
        );
        assert_eq!(DispatchMode::Queued.to_string(), "queued");
    }

    #[test]
    fn unimplemented_delivery_refuses() {
        let submission = ContactSubmission {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            company: String::new(),
            message: "hi".into(),
        };
        assert_eq!(
            UnimplementedDelivery.deliver(&submission),
            Err(DeliveryError::NotImplemented)
        );
    }

    #[test]
    fn delivery_is_object_safe() {
        let provider: Box<dyn Delivery> = Box::new(UnimplementedDelivery);
        assert!(format!("{provider:?}").contains("UnimplementedDelivery"));
    }
}
