//! # Contact Submission Contract
//!
//! Server-side validation of an untrusted contact payload. The payload is
//! inspected as a raw JSON value so that a missing field, a `null`, a
//! number, or an empty string all fail the same required-field check.
//!
//! ## Rules
//!
//! - `name`, `email`, `message` are checked in that order; the first field
//!   that is absent, not a string, or empty is reported.
//! - `company` is optional. Absent or `null` becomes `""`.
//! - A body that is JSON `null` as a whole is a fault, not a missing field.
//! - All four values are trimmed after the checks pass. A whitespace-only
//!   required field passes the check and normalizes to `""`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fields of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

/// Required fields in the order they are checked.
pub const REQUIRED_FIELDS: [ContactField; 3] =
    [ContactField::Name, ContactField::Email, ContactField::Message];

impl ContactField {
    /// JSON key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    /// Whether a submission is rejected when this field is missing.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Company)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for a contact payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field is absent, not text, or empty.
    ///
    /// The display text is returned to the caller verbatim.
    #[error("Missing required field: {0}")]
    MissingField(ContactField),

    /// An optional field carries a non-text value.
    #[error("field {field} must be text, found {found}")]
    InvalidOptionalField {
        field: ContactField,
        found: &'static str,
    },

    /// The body parsed as JSON `null`.
    #[error("payload is null")]
    NullPayload,
}

/// Request body sent by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub message: String,
}

/// A validated, trimmed contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validate and normalize a parsed JSON payload.
    ///
    /// A non-object payload has no fields, so it fails on `name`. A `null`
    /// payload is rejected before any field is read.
    pub fn from_json(payload: &Value) -> Result<Self, ContactError> {
        if payload.is_null() {
            return Err(ContactError::NullPayload);
        }
        for field in REQUIRED_FIELDS {
            required_text(payload, field)?;
        }

        let company = match payload.get(ContactField::Company.as_str()) {
            None | Some(Value::Null) => "",
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                return Err(ContactError::InvalidOptionalField {
                    field: ContactField::Company,
                    found: json_type_name(other),
                })
            }
        };

        Ok(Self {
            name: required_text(payload, ContactField::Name)?.trim().to_string(),
            email: required_text(payload, ContactField::Email)?.trim().to_string(),
            company: company.trim().to_string(),
            message: required_text(payload, ContactField::Message)?
                .trim()
                .to_string(),
        })
    }

    /// Value of a single field.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }
}

impl TryFrom<&ContactRequest> for ContactSubmission {
    type Error = ContactError;

    fn try_from(request: &ContactRequest) -> Result<Self, Self::Error> {
        let value = serde_json::json!({
            "name": request.name,
            "email": request.email,
            "company": request.company,
            "message": request.message,
        });
        Self::from_json(&value)
    }
}

fn required_text(payload: &Value, field: ContactField) -> Result<&str, ContactError> {
    match payload.get(field.as_str()) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.as_str()),
        _ => Err(ContactError::MissingField(field)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn missing(payload: Value) -> ContactField {
        match ContactSubmission::from_json(&payload) {
            Err(ContactError::MissingField(field)) => field,
            other => panic!("expected MissingField, got: {other:?}"),
        }
    }

    #[test]
    fn well_formed_payload_is_trimmed() {
        let payload = json!({
            "name": " Jo ",
            "email": "jo@x.com ",
            "company": "",
            "message": " hi ",
        });
        let submission = ContactSubmission::from_json(&payload).unwrap();
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "jo@x.com");
        assert_eq!(submission.company, "");
        assert_eq!(submission.message, "hi");
    }

    #[test]
    fn absent_company_defaults_to_empty() {
        let payload = json!({"name": "Jo", "email": "jo@x.com", "message": "hi"});
        let submission = ContactSubmission::from_json(&payload).unwrap();
        assert_eq!(submission.company, "");
    }

    #[test]
    fn null_company_defaults_to_empty() {
        let payload = json!({"name": "Jo", "email": "jo@x.com", "company": null, "message": "hi"});
        let submission = ContactSubmission::from_json(&payload).unwrap();
        assert_eq!(submission.company, "");
    }

    #[test]
    fn company_is_trimmed() {
        let payload = json!({"name": "Jo", "email": "e", "company": "  Acme  ", "message": "m"});
        let submission = ContactSubmission::from_json(&payload).unwrap();
        assert_eq!(submission.field(ContactField::Company), "Acme");
    }

    #[test]
    fn missing_name_is_reported() {
        assert_eq!(
            missing(json!({"email": "a@b.com", "message": "hi"})),
            ContactField::Name
        );
    }

    #[test]
    fn missing_name_message_text() {
        let err = ContactSubmission::from_json(&json!({"email": "a@b.com", "message": "hi"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: name");
    }

    #[test]
    fn earliest_missing_field_wins() {
        assert_eq!(missing(json!({})), ContactField::Name);
        assert_eq!(missing(json!({"name": "Jo"})), ContactField::Email);
        assert_eq!(
            missing(json!({"name": "Jo", "email": "jo@x.com"})),
            ContactField::Message
        );
        assert_eq!(
            missing(json!({"email": "", "message": ""})),
            ContactField::Name
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        assert_eq!(
            missing(json!({"name": "Jo", "email": "", "message": "hi"})),
            ContactField::Email
        );
    }

    #[test]
    fn non_text_counts_as_missing() {
        assert_eq!(
            missing(json!({"name": 42, "email": "e", "message": "m"})),
            ContactField::Name
        );
        assert_eq!(
            missing(json!({"name": "n", "email": ["e"], "message": "m"})),
            ContactField::Email
        );
        assert_eq!(
            missing(json!({"name": "n", "email": "e", "message": null})),
            ContactField::Message
        );
        assert_eq!(
            missing(json!({"name": "n", "email": "e", "message": false})),
            ContactField::Message
        );
    }

    #[test]
    fn non_object_payload_fails_on_name() {
        assert_eq!(missing(json!([])), ContactField::Name);
        assert_eq!(missing(json!("hello")), ContactField::Name);
        assert_eq!(missing(json!(42)), ContactField::Name);
    }

    #[test]
    fn null_payload_is_not_a_missing_field() {
        assert_eq!(
            ContactSubmission::from_json(&Value::Null).unwrap_err(),
            ContactError::NullPayload
        );
    }

    #[test]
    fn whitespace_only_required_field_passes_and_trims_to_empty() {
        let payload = json!({"name": "   ", "email": "e", "message": "m"});
        let submission = ContactSubmission::from_json(&payload).unwrap();
        assert_eq!(submission.name, "");
    }

    #[test]
    fn non_text_company_is_rejected() {
        let payload = json!({"name": "n", "email": "e", "company": 7, "message": "m"});
        let err = ContactSubmission::from_json(&payload).unwrap_err();
        assert_eq!(
            err,
            ContactError::InvalidOptionalField {
                field: ContactField::Company,
                found: "number",
            }
        );
    }

    #[test]
    fn required_fields_checked_before_company() {
        let payload = json!({"company": 7, "email": "e", "message": "m"});
        assert_eq!(missing(payload), ContactField::Name);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let payload = json!({"name": "n", "email": "e", "message": "m", "companyWebsite": "x"});
        assert!(ContactSubmission::from_json(&payload).is_ok());
    }

    #[test]
    fn request_conversion_applies_same_rules() {
        let request = ContactRequest {
            name: " Jo".into(),
            email: "jo@x.com".into(),
            company: String::new(),
            message: String::new(),
        };
        assert_eq!(
            ContactSubmission::try_from(&request).unwrap_err(),
            ContactError::MissingField(ContactField::Message)
        );
    }

    #[test]
    fn request_without_company_deserializes() {
        let request: ContactRequest =
            serde_json::from_value(json!({"name": "n", "email": "e", "message": "m"})).unwrap();
        assert_eq!(request.company, "");
    }

    #[test]
    fn field_requirement_flags() {
        assert!(ContactField::Name.is_required());
        assert!(ContactField::Email.is_required());
        assert!(ContactField::Message.is_required());
        assert!(!ContactField::Company.is_required());
    }

    // ── Property tests ───────────────────────────────────────────────

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn accepted_values_are_trimmed(
            name in "[ \t]{0,3}[a-zA-Z]{1,12}[ \t]{0,3}",
            email in "[ ]{0,2}[a-z]{1,8}@[a-z]{1,8}\\.com[ ]{0,2}",
            company in "[ ]{0,2}[a-zA-Z ]{0,10}",
            message in "[ \n]{0,2}[a-zA-Z ]{1,40}[ \n]{0,2}",
        ) {
            let payload = json!({
                "name": name, "email": email, "company": company, "message": message,
            });
            let submission = ContactSubmission::from_json(&payload).unwrap();
            prop_assert_eq!(&submission.name, name.trim());
            prop_assert_eq!(&submission.email, email.trim());
            prop_assert_eq!(&submission.company, company.trim());
            prop_assert_eq!(&submission.message, message.trim());
        }

        #[test]
        fn reported_field_is_first_missing(mask in 0u8..8) {
            let mut payload = serde_json::Map::new();
            for (bit, field) in REQUIRED_FIELDS.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    payload.insert(field.as_str().into(), json!("present"));
                }
            }
            let first_missing = REQUIRED_FIELDS
                .iter()
                .enumerate()
                .find(|(bit, _)| mask & (1 << bit) == 0)
                .map(|(_, f)| *f);
            let result = ContactSubmission::from_json(&Value::Object(payload));
            match first_missing {
                Some(field) => prop_assert_eq!(result.unwrap_err(), ContactError::MissingField(field)),
                None => prop_assert!(result.is_ok()),
            }
        }
    }
}
