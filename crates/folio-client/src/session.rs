//! Drives one [`ContactForm`] submission over a [`ContactTransport`].

use folio_core::{ContactForm, FormError, SubmissionReceipt, SubmitAction};

use crate::ContactTransport;

/// What happened to a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// The server accepted the request.
    Sent(Option<SubmissionReceipt>),
    /// Honeypot filled; nothing was sent.
    Suppressed,
    /// A request was already in flight.
    Ignored,
    /// The request failed. Carries the message now shown in the form.
    Failed(String),
}

/// Run the submit action for `form`, sending through `transport` when the
/// form asks for it, and report the result back to the form.
pub async fn submit_form<T>(
    form: &mut ContactForm,
    transport: &T,
) -> Result<SubmitReport, FormError>
where
    T: ContactTransport,
{
    let request = match form.begin_submit() {
        SubmitAction::Send(request) => request,
        SubmitAction::Suppressed => return Ok(SubmitReport::Suppressed),
        SubmitAction::Ignored => return Ok(SubmitReport::Ignored),
    };

    match transport.send(&request).await {
        Ok(receipt) => {
            form.finish_success()?;
            Ok(SubmitReport::Sent(receipt))
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact submission failed");
            form.finish_failure(e.user_message())?;
            let message = form
                .state()
                .error_message()
                .unwrap_or_default()
                .to_string();
            Ok(SubmitReport::Failed(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use folio_core::form::{FALLBACK_MESSAGE, REJECTED_MESSAGE};
    use folio_core::{ContactField, ContactRequest, DispatchMode, FormState};

    use super::*;
    use crate::ClientError;

    #[derive(Default)]
    struct Recorder {
        calls: AtomicUsize,
        reject_with: Option<u16>,
    }

    impl ContactTransport for Recorder {
        async fn send(
            &self,
            _request: &ContactRequest,
        ) -> Result<Option<SubmissionReceipt>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reject_with {
                Some(status) => Err(ClientError::Rejected {
                    endpoint: "POST /api/contact".into(),
                    status,
                    body: String::new(),
                }),
                None => Ok(Some(SubmissionReceipt::new(DispatchMode::Logged))),
            }
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        let fields = form.fields_mut();
        fields.set(ContactField::Name, "Jo");
        fields.set(ContactField::Email, "jo@x.com");
        fields.set(ContactField::Message, "hi");
        form
    }

    #[tokio::test]
    async fn success_clears_form() {
        let transport = Recorder::default();
        let mut form = filled();
        let report = submit_form(&mut form, &transport).await.unwrap();
        assert_eq!(
            report,
            SubmitReport::Sent(Some(SubmissionReceipt::new(DispatchMode::Logged)))
        );
        assert_eq!(form.state(), &FormState::Success);
        assert!(form.fields().name.is_empty());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejection_shows_rejected_message() {
        let transport = Recorder {
            reject_with: Some(400),
            ..Default::default()
        };
        let mut form = filled();
        let report = submit_form(&mut form, &transport).await.unwrap();
        assert_eq!(report, SubmitReport::Failed(REJECTED_MESSAGE.to_string()));
        assert_eq!(form.fields().name, "Jo");
        assert_ne!(REJECTED_MESSAGE, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn honeypot_sends_nothing() {
        let transport = Recorder::default();
        let mut form = filled();
        form.fields_mut().company_website = "spam".into();
        let report = submit_form(&mut form, &transport).await.unwrap();
        assert_eq!(report, SubmitReport::Suppressed);
        assert_eq!(form.state(), &FormState::Success);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn in_flight_submit_is_ignored() {
        let transport = Recorder::default();
        let mut form = filled();
        let _ = form.begin_submit();
        let report = submit_form(&mut form, &transport).await.unwrap();
        assert_eq!(report, SubmitReport::Ignored);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert!(form.state().is_loading());
    }
}
