use log::{error, info, warn};
use serde::Serialize;

use super::error::{SubmissionError, SubmitRejected, ValidationError};
use super::validator::validate;

pub const STATUS_SENT: &str = "Mensagem enviada com sucesso!";
pub const STATUS_FAILED: &str = "Erro ao enviar. Tente novamente.";
pub const STATUS_INVALID: &str = "Erro: Preencha os campos corretamente.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Per-field error text. Every field always has an entry; an empty string means
/// the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name.clear(),
            Field::Email => self.email.clear(),
            Field::Message => self.message.clear(),
        }
    }

    /// Fields that currently carry an error, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .filter(|field| !self.get(*field).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Payload forwarded to the mail relay as template parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

/// Contact form state owned by the view that renders it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
    pub status: String,
    pub is_sending: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Store a keystroke and drop the stale error for that field.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.errors.clear(field);
    }

    /// First half of a submission: marks the form as sending and validates it.
    /// On success the caller owns the one relay call and must report its result
    /// through `complete_submit`.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitRejected> {
        if self.is_sending {
            warn!("Ignoring contact submit while a message is in flight");
            return Err(SubmitRejected::Busy);
        }

        self.is_sending = true;
        self.status.clear();

        let verdict = validate(self);
        self.errors = verdict.errors.clone();
        if !verdict.valid {
            self.status = STATUS_INVALID.to_string();
            self.is_sending = false;
            return Err(ValidationError { errors: verdict.errors }.into());
        }

        Ok(ContactMessage {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Second half of a submission: applies the relay result.
    pub fn complete_submit(&mut self, result: Result<(), SubmissionError>) -> SubmitOutcome {
        self.is_sending = false;
        match result {
            Ok(()) => {
                info!("Contact message delivered");
                self.status = STATUS_SENT.to_string();
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.errors = FieldErrors::default();
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Failed to deliver contact message: {}", e);
                self.status = STATUS_FAILED.to_string();
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::relay::MailRelay;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    struct FakeRelay {
        succeed: bool,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl FakeRelay {
        fn new(succeed: bool) -> Self {
            Self { succeed, sent: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl MailRelay for FakeRelay {
        async fn send(&self, message: &ContactMessage) -> Result<(), SubmissionError> {
            self.sent.borrow_mut().push(message.clone());
            if self.succeed {
                Ok(())
            } else {
                Err(SubmissionError::Rejected { status: 400, body: "bad template".into() })
            }
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Jo".into());
        form.set_field(Field::Email, "a@b.co".into());
        form.set_field(Field::Message, "0123456789".into());
        form
    }

    fn run_submit(form: &mut ContactForm, relay: &FakeRelay, seen_sending: &Cell<bool>) -> Option<SubmitOutcome> {
        let message = form.begin_submit().ok()?;
        seen_sending.set(form.is_sending);
        let result = tokio_test::block_on(relay.send(&message));
        Some(form.complete_submit(result))
    }

    #[test]
    fn successful_submit_resets_fields() {
        let relay = FakeRelay::new(true);
        let mut form = filled();
        let seen_sending = Cell::new(false);
        assert!(!form.is_sending);

        let outcome = run_submit(&mut form, &relay, &seen_sending);

        assert_eq!(outcome, Some(SubmitOutcome::Sent));
        assert!(seen_sending.get());
        assert!(!form.is_sending);
        assert_eq!(form.status, STATUS_SENT);
        assert_eq!((form.name.as_str(), form.email.as_str(), form.message.as_str()), ("", "", ""));
        assert!(form.errors.is_empty());
        assert_eq!(
            relay.sent.borrow().as_slice(),
            &[ContactMessage {
                from_name: "Jo".into(),
                from_email: "a@b.co".into(),
                message: "0123456789".into(),
            }]
        );
    }

    #[test]
    fn failed_submit_keeps_fields() {
        let relay = FakeRelay::new(false);
        let mut form = filled();
        let seen_sending = Cell::new(false);

        let outcome = run_submit(&mut form, &relay, &seen_sending);

        assert_eq!(outcome, Some(SubmitOutcome::Failed));
        assert!(seen_sending.get());
        assert!(!form.is_sending);
        assert_eq!(form.status, STATUS_FAILED);
        assert_eq!(form.name, "Jo");
        assert_eq!(form.email, "a@b.co");
        assert_eq!(form.message, "0123456789");
    }

    #[test]
    fn invalid_submit_makes_no_relay_call() {
        let relay = FakeRelay::new(true);
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "bad".into());
        let seen_sending = Cell::new(false);

        let outcome = run_submit(&mut form, &relay, &seen_sending);

        assert_eq!(outcome, None);
        assert!(relay.sent.borrow().is_empty());
        assert!(!form.is_sending);
        assert_eq!(form.status, STATUS_INVALID);
        assert_eq!(form.errors.get(Field::Email), "E-mail inválido.");
        assert_eq!(form.email, "bad");
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit();
        assert!(first.is_ok());

        assert_eq!(form.begin_submit(), Err(SubmitRejected::Busy));
        assert!(form.is_sending);
        assert!(form.status.is_empty());
    }

    #[test]
    fn invalid_submit_reports_failing_fields_in_order() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "ana@savra.com".into());

        match form.begin_submit() {
            Err(SubmitRejected::Invalid(e)) => {
                assert_eq!(e.errors.invalid_fields(), vec![Field::Name, Field::Message]);
                assert_eq!(e.errors, form.errors);
            }
            other => panic!("expected validation rejection, got {:?}", other),
        }
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::new();
        let _ = form.begin_submit();
        assert!(!form.errors.name.is_empty());
        assert!(!form.errors.message.is_empty());

        form.set_field(Field::Name, "Ana".into());

        assert_eq!(form.errors.get(Field::Name), "");
        assert!(!form.errors.message.is_empty());
        assert_eq!(form.value(Field::Name), "Ana");
    }

    #[test]
    fn resubmit_after_failure_clears_previous_status() {
        let mut form = filled();
        let _ = form.begin_submit();
        form.complete_submit(Err(SubmissionError::Transport("offline".into())));
        assert_eq!(form.status, STATUS_FAILED);

        assert!(form.begin_submit().is_ok());
        assert!(form.status.is_empty());
    }
}
