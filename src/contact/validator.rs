use std::sync::OnceLock;

use regex::Regex;

use super::form::{ContactForm, FieldErrors};

pub const NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 2 caracteres.";
pub const EMAIL_INVALID: &str = "E-mail inválido.";
pub const MESSAGE_TOO_SHORT: &str = "Mensagem deve ter pelo menos 10 caracteres.";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Validation {
    pub valid: bool,
    pub errors: FieldErrors,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Checks every field on its own rule; one failing field never hides another.
pub fn validate(form: &ContactForm) -> Validation {
    let mut errors = FieldErrors::default();

    if form.name.trim().chars().count() < MIN_NAME_CHARS {
        errors.name = NAME_TOO_SHORT.to_string();
    }
    if !is_valid_email(&form.email) {
        errors.email = EMAIL_INVALID.to_string();
    }
    if form.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        errors.message = MESSAGE_TOO_SHORT.to_string();
    }

    Validation {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn minimal_valid_form_passes() {
        let verdict = validate(&form("Jo", "a@b.co", "0123456789"));
        assert_eq!(
            verdict,
            Validation { valid: true, errors: FieldErrors::default() }
        );
    }

    #[test]
    fn every_failing_field_is_reported() {
        let verdict = validate(&form("", "bad", "short"));
        assert!(!verdict.valid);
        assert_eq!(
            verdict.errors,
            FieldErrors {
                name: NAME_TOO_SHORT.into(),
                email: EMAIL_INVALID.into(),
                message: MESSAGE_TOO_SHORT.into(),
            }
        );
    }

    #[test]
    fn short_name_does_not_mask_other_fields() {
        let verdict = validate(&form("  J  ", "a@b.co", "a long enough message"));
        assert!(!verdict.valid);
        assert_eq!(verdict.errors.name, NAME_TOO_SHORT);
        assert_eq!(verdict.errors.email, "");
        assert_eq!(verdict.errors.message, "");
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let verdict = validate(&form("Jo", "a@b.co", "   123456789   "));
        assert_eq!(verdict.errors.message, MESSAGE_TOO_SHORT);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert_eq!(validate(&form("É", "a@b.co", "0123456789")).errors.name, NAME_TOO_SHORT);
        assert!(validate(&form("Zé", "a@b.co", "ção ção çã")).valid);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ana@savra.com.br"));
        assert!(!is_valid_email("ana@savra"));
        assert!(!is_valid_email("ana savra@x.com"));
        assert!(!is_valid_email("@savra.com"));
        assert!(!is_valid_email("ana@@savra.com"));
        assert!(!is_valid_email(""));
    }
}
