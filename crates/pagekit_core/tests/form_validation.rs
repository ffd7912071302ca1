use pagekit_core::{validate, ContactField, ContactForm, FieldError, FieldErrorKind, ValidationResult};

#[test]
fn complete_form_is_valid() {
    let result = validate(&ContactForm::new("Ivan", "ivan@example.com", "123"));
    assert_eq!(result, ValidationResult::Valid);
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[test]
fn malformed_email_is_the_only_error() {
    let result = validate(&ContactForm::new("A", "not-an-email", "1"));
    assert_eq!(
        result,
        ValidationResult::Invalid(vec![FieldError::new(
            ContactField::Email,
            FieldErrorKind::InvalidFormat
        )])
    );
}

#[test]
fn every_empty_combination_reports_exactly_those_fields() {
    let filled = ["Ivan", "ivan@example.com", "123"];
    for mask in 0u8..8 {
        let value = |bit: u8, idx: usize| {
            if mask & (1 << bit) != 0 {
                "   ".to_string()
            } else {
                filled[idx].to_string()
            }
        };
        let form = ContactForm::new(value(0, 0), value(1, 1), value(2, 2));
        let result = validate(&form);

        let expected: Vec<FieldError> = ContactField::ALL
            .iter()
            .enumerate()
            .filter(|(idx, _)| mask & (1 << *idx) != 0)
            .map(|(_, field)| FieldError::new(*field, FieldErrorKind::Required))
            .collect();
        assert_eq!(result.errors(), expected.as_slice(), "mask {mask:03b}");
        assert_eq!(result.is_valid(), mask == 0);
    }
}

#[test]
fn whitespace_around_values_is_ignored() {
    let result = validate(&ContactForm::new("  Ivan\t", "\n ivan@example.com  ", " 1 "));
    assert!(result.is_valid());
}

#[test]
fn empty_email_is_required_not_invalid_format() {
    let result = validate(&ContactForm::new("Ivan", "  ", "1"));
    assert_eq!(
        result.error_for(ContactField::Email),
        Some(FieldErrorKind::Required)
    );
    assert_eq!(result.error_for(ContactField::Name), None);
}

#[test]
fn phone_has_no_format_rule() {
    let result = validate(&ContactForm::new("Ivan", "ivan@example.com", "call me maybe"));
    assert!(result.is_valid());
}

#[test]
fn errors_carry_localized_messages() {
    let result = validate(&ContactForm::default());
    let messages: Vec<_> = result.errors().iter().map(FieldError::message).collect();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].contains("Имя"));
    assert!(messages[1].contains("Email"));
    assert!(messages[2].contains("Телефон"));
}
