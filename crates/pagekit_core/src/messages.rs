//! User-facing locale strings (ru).
//!
//! Presentation layers render these verbatim; core logic never branches on
//! their content.

use crate::model::contact::ContactField;
use crate::validation::form::FieldErrorKind;

pub const STATUS_AUTOSAVE_IDLE: &str = "Данные сохраняются автоматически в localStorage";
pub const STATUS_SAVED: &str = "Данные сохранены в localStorage";
pub const STATUS_SAVE_FAILED: &str = "Не удалось сохранить данные: хранилище недоступно";

pub const AUTOPLAY_ENABLED: &str = "Автопрокрутка включена";
pub const AUTOPLAY_DISABLED: &str = "Автопрокрутка выключена";

const NAME_REQUIRED: &str = "Поле \"Имя\" обязательно для заполнения";
const EMAIL_REQUIRED: &str = "Поле \"Email\" обязательно для заполнения";
const EMAIL_INVALID: &str = "Введите корректный email (например: example@domain.com)";
const PHONE_REQUIRED: &str = "Поле \"Телефон\" обязательно для заполнения";
const FIELD_INVALID: &str = "Некорректное значение";

/// Inline error text shown under one form field.
pub fn field_error_message(field: ContactField, kind: FieldErrorKind) -> &'static str {
    match (field, kind) {
        (ContactField::Name, FieldErrorKind::Required) => NAME_REQUIRED,
        (ContactField::Email, FieldErrorKind::Required) => EMAIL_REQUIRED,
        (ContactField::Email, FieldErrorKind::InvalidFormat) => EMAIL_INVALID,
        (ContactField::Phone, FieldErrorKind::Required) => PHONE_REQUIRED,
        (_, FieldErrorKind::InvalidFormat) => FIELD_INVALID,
    }
}

/// Carousel status line, e.g. `Автопрокрутка включена. Текущий слайд: 2 из 4`.
pub fn carousel_status(autoplay: bool, position: usize, total: usize) -> String {
    let state = if autoplay {
        AUTOPLAY_ENABLED
    } else {
        AUTOPLAY_DISABLED
    };
    format!("{state}. Текущий слайд: {position} из {total}")
}

#[cfg(test)]
mod tests {
    use super::{carousel_status, field_error_message, EMAIL_INVALID};
    use crate::model::contact::ContactField;
    use crate::validation::form::FieldErrorKind;

    #[test]
    fn email_format_message_names_an_example() {
        let message = field_error_message(ContactField::Email, FieldErrorKind::InvalidFormat);
        assert_eq!(message, EMAIL_INVALID);
        assert!(message.contains("example@domain.com"));
    }

    #[test]
    fn required_messages_are_field_specific() {
        let name = field_error_message(ContactField::Name, FieldErrorKind::Required);
        let phone = field_error_message(ContactField::Phone, FieldErrorKind::Required);
        assert!(name.contains("Имя"));
        assert!(phone.contains("Телефон"));
    }

    #[test]
    fn carousel_status_is_one_based() {
        assert_eq!(
            carousel_status(false, 1, 4),
            "Автопрокрутка выключена. Текущий слайд: 1 из 4"
        );
    }
}
