use thiserror::Error;

use crate::modules::payments::use_cases::process_payment::command::ProcessPayment;

pub const REFERENCE_NOTE_MAX_CHARS: usize = 120;

// Display strings double as the HTTP 400 bodies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Payment IDs and Payment Method are required")]
    MissingRequiredField,

    #[error("Reference note cannot exceed 120 characters")]
    ReferenceNoteTooLong,
}

/// Checks run in order; the first failing check wins.
pub fn validate(command: &ProcessPayment) -> Result<(), ValidationError> {
    if command.payment_ids.is_empty() || command.payment_method.is_empty() {
        return Err(ValidationError::MissingRequiredField);
    }
    if command.reference_note.chars().count() > REFERENCE_NOTE_MAX_CHARS {
        return Err(ValidationError::ReferenceNoteTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod process_payment_validation_tests {
    use super::*;
    use rstest::rstest;

    fn command(ids: Vec<i64>, method: &str, note: &str) -> ProcessPayment {
        ProcessPayment {
            payment_ids: ids,
            payment_method: method.to_string(),
            reference_note: note.to_string(),
        }
    }

    #[rstest]
    fn it_should_accept_a_complete_command() {
        let result = validate(&command(vec![1, 2], "bank_transfer", "July+Aug"));
        assert_eq!(result, Ok(()));
    }

    #[rstest]
    #[case::empty_ids(vec![], "cash")]
    #[case::empty_method(vec![1], "")]
    fn it_should_require_payment_ids_and_payment_method(
        #[case] ids: Vec<i64>,
        #[case] method: &str,
    ) {
        let result = validate(&command(ids, method, ""));
        assert_eq!(result, Err(ValidationError::MissingRequiredField));
    }

    #[rstest]
    fn it_should_accept_a_note_of_exactly_the_maximum_length() {
        let note = "x".repeat(REFERENCE_NOTE_MAX_CHARS);
        let result = validate(&command(vec![1], "cash", &note));
        assert_eq!(result, Ok(()));
    }

    #[rstest]
    fn it_should_reject_a_note_one_character_over_the_maximum() {
        let note = "x".repeat(REFERENCE_NOTE_MAX_CHARS + 1);
        let result = validate(&command(vec![1], "cash", &note));
        assert_eq!(result, Err(ValidationError::ReferenceNoteTooLong));
    }

    // The limit counts characters, not bytes. 120 two-byte characters must
    // pass even though the note is 240 bytes long.
    #[rstest]
    fn it_should_measure_the_note_length_in_characters() {
        let note = "é".repeat(REFERENCE_NOTE_MAX_CHARS);
        assert!(note.len() > REFERENCE_NOTE_MAX_CHARS);
        let result = validate(&command(vec![1], "cash", &note));
        assert_eq!(result, Ok(()));
    }

    #[rstest]
    fn it_should_report_missing_fields_before_the_note_length() {
        let note = "x".repeat(REFERENCE_NOTE_MAX_CHARS + 1);
        let result = validate(&command(vec![], "cash", &note));
        assert_eq!(result, Err(ValidationError::MissingRequiredField));
    }
}
