use super::platform::{Document, Element};

pub const REQUIRED_FIELDS: &str = "input[required], select[required], textarea[required]";
pub const INVALID_CLASS: &str = "is-invalid";
pub const VALID_CLASS: &str = "is-valid";

/// Marks every required field of the form as valid or invalid.
///
/// Returns `true` when all required fields have non-blank values. An unknown
/// form id is treated as invalid.
pub fn validate_form<D: Document>(document: &D, form_id: &str) -> bool {
    let Some(form) = document.element_by_id(form_id) else {
        return false;
    };

    let mut is_valid = true;
    for field in form.query_all(REQUIRED_FIELDS) {
        let filled = field
            .value()
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false);
        if filled {
            field.remove_class(INVALID_CLASS);
            field.add_class(VALID_CLASS);
        } else {
            field.remove_class(VALID_CLASS);
            field.add_class(INVALID_CLASS);
            is_valid = false;
        }
    }
    is_valid
}
