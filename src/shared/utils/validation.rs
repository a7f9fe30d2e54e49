use crate::shared::errors::AppError;

pub const MIN_FIELD_LENGTH: usize = 3;
pub const MAX_FIELD_LENGTH: usize = 50;

pub struct Validator;

impl Validator {
    /// Check a required 3-50 character text field, returning `"<field>: <problem>"` entries
    pub fn check_text_field(field: &str, value: &str) -> Vec<String> {
        let mut errors = Vec::new();

        if value.trim().is_empty() {
            errors.push(format!("{}: must not be blank", field));
        }

        let length = value.chars().count();
        if !(MIN_FIELD_LENGTH..=MAX_FIELD_LENGTH).contains(&length) {
            errors.push(format!(
                "{}: length must be between {} and {}",
                field, MIN_FIELD_LENGTH, MAX_FIELD_LENGTH
            ));
        }

        errors
    }

    /// Run [`Validator::check_text_field`] over several fields and fail with every problem found
    pub fn validate_text_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
        let errors: Vec<String> = fields
            .iter()
            .flat_map(|(field, value)| Self::check_text_field(field, value))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(errors))
        }
    }
}
