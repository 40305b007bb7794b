//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to ApiError::Validation.
///
/// Extracts the per-field messages from ValidationErrors and flattens them
/// into the client's validation error shape.
///
/// # Example
/// ```ignore
/// request.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
    }

    #[test]
    fn test_flattens_field_messages() {
        let err = Sample { name: String::new() }.validate().unwrap_err();
        match validation_errors_to_api_error(err) {
            ApiError::Validation(messages) => {
                assert_eq!(messages, vec!["name is required".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
