//! Page-related custom validators.

use crate::constants::{ERR_EMPTY_PAGE_UPDATE, ERR_PAGE_FIELD_EMPTY, ERR_PAGE_NOT_PENDING};
use crate::errors::ApiError;
use crate::models::{PageStatus, UpdatePageRequest};

/// Validate a partial page update before dispatch: it must change at least
/// one field and no provided value may be blank.
pub fn validate_page_update(request: &UpdatePageRequest) -> Result<(), ApiError> {
    if request.is_empty() {
        return Err(ApiError::Validation(vec![ERR_EMPTY_PAGE_UPDATE.to_string()]));
    }

    let fields = [
        request.name.as_deref(),
        request.address.as_deref(),
        request.url.as_deref(),
        request.content.as_deref(),
    ];
    if fields.iter().flatten().any(|value| value.trim().is_empty()) {
        return Err(ApiError::Validation(vec![ERR_PAGE_FIELD_EMPTY.to_string()]));
    }

    Ok(())
}

/// Approve/reject only applies to a page still awaiting review.
pub fn validate_page_moderatable(status: PageStatus) -> Result<(), ApiError> {
    if !status.is_pending_review() {
        return Err(ApiError::Validation(vec![ERR_PAGE_NOT_PENDING.to_string()]));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_rejected() {
        assert!(validate_page_update(&UpdatePageRequest::default()).is_err());
    }

    #[test]
    fn test_blank_field_rejected() {
        let request = UpdatePageRequest {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(validate_page_update(&request).is_err());
    }

    #[test]
    fn test_valid_update_accepted() {
        let request = UpdatePageRequest {
            address: Some("34 Oak Ave".to_string()),
            ..Default::default()
        };
        assert!(validate_page_update(&request).is_ok());
    }

    #[test]
    fn test_only_started_pages_are_moderatable() {
        assert!(validate_page_moderatable(PageStatus::Started).is_ok());
        assert!(validate_page_moderatable(PageStatus::Approved).is_err());
        assert!(validate_page_moderatable(PageStatus::Rejected).is_err());
    }
}
