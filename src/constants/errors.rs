//! Error message constants used throughout the client.

// Authentication errors
pub const ERR_INVALID_TOKEN: &str = "Invalid or malformed token";

// Problem errors
pub const ERR_PROBLEM_TITLE_REQUIRED: &str = "Problem title is required";
pub const ERR_PROBLEM_CONTENT_REQUIRED: &str = "Problem content is required";
pub const ERR_NO_TESTCASE_FILES: &str = "At least one testcase file is required";

// Page errors
pub const ERR_PAGE_NOT_PENDING: &str = "Page is not awaiting review";
pub const ERR_EMPTY_PAGE_UPDATE: &str = "No page fields to update";
pub const ERR_PAGE_FIELD_EMPTY: &str = "Page field value must not be empty";

// Transport errors
pub const ERR_MALFORMED_RESPONSE: &str = "Malformed response body";
pub const ERR_CLIENT_BUILD_FAILED: &str = "Failed to build HTTP client";
