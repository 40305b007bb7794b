//! Notification message constants used throughout the client.

// Authentication messages
pub const MSG_SIGN_IN_SUCCESS: &str = "Signed in successfully";
pub const MSG_SIGN_OUT_SUCCESS: &str = "Signed out";

// Problem messages
pub const MSG_PROBLEM_CREATED: &str = "Problem created successfully";
pub const MSG_PROBLEM_CREATE_FAILED: &str = "Failed to create problem";
pub const MSG_TESTCASES_UPLOADED: &str = "Testcases uploaded successfully";
pub const MSG_TESTCASES_UPLOAD_FAILED: &str = "Failed to upload testcases";
pub const MSG_TESTCASE_DELETED: &str = "Testcase deleted successfully";
pub const MSG_TESTCASE_DELETE_FAILED: &str = "Failed to delete testcase";

// Page messages
pub const MSG_PAGE_APPROVED: &str = "Page approved successfully";
pub const MSG_PAGE_APPROVE_FAILED: &str = "Failed to approve page";
pub const MSG_PAGE_REJECTED: &str = "Page rejected successfully";
pub const MSG_PAGE_REJECT_FAILED: &str = "Failed to reject page";
pub const MSG_PAGE_UPDATED: &str = "Page updated successfully";
pub const MSG_PAGE_UPDATE_FAILED: &str = "Failed to update page";
