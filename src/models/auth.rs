use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for sign-in.
#[derive(Debug, Serialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Response for a successful sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
}

/// Claims carried in the access token.
///
/// The client only reads identity fields; signature verification is the
/// server's job, so decoding here skips it.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub exp: Option<usize>,
    #[serde(default)]
    pub iat: Option<usize>,
}

/// The signed-in user, as decoded from the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
        }
    }
}

/// Established session state after sign-in.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
    pub message: String,
}

/// Profile returned by the current-user lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}
