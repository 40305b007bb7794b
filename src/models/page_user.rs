use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Role a member holds within a page.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PageRole {
    Member,
    Operator,
    Admin,
}

impl fmt::Display for PageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRole::Member => write!(f, "Member"),
            PageRole::Operator => write!(f, "Operator"),
            PageRole::Admin => write!(f, "Admin"),
        }
    }
}

/// A member of a page, as listed under `/pages/{id}/users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUser {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    pub page_role: PageRole,
    pub created_at: DateTime<Utc>,
}

impl PageUser {
    /// The preferred display name: the server-provided full name when set,
    /// otherwise first + last.
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}
