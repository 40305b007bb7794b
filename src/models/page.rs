use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of a page registration.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Started,
    Approved,
    Rejected,
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageStatus::Started => write!(f, "started"),
            PageStatus::Approved => write!(f, "approved"),
            PageStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl PageStatus {
    /// Whether the page still awaits an approve/reject decision.
    pub fn is_pending_review(&self) -> bool {
        matches!(self, PageStatus::Started)
    }
}

/// A page as returned by both the collection and detail endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    pub status: PageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for the editable page fields. Unset fields are left
/// untouched by the server.
#[derive(Debug, Default, Serialize)]
pub struct UpdatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UpdatePageRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.url.is_none() && self.content.is_none()
    }
}
