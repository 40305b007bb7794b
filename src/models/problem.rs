use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Asset, AssetDescriptor};

/// A problem as returned by both the collection and detail endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub testcases: Vec<Testcase>,
    pub created_at: DateTime<Utc>,
}

/// One testcase attached to a problem. Either file may be missing when the
/// matching `.in`/`.out` upload never arrived.
#[derive(Debug, Clone, Deserialize)]
pub struct Testcase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub input: Option<Asset>,
    #[serde(default)]
    pub output: Option<Asset>,
}

impl Testcase {
    /// A testcase is incomplete when either side of the pair is missing.
    pub fn is_missing_files(&self) -> bool {
        self.input.is_none() || self.output.is_none()
    }
}

/// Request payload for creating a problem.
#[derive(Debug, Serialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, message = "Problem title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Problem content is required"))]
    pub content: String,
    pub images: Vec<AssetDescriptor>,
}

/// Request payload for appending uploaded testcase files to a problem.
#[derive(Debug, Serialize)]
pub struct AddTestcasesRequest {
    pub testcases: Vec<AssetDescriptor>,
}

/// Request payload for deleting one testcase pair.
#[derive(Debug, Serialize)]
pub struct DeleteTestcaseRequest {
    pub input_id: String,
    pub output_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_parses_wire_shape() {
        let json = r#"{
            "id": "p-1",
            "title": "Two Sum",
            "content": "<p>Find two numbers.</p>",
            "testcases": [
                {"id": "t-1", "name": "testcase_abc", "input": {"id": "a-1", "name": "abc.in", "url": "https://cdn/abc.in"}}
            ],
            "createdAt": "2025-03-14T09:26:53.000Z"
        }"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.title, "Two Sum");
        assert_eq!(problem.testcases.len(), 1);
        assert!(problem.testcases[0].is_missing_files());
    }

    #[test]
    fn test_create_problem_request_serializes_snake_case_descriptors() {
        let request = CreateProblemRequest {
            title: "Two Sum".to_string(),
            content: "<p>body</p>".to_string(),
            images: vec![AssetDescriptor {
                key: "problems/img-1".to_string(),
                name: "figure.png".to_string(),
                content_type: "image/png".to_string(),
                size: 2048,
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["images"][0]["content_type"], "image/png");
        assert_eq!(json["images"][0]["key"], "problems/img-1");
    }
}
