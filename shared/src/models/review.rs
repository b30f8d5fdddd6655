//! Review Model

use serde::{Deserialize, Serialize};

/// Reviewer summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Customer review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub content: String,
    pub star_rating: u8,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<ReviewUser>,
}

/// Review submission (sent as query parameters)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    pub user_id: String,
    pub content: String,
    pub rating_star: u8,
}
