//! Revenue Model

use serde::{Deserialize, Serialize};

/// Revenue aggregate for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    #[serde(default)]
    pub id: Option<String>,
    pub date: String,
    pub total_amount: f64,
    #[serde(default)]
    pub invoice_count: u32,
}
