//! Booking Model (yêu cầu đặt bàn)

use serde::{Deserialize, Serialize};

/// Booking request status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub ordered_time: Option<String>,
    #[serde(default)]
    pub person_number: Option<u32>,
    /// Assigned table name, once the request has been approved
    #[serde(default, alias = "table")]
    pub table_name: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub name: String,
    pub phone: String,
    pub ordered_time: String,
    pub person_number: u32,
}
