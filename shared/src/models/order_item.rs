//! Order Item Model
//!
//! A dish instance attached to a table. Name and price are a snapshot of the
//! menu entry taken when the item was ordered.

use serde::{Deserialize, Serialize};

/// Order item status (trạng thái món)
///
/// ```text
/// NotCalled -> Ordered -> Preparing -> Completed -> Cancelled
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderItemStatus {
    #[default]
    #[serde(rename = "Chưa gọi")]
    NotCalled,
    #[serde(rename = "Đã gọi")]
    Ordered,
    #[serde(rename = "Đang chuẩn bị")]
    Preparing,
    #[serde(rename = "Đã hoàn thành")]
    Completed,
    #[serde(rename = "Bị hủy")]
    Cancelled,
}

impl OrderItemStatus {
    /// Wire value as sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotCalled => "Chưa gọi",
            Self::Ordered => "Đã gọi",
            Self::Preparing => "Đang chuẩn bị",
            Self::Completed => "Đã hoàn thành",
            Self::Cancelled => "Bị hủy",
        }
    }

    /// Forward step of the kitchen chain. `Cancelled` has no successor.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::NotCalled => Some(Self::Ordered),
            Self::Ordered => Some(Self::Preparing),
            Self::Preparing => Some(Self::Completed),
            Self::Completed => Some(Self::Cancelled),
            Self::Cancelled => None,
        }
    }
}

impl std::fmt::Display for OrderItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    #[serde(default)]
    pub table_id: String,
    pub dish_id: String,
    pub dish_name: String,
    pub price: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub status: OrderItemStatus,
}

/// One line of an add-to-table request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemCreate {
    pub table_id: String,
    pub dish_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Absolute quantity update for one order item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemQuantityUpdate {
    pub id: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_the_chain_and_stops_at_cancelled() {
        let mut status = OrderItemStatus::NotCalled;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                OrderItemStatus::NotCalled,
                OrderItemStatus::Ordered,
                OrderItemStatus::Preparing,
                OrderItemStatus::Completed,
                OrderItemStatus::Cancelled,
            ]
        );
    }

    #[test]
    fn create_line_skips_missing_note() {
        let line = OrderItemCreate {
            table_id: "t1".into(),
            dish_id: "d1".into(),
            quantity: 2,
            note: None,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json, serde_json::json!({"tableId": "t1", "dishId": "d1", "quantity": 2}));
    }
}
