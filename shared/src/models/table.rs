//! Restaurant Table Model

use serde::{Deserialize, Serialize};

use super::order_item::OrderItem;

/// Table status (trạng thái bàn)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TableStatus {
    #[default]
    #[serde(rename = "Trống")]
    Empty,
    #[serde(rename = "Đang sử dụng")]
    Occupied,
    #[serde(rename = "Chờ thanh toán")]
    AwaitingPayment,
    #[serde(rename = "Đã đặt")]
    Reserved,
}

impl TableStatus {
    /// Wire value as sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "Trống",
            Self::Occupied => "Đang sử dụng",
            Self::AwaitingPayment => "Chờ thanh toán",
            Self::Reserved => "Đã đặt",
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table type (loại bàn)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableType {
    pub id: String,
    pub name: String,
}

/// Restaurant table entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTable {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: TableStatus,
    pub table_type: TableType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_person: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Order items, only present once fetched for this table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dishes: Option<Vec<OrderItem>>,
}

impl RestaurantTable {
    /// Number of order items currently attached
    pub fn dish_count(&self) -> usize {
        self.dishes.as_ref().map_or(0, Vec::len)
    }
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub name: String,
    pub table_type: TableType,
    pub max_person: u32,
    pub note: Option<String>,
}

/// Table status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}

/// Create table type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableTypeCreate {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_vietnamese_wire_values() {
        let json = serde_json::to_string(&TableStatus::AwaitingPayment).unwrap();
        assert_eq!(json, "\"Chờ thanh toán\"");
        let parsed: TableStatus = serde_json::from_str("\"Đã đặt\"").unwrap();
        assert_eq!(parsed, TableStatus::Reserved);
    }

    #[test]
    fn table_without_dishes_has_zero_count() {
        let table: RestaurantTable = serde_json::from_value(serde_json::json!({
            "id": "t1",
            "name": "Bàn 1",
            "status": "Trống",
            "tableType": { "id": "tt1", "name": "Thường" },
            "maxPerson": 4
        }))
        .unwrap();
        assert_eq!(table.dish_count(), 0);
        assert_eq!(table.max_person, Some(4));
    }
}
