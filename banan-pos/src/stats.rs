//! Grid statistics and search over the loaded tables

use serde::Serialize;
use shared::models::{RestaurantTable, TableStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStats {
    pub total: usize,
    pub occupied: usize,
    pub empty: usize,
    pub reserved: usize,
    pub awaiting_payment: usize,
}

impl TableStats {
    pub fn from_tables(tables: &[RestaurantTable]) -> Self {
        tables.iter().fold(Self::default(), |mut stats, table| {
            stats.total += 1;
            match table.status {
                TableStatus::Occupied => stats.occupied += 1,
                TableStatus::Empty => stats.empty += 1,
                TableStatus::Reserved => stats.reserved += 1,
                TableStatus::AwaitingPayment => stats.awaiting_payment += 1,
            }
            stats
        })
    }
}

/// Grid search: name substring (case-insensitive), status and table type
#[derive(Debug, Clone, Default)]
pub struct TableFilter {
    pub query: String,
    pub status: Option<TableStatus>,
    pub table_type_id: Option<String>,
}

impl TableFilter {
    pub fn matches(&self, table: &RestaurantTable) -> bool {
        let query = self.query.trim().to_lowercase();
        (query.is_empty() || table.name.to_lowercase().contains(&query))
            && self.status.is_none_or(|s| table.status == s)
            && self
                .table_type_id
                .as_deref()
                .is_none_or(|id| table.table_type.id == id)
    }

    pub fn apply<'a>(&self, tables: &'a [RestaurantTable]) -> Vec<&'a RestaurantTable> {
        tables.iter().filter(|t| self.matches(t)).collect()
    }
}
