//! Invoice Model

use serde::{Deserialize, Serialize};

/// Invoice status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Unpaid,
}

/// One dish line of an invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDish {
    pub dish_id: String,
    pub dish_name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Invoice entity, computed by the backend from a table's order items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_id: String,
    pub table_name: String,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub pay_method: Option<String>,
    #[serde(default)]
    pub user_account_id: Option<String>,
    #[serde(default)]
    pub user_account_name: Option<String>,
    #[serde(default)]
    pub invoice_dish_responses: Vec<InvoiceDish>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sum: f64,
}

/// Settlement payload sent when confirming a payment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
}
