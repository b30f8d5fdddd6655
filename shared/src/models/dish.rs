//! Dish Model (menu catalog entry)

use serde::{Deserialize, Serialize};

/// Dish type (loại món)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishType {
    pub id: String,
    pub name: String,
}

/// Dish entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_type: Option<DishType>,
    pub price: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCreate {
    pub dish_type: DishType,
    pub name: String,
    pub price: f64,
    pub unit: String,
    pub note: Option<String>,
    pub image_base64: Option<String>,
}

/// Update dish payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_type: Option<DishType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create dish type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishTypeCreate {
    pub name: String,
}
