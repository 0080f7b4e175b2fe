// src/models/store_item.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'store_items' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct StoreItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,

    /// Item kind: 'theme', 'hint' or 'badge'.
    /// Mapped from the column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub item_type: String,

    /// Payload applied when the item is used (theme name, hint amount, ...).
    pub value: String,
}
