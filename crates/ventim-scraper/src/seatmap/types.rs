//! Normalized seat-map records.
//!
//! The private seat-map API answers with a compact positional encoding:
//!
//! ```text
//! {
//!   "key": "...", "availabilityTimestamp": 1716..., "individualSeats": 812,
//!   "dimension": [4096, 3072], "seatSize": 24,
//!   "blocks": [{ "blockId": "b1", "name": "Parkett", "blockDescription": "...",
//!                "rows": [["1", [["1", 0, 100, 200], ["2", 0, 124, 200]]]] }],
//!   "pcs": [["pc1", "Kategorie 1", "#ff0000", "#aa0000"]]
//! }
//! ```
//!
//! Rows are `[rowCode, seats]`, seats are `[code, priceCategoryIndex, x, y]`
//! and price categories are `[id, name, color, secondaryColor?]`. The types
//! below name every positional field; the secondary color is dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMap {
    pub seatmap_key: String,
    pub seatmap_timestamp: i64,
    pub seatmap_individual_seats: i64,
    pub seatmap_dimension_x: i64,
    pub seatmap_dimension_y: i64,
    pub seatmap_seat_size: i64,
    pub blocks: Vec<Block>,
    pub price_categories: Vec<PriceCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Sent as either a string or a number; kept as text.
    pub block_id: String,
    pub block_name: String,
    pub block_description: Option<String>,
    pub block_rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub row_code: String,
    pub row_seats: Vec<Seat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_code: String,
    /// Index into [`SeatMap::price_categories`]. Not bounds-checked.
    pub seat_price_category_index: i64,
    pub seat_coordinate_x: i64,
    pub seat_coordinate_y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCategory {
    pub price_category_id: String,
    pub price_category_name: String,
    pub price_category_color: String,
}

/// Result of a seat-map fetch: the raw wire JSON, or the normalized record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeatMapPayload {
    Raw(serde_json::Value),
    Normalized(SeatMap),
}
