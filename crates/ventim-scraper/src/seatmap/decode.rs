//! Positional wire format to [`SeatMap`] conversion.
//!
//! Pure and order-preserving. The wire format is trusted: no seat
//! deduplication, no coordinate or price-category bounds checks. Only the
//! shape is verified; any absent field or short tuple is a
//! [`ScraperError::Schema`] naming the JSON path that broke.

use serde_json::Value;

use super::types::{Block, PriceCategory, Row, Seat, SeatMap};
use crate::error::ScraperError;

fn schema_error(path: &str, reason: impl Into<String>) -> ScraperError {
    ScraperError::Schema {
        path: path.to_owned(),
        reason: reason.into(),
    }
}

fn field<'a>(object: &'a Value, key: &str, path: &str) -> Result<&'a Value, ScraperError> {
    if !object.is_object() {
        return Err(schema_error(path, "expected an object"));
    }
    object
        .get(key)
        .ok_or_else(|| schema_error(&format!("{path}.{key}"), "missing field"))
}

fn array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], ScraperError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| schema_error(path, "expected an array"))
}

/// A positional tuple with at least `arity` elements. Extra trailing
/// elements are allowed and ignored.
fn tuple<'a>(value: &'a Value, arity: usize, path: &str) -> Result<&'a [Value], ScraperError> {
    let items = array(value, path)?;
    if items.len() < arity {
        return Err(schema_error(
            path,
            format!(
                "expected a tuple of {arity} elements, found {}",
                items.len()
            ),
        ));
    }
    Ok(items)
}

fn string(value: &Value, path: &str) -> Result<String, ScraperError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| schema_error(path, "expected a string"))
}

fn integer(value: &Value, path: &str) -> Result<i64, ScraperError> {
    value
        .as_i64()
        .ok_or_else(|| schema_error(path, "expected an integer"))
}

/// Identifiers arrive as strings or integers depending on the venue.
fn identifier(value: &Value, path: &str) -> Result<String, ScraperError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(schema_error(path, "expected a string or number")),
    }
}

fn optional_string(value: &Value, path: &str) -> Result<Option<String>, ScraperError> {
    match value {
        Value::Null => Ok(None),
        other => string(other, path).map(Some),
    }
}

fn decode_seat(value: &Value, path: &str) -> Result<Seat, ScraperError> {
    let seat = tuple(value, 4, path)?;
    Ok(Seat {
        seat_code: identifier(&seat[0], &format!("{path}[0]"))?,
        seat_price_category_index: integer(&seat[1], &format!("{path}[1]"))?,
        seat_coordinate_x: integer(&seat[2], &format!("{path}[2]"))?,
        seat_coordinate_y: integer(&seat[3], &format!("{path}[3]"))?,
    })
}

fn decode_row(value: &Value, path: &str) -> Result<Row, ScraperError> {
    let row = tuple(value, 2, path)?;
    let seats_path = format!("{path}[1]");
    let row_seats = array(&row[1], &seats_path)?
        .iter()
        .enumerate()
        .map(|(i, seat)| decode_seat(seat, &format!("{seats_path}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Row {
        row_code: identifier(&row[0], &format!("{path}[0]"))?,
        row_seats,
    })
}

fn decode_block(value: &Value, path: &str) -> Result<Block, ScraperError> {
    let rows_path = format!("{path}.rows");
    let block_rows = array(field(value, "rows", path)?, &rows_path)?
        .iter()
        .enumerate()
        .map(|(i, row)| decode_row(row, &format!("{rows_path}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Block {
        block_id: identifier(field(value, "blockId", path)?, &format!("{path}.blockId"))?,
        block_name: string(field(value, "name", path)?, &format!("{path}.name"))?,
        block_description: optional_string(
            field(value, "blockDescription", path)?,
            &format!("{path}.blockDescription"),
        )?,
        block_rows,
    })
}

fn decode_price_category(value: &Value, path: &str) -> Result<PriceCategory, ScraperError> {
    let category = tuple(value, 3, path)?;
    Ok(PriceCategory {
        price_category_id: identifier(&category[0], &format!("{path}[0]"))?,
        price_category_name: string(&category[1], &format!("{path}[1]"))?,
        price_category_color: string(&category[2], &format!("{path}[2]"))?,
    })
}

/// Converts the positional seat-map wire format into named records.
///
/// Block, row, seat and price-category order is preserved exactly.
///
/// # Errors
///
/// Returns [`ScraperError::Schema`] if any expected field is absent, has the
/// wrong JSON type, or a tuple is shorter than its arity (row < 2,
/// seat < 4, price category < 3, dimension < 2).
pub fn decode_seat_map(wire: &Value) -> Result<SeatMap, ScraperError> {
    let root = "$";
    let dimension = tuple(field(wire, "dimension", root)?, 2, "$.dimension")?;

    let blocks = array(field(wire, "blocks", root)?, "$.blocks")?
        .iter()
        .enumerate()
        .map(|(i, block)| decode_block(block, &format!("$.blocks[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let price_categories = array(field(wire, "pcs", root)?, "$.pcs")?
        .iter()
        .enumerate()
        .map(|(i, pc)| decode_price_category(pc, &format!("$.pcs[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SeatMap {
        seatmap_key: string(field(wire, "key", root)?, "$.key")?,
        seatmap_timestamp: integer(
            field(wire, "availabilityTimestamp", root)?,
            "$.availabilityTimestamp",
        )?,
        seatmap_individual_seats: integer(
            field(wire, "individualSeats", root)?,
            "$.individualSeats",
        )?,
        seatmap_dimension_x: integer(&dimension[0], "$.dimension[0]")?,
        seatmap_dimension_y: integer(&dimension[1], "$.dimension[1]")?,
        seatmap_seat_size: integer(field(wire, "seatSize", root)?, "$.seatSize")?,
        blocks,
        price_categories,
    })
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
