//! Seat-map decoding and signed follow-up request construction.

mod decode;
mod params;
mod types;

pub use decode::decode_seat_map;
pub use params::build_seat_map_request_params;
pub use types::{Block, PriceCategory, Row, Seat, SeatMap, SeatMapPayload};
