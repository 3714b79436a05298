pub mod client;
pub mod error;
pub mod html;
pub mod pagination;
pub mod seatmap;
pub mod transport;

pub use client::EventimClient;
pub use error::ScraperError;
pub use html::{
    detect_next_page, find_configuration_block, find_ld_json_records, has_configuration_block,
    CALENDAR_MARKER, SEATMAP_MARKER,
};
pub use pagination::{extract_calendar_entries, Pager, PageEnvelope};
pub use seatmap::{build_seat_map_request_params, decode_seat_map, SeatMap, SeatMapPayload};
pub use transport::{HtmlResponse, HttpTransport, JsonResponse, Transport};
