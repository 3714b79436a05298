//! Structured-data locator for component and event pages.
//!
//! The pages embed everything worth extracting as JSON inside `<script>`
//! tags. This is a narrow parser over one known page template rather than a
//! general HTML processor:
//!
//! - `<script type="application/ld+json">` blocks carry schema.org event
//!   records, one per block.
//! - `<script type="application/configuration">` blocks carry widget state.
//!   Several exist per page; the one of interest is identified by a marker
//!   substring such as `"calendar_content"` or `"seatmapOptions"`.
//! - The pagination control carries a `"<current> von <total>"` label or a
//!   "next page" button, see [`NextPageStrategy`].
//!
//! Script lookup is expressed as a [`ScriptLocator`] so that template drift
//! stays contained in one strategy.

mod next_page;
mod scripts;

pub use next_page::detect_next_page;
pub use scripts::{
    find_configuration_block, find_ld_json_records, has_configuration_block, ScriptLocator,
    CONFIGURATION_SCRIPT_TYPE, LD_JSON_SCRIPT_TYPE,
};
pub use ventim_core::NextPageStrategy;

/// Marker identifying the calendar widget's configuration block.
pub const CALENDAR_MARKER: &str = "calendar_content";

/// Marker identifying the seat-map configuration block on an event page.
pub const SEATMAP_MARKER: &str = "seatmapOptions";
