//! Seat-map command handler.

use anyhow::Context;
use ventim_scraper::{EventimClient, SEATMAP_MARKER};

use crate::output::print_record;

/// Looks up the event's seat-map options and fetches the seat map.
///
/// Events without a seat map (general admission) print nothing and exit
/// successfully.
///
/// # Errors
///
/// Returns an error if either request fails, the options block lacks
/// `seatmapOptions`, or the seat map cannot be decoded.
pub(crate) async fn run_seatmap(
    client: &EventimClient,
    event_path: &str,
    raw: bool,
    options_only: bool,
) -> anyhow::Result<()> {
    let Some(information) = client.seat_map_information(event_path).await? else {
        tracing::warn!(event_path, "event has no seat map");
        return Ok(());
    };

    let options = information
        .get(SEATMAP_MARKER)
        .with_context(|| format!("configuration block has no \"{SEATMAP_MARKER}\" object"))?;

    if options_only {
        return print_record(options);
    }

    let payload = client.seat_map(options, !raw).await?;
    print_record(&payload)
}
