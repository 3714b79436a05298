//! NDJSON output: one compact JSON document per line on stdout.

use std::pin::pin;

use futures::{Stream, TryStreamExt};
use serde::Serialize;
use serde_json::Value;
use ventim_scraper::ScraperError;

pub(crate) fn print_record<T: Serialize>(record: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}

/// Prints records as they arrive and stops pulling after `limit` of them,
/// so no further pages are requested.
pub(crate) async fn print_records<S>(stream: S, limit: Option<usize>) -> anyhow::Result<usize>
where
    S: Stream<Item = Result<Value, ScraperError>>,
{
    let mut stream = pin!(stream);
    let mut printed = 0usize;

    while limit.map_or(true, |max| printed < max) {
        let Some(record) = stream.try_next().await? else {
            break;
        };
        print_record(&record)?;
        printed += 1;
    }

    tracing::debug!(printed, "output finished");
    Ok(printed)
}
