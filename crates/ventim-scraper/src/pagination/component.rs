//! Component endpoint drivers: the paginated event list and the single-shot
//! calendar.

use serde_json::Value;
use ventim_core::{ComponentQuery, NextPageStrategy};

use super::{FetchedPage, PageSource};
use crate::error::ScraperError;
use crate::html::{
    detect_next_page, find_configuration_block, find_ld_json_records, CALENDAR_MARKER,
};
use crate::transport::Transport;

/// Pages through the component event list. Each page's events come from its
/// `ld+json` blocks; continuation comes from the page's pagination control
/// and is capped at `max_pages` requests.
pub struct ComponentSource<'a, T> {
    transport: &'a T,
    endpoint: String,
    query: ComponentQuery,
    max_pages: u32,
    strategy: NextPageStrategy,
}

impl<'a, T: Transport> ComponentSource<'a, T> {
    /// A `max_pages` of 0 is treated as 1; the first page is always fetched.
    #[must_use]
    pub fn new(
        transport: &'a T,
        endpoint: impl Into<String>,
        query: ComponentQuery,
        max_pages: u32,
        strategy: NextPageStrategy,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            query,
            max_pages: max_pages.max(1),
            strategy,
        }
    }
}

impl<T: Transport> PageSource for ComponentSource<'_, T> {
    async fn fetch_page(&mut self, page: u32) -> Result<FetchedPage, ScraperError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            esid = self.query.subject_id,
            page,
            "fetching component page"
        );
        let response = self
            .transport
            .fetch_html(&self.endpoint, &self.query.to_query(page))
            .await?;

        let items = find_ld_json_records(&response.body)?;
        let has_next = detect_next_page(&response.body, self.strategy);
        let capped = page >= self.max_pages;

        if has_next && capped {
            tracing::warn!(
                esid = self.query.subject_id,
                max_pages = self.max_pages,
                "page cap reached; further component pages are not fetched"
            );
        } else if !has_next {
            tracing::debug!(esid = self.query.subject_id, page, "no next page indicated");
        }

        Ok(FetchedPage {
            items,
            last_page: !has_next || capped,
        })
    }
}

/// Extracts the calendar entries from a component page: the array at
/// `calendar_content.result` inside the calendar configuration block.
///
/// # Errors
///
/// Returns [`ScraperError::PayloadNotFound`] if the page has no calendar
/// block, [`ScraperError::EmbeddedJson`] if the block is malformed, and
/// [`ScraperError::MissingField`] if the result array is absent.
pub fn extract_calendar_entries(html: &str) -> Result<Vec<Value>, ScraperError> {
    let mut block = find_configuration_block(html, CALENDAR_MARKER)?;
    match block
        .get_mut(CALENDAR_MARKER)
        .and_then(|content| content.get_mut("result"))
        .map(Value::take)
    {
        Some(Value::Array(entries)) => Ok(entries),
        _ => Err(ScraperError::MissingField {
            context: CALENDAR_MARKER.to_owned(),
            field: "result".to_owned(),
        }),
    }
}

/// Single-shot calendar extraction: exactly one request, every entry of the
/// embedded result array, no continuation.
pub struct CalendarSource<'a, T> {
    transport: &'a T,
    endpoint: String,
    query: ComponentQuery,
}

impl<'a, T: Transport> CalendarSource<'a, T> {
    #[must_use]
    pub fn new(transport: &'a T, endpoint: impl Into<String>, query: ComponentQuery) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            query,
        }
    }
}

impl<T: Transport> PageSource for CalendarSource<'_, T> {
    async fn fetch_page(&mut self, page: u32) -> Result<FetchedPage, ScraperError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            esid = self.query.subject_id,
            "fetching component calendar"
        );
        let response = self
            .transport
            .fetch_html(&self.endpoint, &self.query.to_query(page))
            .await?;
        let items = extract_calendar_entries(&response.body)?;

        Ok(FetchedPage {
            items,
            last_page: true,
        })
    }
}

#[cfg(test)]
#[path = "component_test.rs"]
mod tests;
