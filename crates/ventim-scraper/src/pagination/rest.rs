//! Exploration API pagination (`v1/attractions`, `v1/locations`,
//! `v2/productGroups`).

use serde::Deserialize;
use serde_json::{Map, Value};
use ventim_core::SearchCriteria;

use super::{FetchedPage, PageSource};
use crate::error::ScraperError;
use crate::transport::Transport;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    total_pages: u32,
    #[serde(rename = "_links", default)]
    links: Map<String, Value>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// One page of an exploration response: the item list found under the
/// endpoint's items key, the reported page count, and whether a `next` link
/// was present.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvelope {
    pub items: Vec<Value>,
    pub total_pages: u32,
    pub has_next_link: bool,
}

impl PageEnvelope {
    /// Parses a response body. `context` names the endpoint in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Deserialize`] if `totalPages` is absent or not
    /// an integer, and [`ScraperError::MissingField`] if `items_key` is absent
    /// or not an array. A missing `_links` object counts as "no next link".
    pub fn from_json(body: Value, items_key: &str, context: &str) -> Result<Self, ScraperError> {
        let mut raw: RawEnvelope =
            serde_json::from_value(body).map_err(|source| ScraperError::Deserialize {
                context: context.to_owned(),
                source,
            })?;

        let items = match raw.rest.remove(items_key) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ScraperError::MissingField {
                    context: context.to_owned(),
                    field: items_key.to_owned(),
                })
            }
        };

        Ok(Self {
            items,
            total_pages: raw.total_pages,
            has_next_link: raw.links.contains_key("next"),
        })
    }

    /// Iteration ends after `page` once the reported page count is reached
    /// or the server stops advertising a next link, whichever comes first.
    #[must_use]
    pub fn is_last_page(&self, page: u32) -> bool {
        page >= self.total_pages || !self.has_next_link
    }
}

/// Pages through one exploration endpoint with fixed search criteria.
pub struct ExplorationSource<'a, T> {
    transport: &'a T,
    endpoint: String,
    items_key: &'static str,
    criteria: SearchCriteria,
}

impl<'a, T: Transport> ExplorationSource<'a, T> {
    /// Validates `criteria` up front, so an invalid search never reaches the
    /// network.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Validation`] if the criteria are rejected.
    pub fn new(
        transport: &'a T,
        endpoint: impl Into<String>,
        items_key: &'static str,
        criteria: SearchCriteria,
    ) -> Result<Self, ScraperError> {
        criteria.validate()?;
        Ok(Self {
            transport,
            endpoint: endpoint.into(),
            items_key,
            criteria,
        })
    }
}

impl<T: Transport> PageSource for ExplorationSource<'_, T> {
    async fn fetch_page(&mut self, page: u32) -> Result<FetchedPage, ScraperError> {
        tracing::debug!(endpoint = %self.endpoint, page, "fetching exploration page");
        let query = self.criteria.to_query(page);
        let response = self.transport.fetch_json(&self.endpoint, &query).await?;
        let envelope = PageEnvelope::from_json(response.body, self.items_key, &self.endpoint)?;
        let last_page = envelope.is_last_page(page);

        tracing::debug!(
            endpoint = %self.endpoint,
            page,
            total_pages = envelope.total_pages,
            items = envelope.items.len(),
            last_page,
            "exploration page received"
        );

        Ok(FetchedPage {
            items: envelope.items,
            last_page,
        })
    }
}
