//! High-level client over the exploration API, the component endpoint and
//! the seat-map pipeline.

mod component;
mod explore;
mod seatmap;

use ventim_core::{AppConfig, NextPageStrategy};

use crate::error::ScraperError;
use crate::transport::{HttpTransport, Transport};

/// Exploration API item keys, one per endpoint.
pub const ATTRACTIONS_KEY: &str = "attractions";
pub const LOCATIONS_KEY: &str = "locations";
pub const PRODUCT_GROUPS_KEY: &str = "productGroups";

/// Entry point for every extraction operation.
///
/// Multi-page operations return lazy streams: a page is requested only when
/// the consumer pulls past the end of the previous one, and dropping the
/// stream stops all further requests. Nothing is cached or retried.
pub struct EventimClient<T = HttpTransport> {
    transport: T,
    exploration_base_url: String,
    web_base_url: String,
    seatmap_url: String,
    max_component_pages: u32,
    next_page_strategy: NextPageStrategy,
}

impl EventimClient<HttpTransport> {
    /// Builds a client with a `reqwest` transport configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let transport = HttpTransport::new(config.request_timeout_secs, &config.user_agent)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> EventimClient<T> {
    /// Builds a client over an arbitrary transport. Only the endpoint URLs,
    /// page cap and next-page strategy are taken from `config`.
    #[must_use]
    pub fn with_transport(transport: T, config: &AppConfig) -> Self {
        Self {
            transport,
            exploration_base_url: config.exploration_base_url.trim_end_matches('/').to_owned(),
            web_base_url: config.web_base_url.trim_end_matches('/').to_owned(),
            seatmap_url: config.seatmap_url.clone(),
            max_component_pages: config.max_component_pages,
            next_page_strategy: config.next_page_strategy,
        }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn exploration_url(&self, path: &str) -> String {
        format!("{}/{path}", self.exploration_base_url)
    }

    fn component_url(&self) -> String {
        format!("{}/component/", self.web_base_url)
    }

    /// `event_path` is the site-relative event key, for example
    /// `/event/disneys-der-koenig-der-loewen-stage-theater-im-hafen-hamburg-18500464`.
    fn event_url(&self, event_path: &str) -> String {
        format!("{}/{}/", self.web_base_url, event_path.trim_matches('/'))
    }
}
