//! Component endpoint operations for `EventimClient`.

use futures::Stream;
use serde_json::Value;
use ventim_core::ComponentQuery;

use super::EventimClient;
use crate::error::ScraperError;
use crate::pagination::{CalendarSource, ComponentSource, Pager};
use crate::transport::Transport;

impl<T: Transport> EventimClient<T> {
    /// Streams the schema.org event records listed for a subject, page by
    /// page, up to the configured page cap.
    ///
    /// Continuation is decided by the configured [`NextPageStrategy`].
    ///
    /// [`NextPageStrategy`]: ventim_core::NextPageStrategy
    pub fn attraction_events(
        &self,
        query: ComponentQuery,
    ) -> impl Stream<Item = Result<Value, ScraperError>> + Send + '_ {
        let source = ComponentSource::new(
            &self.transport,
            self.component_url(),
            query,
            self.max_component_pages,
            self.next_page_strategy,
        );
        Pager::new(source).into_stream()
    }

    /// Streams the calendar entries for a subject from a single component
    /// request.
    pub fn attraction_events_from_calendar(
        &self,
        query: ComponentQuery,
    ) -> impl Stream<Item = Result<Value, ScraperError>> + Send + '_ {
        let source = CalendarSource::new(&self.transport, self.component_url(), query);
        Pager::new(source).into_stream()
    }
}
