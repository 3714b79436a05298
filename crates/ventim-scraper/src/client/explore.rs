//! Exploration API operations for `EventimClient`.

use futures::Stream;
use serde_json::Value;
use ventim_core::{SearchCriteria, SortOrder};

use super::{EventimClient, ATTRACTIONS_KEY, LOCATIONS_KEY, PRODUCT_GROUPS_KEY};
use crate::error::ScraperError;
use crate::pagination::{ExplorationSource, Pager};
use crate::transport::Transport;

impl<T: Transport> EventimClient<T> {
    /// Searches attractions (artists, shows) by free-text term.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Validation`] before any request if `term` is
    /// empty or shorter than three characters. Request and decode failures
    /// are yielded by the stream.
    pub fn explore_attractions(
        &self,
        term: &str,
        sort: SortOrder,
    ) -> Result<impl Stream<Item = Result<Value, ScraperError>> + Send + '_, ScraperError> {
        let criteria = SearchCriteria::for_term(term).with_sort(sort);
        self.explore("v1/attractions", ATTRACTIONS_KEY, criteria)
    }

    /// Searches venues by free-text term.
    ///
    /// # Errors
    ///
    /// Same as [`Self::explore_attractions`].
    pub fn explore_locations(
        &self,
        term: &str,
        sort: SortOrder,
    ) -> Result<impl Stream<Item = Result<Value, ScraperError>> + Send + '_, ScraperError> {
        let criteria = SearchCriteria::for_term(term).with_sort(sort);
        self.explore("v1/locations", LOCATIONS_KEY, criteria)
    }

    /// Searches product groups (bookable event series) with the full filter
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Validation`] before any request if the
    /// criteria name no term, category or city, or the term is too short.
    pub fn explore_product_groups(
        &self,
        criteria: SearchCriteria,
    ) -> Result<impl Stream<Item = Result<Value, ScraperError>> + Send + '_, ScraperError> {
        self.explore("v2/productGroups", PRODUCT_GROUPS_KEY, criteria)
    }

    fn explore(
        &self,
        path: &str,
        items_key: &'static str,
        criteria: SearchCriteria,
    ) -> Result<impl Stream<Item = Result<Value, ScraperError>> + Send + '_, ScraperError> {
        let source = ExplorationSource::new(
            &self.transport,
            self.exploration_url(path),
            items_key,
            criteria,
        )?;
        Ok(Pager::new(source).into_stream())
    }
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use serde_json::json;
    use ventim_core::CriteriaError;

    use super::super::tests::test_config;
    use super::*;
    use crate::pagination::test_support::{Scripted, ScriptedTransport};

    #[tokio::test]
    async fn attractions_hit_v1_attractions_with_term_and_sort() {
        let transport = ScriptedTransport::new([Scripted::Json(json!({
            "totalPages": 1,
            "attractions": [{ "attractionId": 1 }],
            "_links": {}
        }))]);
        let client = EventimClient::with_transport(transport, &test_config());

        let items: Vec<Value> = client
            .explore_attractions("Coldplay", SortOrder::Rating)
            .unwrap()
            .try_collect()
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        let call = &client.transport().calls()[0];
        assert_eq!(call.endpoint, "https://api.test/exploration/v1/attractions");
        assert_eq!(call.param("search_term"), Some("Coldplay"));
        assert_eq!(call.param("sort"), Some("Rating"));
        assert_eq!(call.param("page"), Some("1"));
    }

    #[tokio::test]
    async fn locations_read_locations_key() {
        let transport = ScriptedTransport::new([Scripted::Json(json!({
            "totalPages": 1,
            "locations": [{ "id": "a" }, { "id": "b" }]
        }))]);
        let client = EventimClient::with_transport(transport, &test_config());

        let items: Vec<Value> = client
            .explore_locations("Hamburg", SortOrder::default())
            .unwrap()
            .try_collect()
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(
            client.transport().calls()[0].endpoint,
            "https://api.test/exploration/v1/locations"
        );
    }

    #[tokio::test]
    async fn product_groups_accept_city_only_criteria() {
        let transport = ScriptedTransport::new([Scripted::Json(json!({
            "totalPages": 1,
            "productGroups": [{ "productGroupId": "pg1" }]
        }))]);
        let client = EventimClient::with_transport(transport, &test_config());
        let criteria = SearchCriteria::default().with_city_ids([7, 9]);

        let items: Vec<Value> = client
            .explore_product_groups(criteria)
            .unwrap()
            .try_collect()
            .await
            .unwrap();

        assert_eq!(items[0]["productGroupId"], "pg1");
        let call = &client.transport().calls()[0];
        assert_eq!(call.endpoint, "https://api.test/exploration/v2/productGroups");
        let cities: Vec<&str> = call
            .query
            .iter()
            .filter(|(k, _)| k == "city_ids")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(cities, vec!["7", "9"]);
    }

    #[test]
    fn empty_criteria_are_rejected_without_requests() {
        let client = EventimClient::with_transport(ScriptedTransport::new([]), &test_config());

        let result = client.explore_product_groups(SearchCriteria::default());

        assert!(matches!(
            result,
            Err(ScraperError::Validation(CriteriaError::MissingSubject))
        ));
        assert_eq!(client.transport().fetch_count(), 0);
    }

    #[test]
    fn short_term_is_rejected_without_requests() {
        let client = EventimClient::with_transport(ScriptedTransport::new([]), &test_config());
        assert!(client.explore_attractions("ab", SortOrder::default()).is_err());
        assert!(client.explore_locations("", SortOrder::default()).is_err());
        assert_eq!(client.transport().fetch_count(), 0);
    }
}
