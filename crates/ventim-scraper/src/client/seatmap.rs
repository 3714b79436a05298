//! Seat-map retrieval for `EventimClient`: event page, embedded options,
//! signed follow-up request, optional normalization.

use serde_json::Value;

use super::EventimClient;
use crate::error::ScraperError;
use crate::html::{find_configuration_block, SEATMAP_MARKER};
use crate::seatmap::{build_seat_map_request_params, decode_seat_map, SeatMapPayload};
use crate::transport::Transport;

impl<T: Transport> EventimClient<T> {
    /// Fetches an event page and returns its seat-map configuration block,
    /// or `None` if the event has no seat map (general admission, sold out).
    ///
    /// The returned block carries the options for [`Self::seat_map`] under
    /// its `seatmapOptions` key.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the page cannot be fetched, and
    /// [`ScraperError::EmbeddedJson`] if the block is present but malformed.
    pub async fn seat_map_information(
        &self,
        event_path: &str,
    ) -> Result<Option<Value>, ScraperError> {
        let url = self.event_url(event_path);
        tracing::debug!(url = %url, "fetching event page");
        let response = self.transport.fetch_html(&url, &[]).await?;

        match find_configuration_block(&response.body, SEATMAP_MARKER) {
            Ok(block) => Ok(Some(block)),
            Err(ScraperError::PayloadNotFound { .. }) => {
                tracing::debug!(url = %url, "event page has no seat map");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Requests the seat map described by `options` (the object under
    /// `seatmapOptions`) from the private seat-map endpoint.
    ///
    /// With `normalize` set, the positional wire format is decoded into a
    /// [`SeatMap`](crate::seatmap::SeatMap); otherwise the response JSON is
    /// returned untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::MissingField`] if `options` lacks a required
    /// field, the transport's error on request failure, and
    /// [`ScraperError::Schema`] if normalization finds a malformed payload.
    pub async fn seat_map(
        &self,
        options: &Value,
        normalize: bool,
    ) -> Result<SeatMapPayload, ScraperError> {
        let params = build_seat_map_request_params(options)?;
        let query: Vec<(String, String)> = params.into_iter().collect();

        tracing::debug!(url = %self.seatmap_url, params = query.len(), "fetching seat map");
        let response = self.transport.fetch_json(&self.seatmap_url, &query).await?;

        if normalize {
            decode_seat_map(&response.body).map(SeatMapPayload::Normalized)
        } else {
            Ok(SeatMapPayload::Raw(response.body))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::tests::test_config;
    use super::*;
    use crate::pagination::test_support::{Scripted, ScriptedTransport};

    const EVENT_PATH: &str = "/event/koenig-der-loewen-stage-theater-im-hafen-18500464";

    fn options() -> Value {
        json!({
            "additionalRequestParams": "&a=123&timestamp=1716000000&signature=abc",
            "cType": "web",
            "evId": 18_500_464,
            "cId": 1
        })
    }

    fn wire() -> Value {
        json!({
            "key": "sm",
            "availabilityTimestamp": 1,
            "individualSeats": 1,
            "dimension": [10, 20],
            "seatSize": 2,
            "blocks": [{
                "blockId": "b1",
                "name": "Parkett",
                "blockDescription": null,
                "rows": [["1", [["1", 0, 3, 4]]]]
            }],
            "pcs": [["pc1", "Kategorie 1", "#fff"]]
        })
    }

    #[tokio::test]
    async fn seat_map_information_returns_block_when_present() {
        let html = format!(
            r#"<script type="application/configuration">{}</script>"#,
            json!({ "seatmapOptions": options() })
        );
        let client = EventimClient::with_transport(
            ScriptedTransport::new([Scripted::Html(html)]),
            &test_config(),
        );

        let block = client.seat_map_information(EVENT_PATH).await.unwrap().unwrap();

        assert_eq!(block[SEATMAP_MARKER]["cType"], "web");
        assert_eq!(
            client.transport().calls()[0].endpoint,
            "https://web.test/event/koenig-der-loewen-stage-theater-im-hafen-18500464/"
        );
    }

    #[tokio::test]
    async fn seat_map_information_is_none_without_block() {
        let html = r#"<script type="application/configuration">{"calendar_content":{}}</script>"#;
        let client = EventimClient::with_transport(
            ScriptedTransport::new([Scripted::Html(html.to_owned())]),
            &test_config(),
        );

        assert!(client.seat_map_information(EVENT_PATH).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seat_map_information_malformed_block_is_an_error() {
        let html = r#"<script type="application/configuration">{"seatmapOptions":{</script>"#;
        let client = EventimClient::with_transport(
            ScriptedTransport::new([Scripted::Html(html.to_owned())]),
            &test_config(),
        );

        let err = client.seat_map_information(EVENT_PATH).await.unwrap_err();

        assert!(matches!(err, ScraperError::EmbeddedJson { .. }));
        assert_eq!(client.transport().fetch_count(), 1);
    }

    #[tokio::test]
    async fn seat_map_sends_signed_params_and_returns_raw_json() {
        let client = EventimClient::with_transport(
            ScriptedTransport::new([Scripted::Json(wire())]),
            &test_config(),
        );

        let payload = client.seat_map(&options(), false).await.unwrap();

        assert_eq!(payload, SeatMapPayload::Raw(wire()));
        let call = &client.transport().calls()[0];
        assert_eq!(call.endpoint, "https://api.test/seatmap/api/SeatMapHandler");
        assert_eq!(call.param("a"), Some("123"));
        assert_eq!(call.param("signature"), Some("abc"));
        assert_eq!(call.param("evId"), Some("18500464"));
        assert_eq!(call.param("fun"), Some("json"));
    }

    #[tokio::test]
    async fn seat_map_normalizes_on_request() {
        let client = EventimClient::with_transport(
            ScriptedTransport::new([Scripted::Json(wire())]),
            &test_config(),
        );

        let SeatMapPayload::Normalized(seat_map) = client.seat_map(&options(), true).await.unwrap()
        else {
            panic!("expected a normalized seat map");
        };

        assert_eq!(seat_map.seatmap_dimension_y, 20);
        assert_eq!(seat_map.blocks[0].block_rows[0].row_seats[0].seat_coordinate_y, 4);
    }

    #[tokio::test]
    async fn seat_map_with_incomplete_options_sends_nothing() {
        let client = EventimClient::with_transport(ScriptedTransport::new([]), &test_config());

        let err = client.seat_map(&json!({ "cType": "web" }), true).await.unwrap_err();

        assert!(matches!(err, ScraperError::MissingField { .. }));
        assert_eq!(client.transport().fetch_count(), 0);
    }
}
