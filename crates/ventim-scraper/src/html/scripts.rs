//! Script-tag lookup strategies.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::ScraperError;

pub const LD_JSON_SCRIPT_TYPE: &str = "application/ld+json";
pub const CONFIGURATION_SCRIPT_TYPE: &str = "application/configuration";

/// Locates `<script>` elements by `type` attribute plus a content predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLocator<'a> {
    /// Every `application/ld+json` script.
    LdJson,
    /// `application/configuration` scripts whose text contains the marker.
    ConfigurationByMarker(&'a str),
}

impl ScriptLocator<'_> {
    fn script_type(self) -> &'static str {
        match self {
            ScriptLocator::LdJson => LD_JSON_SCRIPT_TYPE,
            ScriptLocator::ConfigurationByMarker(_) => CONFIGURATION_SCRIPT_TYPE,
        }
    }

    fn accepts(self, text: &str) -> bool {
        match self {
            ScriptLocator::LdJson => true,
            ScriptLocator::ConfigurationByMarker(marker) => text.contains(marker),
        }
    }

    /// Returns the text of every matching script element in document order.
    #[must_use]
    pub fn locate(self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(&format!(r#"script[type="{}"]"#, self.script_type()))
            .expect("valid selector");

        document
            .select(&selector)
            .map(|element| element.text().collect::<String>())
            .filter(|text| self.accepts(text))
            .collect()
    }
}

/// Decodes every `application/ld+json` block in document order, one record
/// per block.
///
/// Strict: one malformed block fails the whole call.
///
/// # Errors
///
/// Returns [`ScraperError::EmbeddedJson`] naming the first block that is not
/// valid JSON.
pub fn find_ld_json_records(html: &str) -> Result<Vec<Value>, ScraperError> {
    ScriptLocator::LdJson
        .locate(html)
        .iter()
        .enumerate()
        .map(|(index, text)| {
            serde_json::from_str(text).map_err(|e| ScraperError::EmbeddedJson {
                context: format!("ld+json block #{index}"),
                source: e,
            })
        })
        .collect()
}

/// Decodes the first `application/configuration` block containing `marker`.
///
/// # Errors
///
/// - [`ScraperError::PayloadNotFound`] when no block contains `marker`.
/// - [`ScraperError::EmbeddedJson`] when the first matching block is not
///   valid JSON.
pub fn find_configuration_block(html: &str, marker: &str) -> Result<Value, ScraperError> {
    let text = ScriptLocator::ConfigurationByMarker(marker)
        .locate(html)
        .into_iter()
        .next()
        .ok_or_else(|| ScraperError::PayloadNotFound {
            marker: marker.to_owned(),
        })?;

    serde_json::from_str(&text).map_err(|e| ScraperError::EmbeddedJson {
        context: format!("configuration block \"{marker}\""),
        source: e,
    })
}

/// Whether any `application/configuration` block contains `marker`.
#[must_use]
pub fn has_configuration_block(html: &str, marker: &str) -> bool {
    !ScriptLocator::ConfigurationByMarker(marker)
        .locate(html)
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPONENT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <script type="application/ld+json">{"@context":"https://schema.org","@type":"MusicEvent","name":"Disneys DER KÖNIG DER LÖWEN","location":{"name":"Stage Theater im Hafen Hamburg"}}</script>
  <script type="text/javascript">var x = {"calendar_content": 1};</script>
</head>
<body>
  <script type="application/configuration">{"unrelated": true}</script>
  <script type="application/configuration">{"calendar_content":{"result":[{"id":1},{"id":2}]}}</script>
  <script type="application/ld+json">
    {"@context":"https://schema.org","@type":"MusicEvent","name":"Second"}
  </script>
  <script type="application/configuration">{"calendar_content":{"result":[]},"copy":true}</script>
</body>
</html>"#;

    #[test]
    fn ld_json_records_are_returned_in_document_order() {
        let records = find_ld_json_records(COMPONENT_PAGE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["@type"], "MusicEvent");
        assert_eq!(records[0]["location"]["name"], "Stage Theater im Hafen Hamburg");
        assert_eq!(records[1]["name"], "Second");
    }

    #[test]
    fn ld_json_records_empty_when_no_blocks() {
        let records = find_ld_json_records("<html><body><p>nothing</p></body></html>").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn ld_json_malformed_block_fails_whole_call() {
        let html = r#"<script type="application/ld+json">{"ok":1}</script>
<script type="application/ld+json">{"broken":</script>"#;
        let err = find_ld_json_records(html).unwrap_err();
        assert!(
            matches!(err, ScraperError::EmbeddedJson { ref context, .. } if context == "ld+json block #1"),
            "expected EmbeddedJson for block #1, got: {err:?}"
        );
    }

    #[test]
    fn configuration_block_takes_first_match_with_marker() {
        let block = find_configuration_block(COMPONENT_PAGE, "calendar_content").unwrap();
        assert_eq!(block["calendar_content"]["result"].as_array().unwrap().len(), 2);
        assert!(block.get("copy").is_none());
    }

    #[test]
    fn configuration_block_ignores_other_script_types() {
        // The text/javascript script contains the marker but must not match.
        let html = r#"<script type="text/javascript">{"seatmapOptions":{}}</script>"#;
        assert!(!has_configuration_block(html, "seatmapOptions"));
    }

    #[test]
    fn configuration_block_not_found() {
        let err = find_configuration_block(COMPONENT_PAGE, "seatmapOptions").unwrap_err();
        assert!(
            matches!(err, ScraperError::PayloadNotFound { ref marker } if marker == "seatmapOptions"),
            "expected PayloadNotFound, got: {err:?}"
        );
    }

    #[test]
    fn configuration_block_single_match_is_decoded() {
        let html = r#"<html><body>
<script type="application/configuration">{"seatmapOptions":{"cType":"web","evId":7,"cId":3}}</script>
</body></html>"#;
        let block = find_configuration_block(html, "seatmapOptions").unwrap();
        assert_eq!(block["seatmapOptions"]["evId"], 7);
    }

    #[test]
    fn configuration_block_malformed_json_is_reported() {
        let html = r#"<script type="application/configuration">{"seatmapOptions": </script>"#;
        let err = find_configuration_block(html, "seatmapOptions").unwrap_err();
        assert!(matches!(err, ScraperError::EmbeddedJson { .. }), "got: {err:?}");
    }

    #[test]
    fn has_configuration_block_reports_presence() {
        assert!(has_configuration_block(COMPONENT_PAGE, "calendar_content"));
        assert!(!has_configuration_block(COMPONENT_PAGE, "seatmapOptions"));
    }

    #[test]
    fn locate_returns_raw_texts() {
        let texts = ScriptLocator::ConfigurationByMarker("unrelated").locate(COMPONENT_PAGE);
        assert_eq!(texts, vec![r#"{"unrelated": true}"#.to_string()]);
    }
}
