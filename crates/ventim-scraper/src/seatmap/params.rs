//! Signed request parameters for the private seat-map endpoint.
//!
//! An event page's `seatmapOptions` block carries a pre-signed query-string
//! fragment in `additionalRequestParams` (for example
//! `"&a=123&timestamp=...&expires=...&signature=..."`) next to the content
//! type, event id and context id. The follow-up request sends the fragment's
//! pairs as-is, plus those three identifiers and `fun=json`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ScraperError;

const CONTEXT: &str = "seatmapOptions";

fn required<'a>(options: &'a Value, field: &str) -> Result<&'a Value, ScraperError> {
    options.get(field).ok_or_else(|| ScraperError::MissingField {
        context: CONTEXT.to_owned(),
        field: field.to_owned(),
    })
}

/// Renders a scalar JSON value as a query value: strings verbatim, numbers
/// and booleans in their JSON spelling.
fn scalar_text(value: &Value, field: &str) -> Result<String, ScraperError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ScraperError::MissingField {
            context: CONTEXT.to_owned(),
            field: field.to_owned(),
        }),
    }
}

/// Builds the query parameters for the private seat-map endpoint.
///
/// The first character of `additionalRequestParams` is a separator and is
/// dropped. The rest is split on `&`, and each segment on its first `=`.
/// Values are not URL-decoded. A segment without `=` yields an empty value;
/// empty segments are skipped. `cType`, `evId` and `cId` then overwrite any
/// same-named pairs, and `fun` is set to `json`.
///
/// # Errors
///
/// Returns [`ScraperError::MissingField`] if `additionalRequestParams`,
/// `cType`, `evId` or `cId` is absent or not a scalar.
pub fn build_seat_map_request_params(
    options: &Value,
) -> Result<BTreeMap<String, String>, ScraperError> {
    let additional = required(options, "additionalRequestParams")?
        .as_str()
        .ok_or_else(|| ScraperError::MissingField {
            context: CONTEXT.to_owned(),
            field: "additionalRequestParams".to_owned(),
        })?;
    let content_type = scalar_text(required(options, "cType")?, "cType")?;
    let event_id = scalar_text(required(options, "evId")?, "evId")?;
    let context_id = scalar_text(required(options, "cId")?, "cId")?;

    let mut chars = additional.chars();
    chars.next();
    let fragment = chars.as_str();

    let mut params: BTreeMap<String, String> = fragment
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (key.to_owned(), value.to_owned()),
            None => (segment.to_owned(), String::new()),
        })
        .collect();

    params.insert("cType".to_owned(), content_type);
    params.insert("evId".to_owned(), event_id);
    params.insert("cId".to_owned(), context_id);
    params.insert("fun".to_owned(), "json".to_owned());

    Ok(params)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn merges_fragment_pairs_with_identifiers() {
        let options = json!({
            "additionalRequestParams": "&a=1&b=2",
            "cType": "web",
            "evId": 7,
            "cId": 3
        });
        let params = build_seat_map_request_params(&options).unwrap();

        let expected: BTreeMap<String, String> = [
            ("a", "1"),
            ("b", "2"),
            ("cType", "web"),
            ("evId", "7"),
            ("cId", "3"),
            ("fun", "json"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn splits_only_on_first_equals_and_keeps_encoding() {
        let options = json!({
            "additionalRequestParams": "?signature=abc%3D%3D&token=x=y",
            "cType": "web",
            "evId": "18500464",
            "cId": 1
        });
        let params = build_seat_map_request_params(&options).unwrap();
        assert_eq!(params["signature"], "abc%3D%3D");
        assert_eq!(params["token"], "x=y");
        assert_eq!(params["evId"], "18500464");
    }

    #[test]
    fn explicit_identifiers_override_fragment_pairs() {
        let options = json!({
            "additionalRequestParams": "&evId=1&fun=html",
            "cType": "web",
            "evId": 2,
            "cId": 3
        });
        let params = build_seat_map_request_params(&options).unwrap();
        assert_eq!(params["evId"], "2");
        assert_eq!(params["fun"], "json");
    }

    #[test]
    fn tolerates_empty_and_valueless_segments() {
        let options = json!({
            "additionalRequestParams": "&&flag&a=1",
            "cType": "web",
            "evId": 2,
            "cId": 3
        });
        let params = build_seat_map_request_params(&options).unwrap();
        assert_eq!(params["flag"], "");
        assert_eq!(params["a"], "1");
        assert!(!params.contains_key(""));
    }

    #[test]
    fn missing_identifier_is_reported() {
        for field in ["additionalRequestParams", "cType", "evId", "cId"] {
            let mut options = json!({
                "additionalRequestParams": "&a=1",
                "cType": "web",
                "evId": 7,
                "cId": 3
            });
            options.as_object_mut().unwrap().remove(field);
            let err = build_seat_map_request_params(&options).unwrap_err();
            assert!(
                matches!(err, ScraperError::MissingField { field: ref f, .. } if f == field),
                "expected MissingField({field}), got: {err:?}"
            );
        }
    }
}
