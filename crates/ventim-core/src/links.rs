//! Helpers for the venue links returned by the location search.
//!
//! Venue links embed the city as a `<name>-<id>` slug directly after a
//! `city` path segment:
//!
//! ```text
//! https://www.eventim.de/city/hamburg-7/venue/stage-theater-im-hafen-hamburg-3880
//! ```

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link \"{link}\" has no city segment")]
    MissingCitySegment { link: String },

    #[error("city segment \"{segment}\" in \"{link}\" is not of the form <name>-<id>")]
    MalformedCitySegment { link: String, segment: String },
}

/// Returns the `<name>-<id>` slug following the `city` path segment.
fn city_segment(link: &str) -> Result<&str, LinkError> {
    let path = link.split_once("://").map_or(link, |(_, rest)| rest);
    let mut segments = path.split('/').skip_while(|s| *s != "city");
    segments
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| LinkError::MissingCitySegment {
            link: link.to_string(),
        })
}

/// Splits the city slug at its last hyphen so multi-word city names
/// (`bad-homburg-123`) keep their hyphens.
fn split_city_segment(link: &str) -> Result<(&str, &str), LinkError> {
    let segment = city_segment(link)?;
    segment
        .rsplit_once('-')
        .filter(|(name, id)| !name.is_empty() && !id.is_empty())
        .ok_or_else(|| LinkError::MalformedCitySegment {
            link: link.to_string(),
            segment: segment.to_string(),
        })
}

/// Extracts the city name from a venue link.
///
/// # Errors
///
/// Returns [`LinkError`] when the link has no `city/<name>-<id>` segment.
pub fn parse_city_name_from_link(link: &str) -> Result<String, LinkError> {
    split_city_segment(link).map(|(name, _)| name.to_string())
}

/// Extracts the numeric city id from a venue link.
///
/// # Errors
///
/// Returns [`LinkError`] when the link has no `city/<name>-<id>` segment or
/// the id part is not an unsigned integer.
pub fn parse_city_id_from_link(link: &str) -> Result<u64, LinkError> {
    let (_, id) = split_city_segment(link)?;
    id.parse::<u64>()
        .map_err(|_| LinkError::MalformedCitySegment {
            link: link.to_string(),
            segment: city_segment(link).unwrap_or(id).to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAMBURG: &str =
        "https://www.eventim.de/city/hamburg-7/venue/stage-theater-im-hafen-hamburg-3880";

    #[test]
    fn parses_city_name() {
        assert_eq!(parse_city_name_from_link(HAMBURG).unwrap(), "hamburg");
    }

    #[test]
    fn parses_city_id() {
        assert_eq!(parse_city_id_from_link(HAMBURG).unwrap(), 7);
    }

    #[test]
    fn keeps_hyphens_in_multi_word_city_names() {
        let link = "https://www.eventim.de/city/bad-homburg-123/venue/kurtheater-99";
        assert_eq!(parse_city_name_from_link(link).unwrap(), "bad-homburg");
        assert_eq!(parse_city_id_from_link(link).unwrap(), 123);
    }

    #[test]
    fn accepts_relative_links() {
        assert_eq!(
            parse_city_id_from_link("/city/berlin-1/venue/uber-arena-5").unwrap(),
            1
        );
    }

    #[test]
    fn rejects_link_without_city_segment() {
        let err = parse_city_name_from_link("https://www.eventim.de/artist/foo").unwrap_err();
        assert!(matches!(err, LinkError::MissingCitySegment { .. }));
    }

    #[test]
    fn rejects_non_numeric_city_id() {
        let err = parse_city_id_from_link("https://www.eventim.de/city/hamburg-x/venue/a")
            .unwrap_err();
        assert!(matches!(
            err,
            LinkError::MalformedCitySegment { ref segment, .. } if segment == "hamburg-x"
        ));
    }
}
