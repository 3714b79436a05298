//! Search criteria for the exploration endpoints.
//!
//! The exploration API accepts a loose bag of query parameters. They are
//! modelled here as one struct with named optional fields so that every
//! recognized filter is visible in the type:
//!
//! | Field | Query key | Wire format |
//! |-------|-----------|-------------|
//! | `term` | `search_term` | free text, at least 3 characters |
//! | `categories` | `categories` | repeated once per entry |
//! | `city_ids` | `city_ids` | repeated once per entry |
//! | `date_from` / `date_to` | `date_from` / `date_to` | `YYYY-MM-DD` |
//! | `time_from` / `time_to` | `time_from` / `time_to` | `HH:MM` |
//! | `in_stock` | `in_stock` | `true` / `false` |
//! | `sort` | `sort` | one of [`SortOrder`] |
//!
//! The page cursor is not part of the criteria; pagination drivers append it
//! per request.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of characters the exploration API accepts for `search_term`.
pub const MIN_SEARCH_TERM_CHARS: usize = 3;

/// Validation failures detected before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("criteria must include a search term, categories or city ids")]
    MissingSubject,

    #[error("search term must be at least {min} characters long (got {actual})")]
    SearchTermTooShort { min: usize, actual: usize },

    #[error("unknown sort order \"{0}\"")]
    UnknownSortOrder(String),
}

/// Result ordering supported by the exploration API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    DateAsc,
    DateDesc,
    NameAsc,
    NameDesc,
    Rating,
    Recommendation,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::DateAsc,
        SortOrder::DateDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::Rating,
        SortOrder::Recommendation,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::DateAsc => "DateAsc",
            SortOrder::DateDesc => "DateDesc",
            SortOrder::NameAsc => "NameAsc",
            SortOrder::NameDesc => "NameDesc",
            SortOrder::Rating => "Rating",
            SortOrder::Recommendation => "Recommendation",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CriteriaError::UnknownSortOrder(s.to_string()))
    }
}

/// Filters for one exploration run.
///
/// Immutable for the lifetime of a pagination run; only the page number
/// changes between requests, and that lives in the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub term: Option<String>,
    pub categories: Vec<String>,
    pub city_ids: Vec<u64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
    pub in_stock: Option<bool>,
    pub sort: SortOrder,
}

impl SearchCriteria {
    /// Criteria matching a free-text term with the default sort order.
    #[must_use]
    pub fn for_term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_city_ids(mut self, city_ids: impl IntoIterator<Item = u64>) -> Self {
        self.city_ids = city_ids.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    #[must_use]
    pub fn with_time_range(mut self, from: Option<NaiveTime>, to: Option<NaiveTime>) -> Self {
        self.time_from = from;
        self.time_to = to;
        self
    }

    #[must_use]
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// The search term, with an empty string treated as absent.
    fn effective_term(&self) -> Option<&str> {
        self.term.as_deref().filter(|t| !t.is_empty())
    }

    /// Checks the invariants the exploration API enforces server-side.
    ///
    /// # Errors
    ///
    /// - [`CriteriaError::MissingSubject`] when term, categories and city ids
    ///   are all empty.
    /// - [`CriteriaError::SearchTermTooShort`] when a term is given but has
    ///   fewer than [`MIN_SEARCH_TERM_CHARS`] characters.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        let term = self.effective_term();
        if term.is_none() && self.categories.is_empty() && self.city_ids.is_empty() {
            return Err(CriteriaError::MissingSubject);
        }

        if let Some(term) = term {
            let actual = term.chars().count();
            if actual < MIN_SEARCH_TERM_CHARS {
                return Err(CriteriaError::SearchTermTooShort {
                    min: MIN_SEARCH_TERM_CHARS,
                    actual,
                });
            }
        }

        Ok(())
    }

    /// Serializes the criteria plus `page` into ordered query pairs.
    ///
    /// List filters produce one pair per entry under the same key. Absent
    /// filters are omitted; `sort` is always present.
    #[must_use]
    pub fn to_query(&self, page: u32) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: String| pairs.push((key.to_string(), value));

        if let Some(term) = self.effective_term() {
            push("search_term", term.to_string());
        }
        for category in &self.categories {
            push("categories", category.clone());
        }
        for city_id in &self.city_ids {
            push("city_ids", city_id.to_string());
        }
        if let Some(date) = self.date_from {
            push("date_from", date.format("%Y-%m-%d").to_string());
        }
        if let Some(date) = self.date_to {
            push("date_to", date.format("%Y-%m-%d").to_string());
        }
        if let Some(time) = self.time_from {
            push("time_from", time.format("%H:%M").to_string());
        }
        if let Some(time) = self.time_to {
            push("time_to", time.format("%H:%M").to_string());
        }
        if let Some(in_stock) = self.in_stock {
            push("in_stock", in_stock.to_string());
        }
        push("page", page.to_string());
        push("sort", self.sort.to_string());

        pairs
    }
}

#[cfg(test)]
#[path = "criteria_test.rs"]
mod tests;
