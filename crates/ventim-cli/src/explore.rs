//! Exploration API command handlers.

use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use ventim_core::{SearchCriteria, SortOrder};
use ventim_scraper::EventimClient;

use crate::output::print_records;

/// Filters for `product-groups`. At least one of the term, a category or a
/// city id is required.
#[derive(Debug, Args)]
pub struct ProductGroupArgs {
    /// Free-text search term, at least 3 characters
    #[arg(long)]
    pub term: Option<String>,
    /// Category name; repeat for several
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// City id; repeat for several
    #[arg(long = "city-id")]
    pub city_ids: Vec<u64>,
    /// Earliest event date (YYYY-MM-DD)
    #[arg(long)]
    pub date_from: Option<NaiveDate>,
    /// Latest event date (YYYY-MM-DD)
    #[arg(long)]
    pub date_to: Option<NaiveDate>,
    /// Earliest start time (HH:MM)
    #[arg(long, value_parser = parse_hh_mm)]
    pub time_from: Option<NaiveTime>,
    /// Latest start time (HH:MM)
    #[arg(long, value_parser = parse_hh_mm)]
    pub time_to: Option<NaiveTime>,
    /// Only product groups with tickets on sale
    #[arg(long)]
    pub in_stock: bool,
    /// Result ordering
    #[arg(long, default_value = "DateAsc")]
    pub sort: SortOrder,
}

impl ProductGroupArgs {
    pub fn into_criteria(self) -> SearchCriteria {
        let mut criteria = SearchCriteria {
            term: self.term,
            ..SearchCriteria::default()
        }
        .with_categories(self.categories)
        .with_city_ids(self.city_ids)
        .with_date_range(self.date_from, self.date_to)
        .with_time_range(self.time_from, self.time_to)
        .with_sort(self.sort);
        if self.in_stock {
            criteria = criteria.with_in_stock(true);
        }
        criteria
    }
}

pub(crate) fn parse_hh_mm(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| format!("expected HH:MM, got \"{value}\": {e}"))
}

pub(crate) async fn run_attractions(
    client: &EventimClient,
    term: &str,
    sort: SortOrder,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let printed = print_records(client.explore_attractions(term, sort)?, limit).await?;
    tracing::info!(printed, term, "attraction search finished");
    Ok(())
}

pub(crate) async fn run_locations(
    client: &EventimClient,
    term: &str,
    sort: SortOrder,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let printed = print_records(client.explore_locations(term, sort)?, limit).await?;
    tracing::info!(printed, term, "location search finished");
    Ok(())
}

pub(crate) async fn run_product_groups(
    client: &EventimClient,
    args: ProductGroupArgs,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let criteria = args.into_criteria();
    let printed = print_records(client.explore_product_groups(criteria)?, limit).await?;
    tracing::info!(printed, "product group search finished");
    Ok(())
}
