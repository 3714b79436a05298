//! Component endpoint command handlers.

use chrono::NaiveDate;
use clap::Args;
use ventim_core::{ComponentQuery, ComponentView, ProductType};
use ventim_scraper::EventimClient;

use crate::output::print_records;

/// Shared arguments of `events` and `calendar`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    /// Subject id (esid) of the attraction or product group
    pub esid: u64,
    /// Widget to render (eventselectionbox or eventlisting)
    #[arg(long, default_value = "eventselectionbox")]
    pub view: ComponentView,
    /// First event date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    /// Last event date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    /// Offer type (tickets, vip_packages or extras)
    #[arg(long)]
    pub product_type: Option<ProductType>,
    /// Restrict to one city, e.g. Hamburg
    #[arg(long)]
    pub city: Option<String>,
}

impl ComponentArgs {
    pub fn into_query(self) -> ComponentQuery {
        let mut query = ComponentQuery::new(self.esid)
            .with_view(self.view)
            .with_date_range(self.start_date, self.end_date);
        if let Some(product_type) = self.product_type {
            query = query.with_product_type(product_type);
        }
        if let Some(city) = self.city {
            query = query.with_city_name(city);
        }
        query
    }
}

pub(crate) async fn run_events(
    client: &EventimClient,
    args: ComponentArgs,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let esid = args.esid;
    let printed = print_records(client.attraction_events(args.into_query()), limit).await?;
    tracing::info!(esid, printed, "event listing finished");
    Ok(())
}

pub(crate) async fn run_calendar(
    client: &EventimClient,
    args: ComponentArgs,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let esid = args.esid;
    let printed = print_records(
        client.attraction_events_from_calendar(args.into_query()),
        limit,
    )
    .await?;
    tracing::info!(esid, printed, "calendar finished");
    Ok(())
}
