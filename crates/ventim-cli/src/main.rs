mod component;
mod explore;
mod output;
mod seatmap;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ventim_scraper::EventimClient;

use crate::component::ComponentArgs;
use crate::explore::ProductGroupArgs;

#[derive(Debug, Parser)]
#[command(name = "ventim")]
#[command(about = "Explore events, calendars and seat maps on eventim.de")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search attractions (artists, shows) by name
    Attractions {
        /// Search term, at least 3 characters
        term: String,
        /// Result ordering (DateAsc, DateDesc, NameAsc, NameDesc, Rating, Recommendation)
        #[arg(long, default_value = "DateAsc")]
        sort: ventim_core::SortOrder,
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search venues by name
    Locations {
        /// Search term, at least 3 characters
        term: String,
        /// Result ordering
        #[arg(long, default_value = "DateAsc")]
        sort: ventim_core::SortOrder,
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search product groups (bookable event series) with filters
    ProductGroups {
        #[command(flatten)]
        args: ProductGroupArgs,
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List the events of an attraction or product group, page by page
    Events {
        #[command(flatten)]
        args: ComponentArgs,
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List the calendar entries of an attraction or product group
    Calendar {
        #[command(flatten)]
        args: ComponentArgs,
        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Fetch the seat map of an event
    Seatmap {
        /// Site-relative event path, e.g. /event/some-show-hamburg-18500464
        event_path: String,
        /// Print the private API response without normalizing it
        #[arg(long)]
        raw: bool,
        /// Print the embedded seat-map options and stop
        #[arg(long, conflicts_with = "raw")]
        options_only: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ventim_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = EventimClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build Eventim client: {e}"))?;

    match cli.command {
        Commands::Attractions { term, sort, limit } => {
            explore::run_attractions(&client, &term, sort, limit).await
        }
        Commands::Locations { term, sort, limit } => {
            explore::run_locations(&client, &term, sort, limit).await
        }
        Commands::ProductGroups { args, limit } => {
            explore::run_product_groups(&client, args, limit).await
        }
        Commands::Events { args, limit } => component::run_events(&client, args, limit).await,
        Commands::Calendar { args, limit } => component::run_calendar(&client, args, limit).await,
        Commands::Seatmap {
            event_path,
            raw,
            options_only,
        } => seatmap::run_seatmap(&client, &event_path, raw, options_only).await,
    }
}
