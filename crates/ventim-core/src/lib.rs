pub mod app_config;
pub mod component;
pub mod config;
pub mod criteria;
pub mod links;

use thiserror::Error;

pub use app_config::{AppConfig, NextPageStrategy, DEFAULT_MAX_COMPONENT_PAGES};
pub use component::{ComponentQuery, ComponentView, ProductType};
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::{CriteriaError, SearchCriteria, SortOrder, MIN_SEARCH_TERM_CHARS};
pub use links::{parse_city_id_from_link, parse_city_name_from_link, LinkError};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
