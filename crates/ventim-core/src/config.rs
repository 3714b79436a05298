use crate::app_config::{AppConfig, NextPageStrategy, DEFAULT_MAX_COMPONENT_PAGES};
use crate::ConfigError;

const DEFAULT_EXPLORATION_BASE_URL: &str =
    "https://public-api.eventim.com/websearch/search/api/exploration";
const DEFAULT_WEB_BASE_URL: &str = "https://www.eventim.de";
const DEFAULT_SEATMAP_URL: &str = "https://api.eventim.com/seatmap/api/SeatMapHandler";

/// The website serves a stripped page to non-browser agents.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so parsing can be tested against a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("VENTIM_LOG_LEVEL", "info");
    let exploration_base_url =
        or_default("VENTIM_EXPLORATION_BASE_URL", DEFAULT_EXPLORATION_BASE_URL);
    let web_base_url = or_default("VENTIM_WEB_BASE_URL", DEFAULT_WEB_BASE_URL);
    let seatmap_url = or_default("VENTIM_SEATMAP_URL", DEFAULT_SEATMAP_URL);
    let request_timeout_secs = parse_u64("VENTIM_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("VENTIM_USER_AGENT", DEFAULT_USER_AGENT);

    let max_component_pages = parse_u32(
        "VENTIM_MAX_COMPONENT_PAGES",
        &DEFAULT_MAX_COMPONENT_PAGES.to_string(),
    )?;
    if max_component_pages == 0 {
        return Err(invalid(
            "VENTIM_MAX_COMPONENT_PAGES",
            "must be at least 1".to_string(),
        ));
    }

    let next_page_strategy = or_default(
        "VENTIM_NEXT_PAGE_STRATEGY",
        NextPageStrategy::default().as_str(),
    )
    .parse::<NextPageStrategy>()
    .map_err(|reason| invalid("VENTIM_NEXT_PAGE_STRATEGY", reason))?;

    Ok(AppConfig {
        log_level,
        exploration_base_url,
        web_base_url,
        seatmap_url,
        request_timeout_secs,
        user_agent,
        max_component_pages,
        next_page_strategy,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
