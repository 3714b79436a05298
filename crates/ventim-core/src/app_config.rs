use std::fmt;
use std::str::FromStr;

/// Page cap applied to the HTML component pagination driver. The page
/// indicator is markup-coupled, so a hard bound keeps a misread indicator from
/// walking pages forever.
pub const DEFAULT_MAX_COMPONENT_PAGES: u32 = 10;

/// How the HTML driver decides whether another component page exists.
///
/// The two detection strategies target different versions of the page
/// template and are mutually exclusive. Exactly one is configured per client;
/// there is no auto-detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NextPageStrategy {
    /// Read the `"<current> von <total>"` label in the small pagination list.
    #[default]
    PageLabel,
    /// Look for a "next page" control and treat a disabled one as the end.
    DisabledNextButton,
}

impl NextPageStrategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NextPageStrategy::PageLabel => "page-label",
            NextPageStrategy::DisabledNextButton => "disabled-next",
        }
    }
}

impl fmt::Display for NextPageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NextPageStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page-label" => Ok(NextPageStrategy::PageLabel),
            "disabled-next" => Ok(NextPageStrategy::DisabledNextButton),
            other => Err(format!(
                "unknown next-page strategy \"{other}\" (expected page-label or disabled-next)"
            )),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Base URL of the JSON exploration API; endpoint paths are appended.
    pub exploration_base_url: String,
    /// Base URL of the public website hosting `/component/` and `/event/...`.
    pub web_base_url: String,
    /// Full URL of the private seat-map endpoint.
    pub seatmap_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_component_pages: u32,
    pub next_page_strategy: NextPageStrategy,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("exploration_base_url", &self.exploration_base_url)
            .field("web_base_url", &self.web_base_url)
            .field("seatmap_url", &self.seatmap_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_component_pages", &self.max_component_pages)
            .field("next_page_strategy", &self.next_page_strategy.as_str())
            .finish()
    }
}
