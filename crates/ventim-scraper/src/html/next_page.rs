//! "Is there another page?" detection for the component event list.
//!
//! Both strategies are heuristics over the page template, not a general
//! contract. The label strategy is locale-specific (German "von" = "of").

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use ventim_core::NextPageStrategy;

/// Returns `true` when the page reports a following page under `strategy`.
///
/// Returns `false` when the pagination control the strategy looks for is
/// absent.
#[must_use]
pub fn detect_next_page(html: &str, strategy: NextPageStrategy) -> bool {
    let document = Html::parse_document(html);
    match strategy {
        NextPageStrategy::PageLabel => next_page_from_label(&document),
        NextPageStrategy::DisabledNextButton => next_page_from_button(&document),
    }
}

/// Reads the first `"<current> von <total>"` label inside a
/// `pagination-pages-small` list item and compares the numbers.
fn next_page_from_label(document: &Html) -> bool {
    let selector =
        Selector::parse(r#"li[class*="pagination-pages-small"]"#).expect("valid selector");
    let label_re = Regex::new(r"^\s*(\d+)\s+von\s+(\d+)\s*$").expect("valid regex");

    for item in document.select(&selector) {
        let text: String = item.text().collect();
        let Some(cap) = label_re.captures(&text) else {
            continue;
        };
        let current = cap[1].parse::<u64>();
        let total = cap[2].parse::<u64>();
        if let (Ok(current), Ok(total)) = (current, total) {
            return current < total;
        }
    }

    false
}

/// Finds the first "next page" control; another page exists unless that
/// control is disabled.
///
/// `<link rel="next">` in the head is document metadata, not a control, and
/// is never matched.
fn next_page_from_button(document: &Html) -> bool {
    let selector = Selector::parse(
        r#"a[rel="next"], button[rel="next"], body [class*="pagination-next"]"#,
    )
    .expect("valid selector");

    document
        .select(&selector)
        .next()
        .is_some_and(|control| !is_disabled(control))
}

fn is_disabled(element: ElementRef<'_>) -> bool {
    let attrs = element.value();
    attrs.attr("disabled").is_some()
        || attrs.attr("aria-disabled") == Some("true")
        || attrs
            .classes()
            .any(|class| class == "disabled" || class.ends_with("-disabled"))
}
