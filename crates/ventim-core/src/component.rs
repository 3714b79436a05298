//! Query parameters for the HTML "component" endpoint.
//!
//! The component endpoint renders an event list and calendar widget for a
//! single subject (attraction or product group). It is addressed by the
//! subject id `esid`; `pnum` selects the page of the event list.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which widget the component endpoint renders (`fun` parameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentView {
    #[default]
    EventSelectionBox,
    EventListing,
}

impl ComponentView {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentView::EventSelectionBox => "eventselectionbox",
            ComponentView::EventListing => "eventlisting",
        }
    }
}

impl fmt::Display for ComponentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eventselectionbox" => Ok(ComponentView::EventSelectionBox),
            "eventlisting" => Ok(ComponentView::EventListing),
            other => Err(format!(
                "unknown component view \"{other}\" (expected eventselectionbox or eventlisting)"
            )),
        }
    }
}

/// Offer type filter (`ptype` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Tickets,
    VipPackages,
    Extras,
}

impl ProductType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Tickets => "tickets",
            ProductType::VipPackages => "vip_packages",
            ProductType::Extras => "extras",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tickets" => Ok(ProductType::Tickets),
            "vip_packages" => Ok(ProductType::VipPackages),
            "extras" => Ok(ProductType::Extras),
            other => Err(format!(
                "unknown product type \"{other}\" (expected tickets, vip_packages or extras)"
            )),
        }
    }
}

/// Filters for one component-endpoint run. The page number is owned by the
/// pagination driver and passed to [`ComponentQuery::to_query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentQuery {
    /// Subject id (`esid`) of the attraction or product group.
    pub subject_id: u64,
    pub view: ComponentView,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub product_type: Option<ProductType>,
    pub city_name: Option<String>,
}

impl ComponentQuery {
    #[must_use]
    pub fn new(subject_id: u64) -> Self {
        Self {
            subject_id,
            view: ComponentView::default(),
            start_date: None,
            end_date: None,
            product_type: None,
            city_name: None,
        }
    }

    #[must_use]
    pub fn with_view(mut self, view: ComponentView) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    #[must_use]
    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    #[must_use]
    pub fn with_city_name(mut self, city_name: impl Into<String>) -> Self {
        self.city_name = Some(city_name.into());
        self
    }

    /// Serializes the query for page `page` into ordered query pairs.
    #[must_use]
    pub fn to_query(&self, page: u32) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("doc".to_string(), "component".to_string()),
            ("fun".to_string(), self.view.as_str().to_string()),
            ("esid".to_string(), self.subject_id.to_string()),
            ("pnum".to_string(), page.to_string()),
        ];

        if let Some(date) = self.start_date {
            pairs.push(("startdate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("enddate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(product_type) = self.product_type {
            pairs.push(("ptype".to_string(), product_type.to_string()));
        }
        if let Some(city) = self.city_name.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("cityname".to_string(), city.to_string()));
        }
        pairs.push(("filterused".to_string(), "true".to_string()));

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_query_contains_fixed_and_paging_fields() {
        let pairs = ComponentQuery::new(473_431).to_query(2);
        assert_eq!(
            pairs,
            vec![
                ("doc".to_string(), "component".to_string()),
                ("fun".to_string(), "eventselectionbox".to_string()),
                ("esid".to_string(), "473431".to_string()),
                ("pnum".to_string(), "2".to_string()),
                ("filterused".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn to_query_includes_optional_filters() {
        let pairs = ComponentQuery::new(1)
            .with_view(ComponentView::EventListing)
            .with_date_range(
                NaiveDate::from_ymd_opt(2024, 5, 18),
                NaiveDate::from_ymd_opt(2024, 9, 30),
            )
            .with_product_type(ProductType::VipPackages)
            .with_city_name("Hamburg")
            .to_query(1);

        assert!(pairs.contains(&("fun".to_string(), "eventlisting".to_string())));
        assert!(pairs.contains(&("startdate".to_string(), "2024-05-18".to_string())));
        assert!(pairs.contains(&("enddate".to_string(), "2024-09-30".to_string())));
        assert!(pairs.contains(&("ptype".to_string(), "vip_packages".to_string())));
        assert!(pairs.contains(&("cityname".to_string(), "Hamburg".to_string())));
    }

    #[test]
    fn product_type_round_trips_through_from_str() {
        for product_type in [
            ProductType::Tickets,
            ProductType::VipPackages,
            ProductType::Extras,
        ] {
            assert_eq!(product_type.as_str().parse::<ProductType>(), Ok(product_type));
        }
        assert!("merch".parse::<ProductType>().is_err());
    }

    #[test]
    fn component_view_parses_wire_names() {
        assert_eq!("eventlisting".parse(), Ok(ComponentView::EventListing));
        assert_eq!(
            "eventselectionbox".parse(),
            Ok(ComponentView::EventSelectionBox)
        );
        assert!("calendar".parse::<ComponentView>().is_err());
    }
}
