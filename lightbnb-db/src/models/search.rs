//! Property search options
//!
//! Every field is optional. A field that is absent, empty, or zero adds no
//! filter at all, matching how the web form submits blank inputs.

use serde::{Deserialize, Serialize};

/// Filters accepted by property search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySearch {
    /// Substring of the city name
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    /// Lower price bound in whole dollars per night
    pub minimum_price_per_night: Option<i64>,
    /// Upper price bound in whole dollars per night
    pub maximum_price_per_night: Option<i64>,
    /// Lowest acceptable average review rating
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    /// City term, if non-blank.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    pub fn owner_id(&self) -> Option<i32> {
        self.owner_id.filter(|&id| id != 0)
    }

    /// Lower price bound converted to cents.
    pub fn minimum_price_cents(&self) -> Option<i64> {
        dollars_to_cents(self.minimum_price_per_night)
    }

    /// Upper price bound converted to cents.
    pub fn maximum_price_cents(&self) -> Option<i64> {
        dollars_to_cents(self.maximum_price_per_night)
    }

    pub fn minimum_rating(&self) -> Option<f64> {
        self.minimum_rating.filter(|r| *r != 0.0 && !r.is_nan())
    }

    /// True when no field contributes a filter.
    pub fn is_empty(&self) -> bool {
        self.city().is_none()
            && self.owner_id().is_none()
            && self.minimum_price_cents().is_none()
            && self.maximum_price_cents().is_none()
            && self.minimum_rating().is_none()
    }
}

fn dollars_to_cents(dollars: Option<i64>) -> Option<i64> {
    dollars
        .filter(|&d| d != 0)
        .map(|d| d.saturating_mul(100))
}
