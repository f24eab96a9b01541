//! Filter facets selected by the user.
//!
//! Every mutation is a pure transition on the value: it reports whether the
//! selection changed and never triggers I/O. Issuing a new query is the job of
//! whoever observes the selection (see [`crate::query::QueryController`]).

use shorts_types::{AppConfig, CATEGORIES, COUNTRIES, DEFAULT_COUNTRY, Period, SENTINEL_CATEGORY};

use crate::query::VideoQuery;

/// Current category set, country set and period.
///
/// Invariants:
/// - `categories` and `countries` are never empty
/// - the sentinel category is never selected together with another category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    categories: Vec<String>,
    countries: Vec<String>,
    period: Period,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            categories: vec![SENTINEL_CATEGORY.to_string()],
            countries: vec![DEFAULT_COUNTRY.to_string()],
            period: Period::default(),
        }
    }
}

impl SelectionState {
    /// Build the initial selection from configured defaults.
    ///
    /// The configured lists go through the same rules as user toggles, so an
    /// empty list falls back to the default and a sentinel mixed with other
    /// categories collapses to the other categories.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for c in config.default_categories.iter().map(|c| c.trim()) {
            if !c.is_empty() && c != SENTINEL_CATEGORY && !categories.iter().any(|x| x == c) {
                categories.push(c.to_string());
            }
        }
        if categories.is_empty() {
            categories.push(SENTINEL_CATEGORY.to_string());
        }

        let mut countries: Vec<String> = Vec::new();
        for c in config.default_countries.iter().map(|c| c.trim()) {
            if !c.is_empty() && !countries.iter().any(|x| x == c) {
                countries.push(c.to_string());
            }
        }
        if countries.is_empty() {
            countries.push(DEFAULT_COUNTRY.to_string());
        }

        Self {
            categories,
            countries,
            period: config.default_period,
        }
    }

    /// Selected categories in selection order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// True while the default "popular" category is the active selection
    pub fn is_sentinel_active(&self) -> bool {
        self.has_category(SENTINEL_CATEGORY)
    }

    /// Human-readable list of selected categories, e.g. "news, sports"
    pub fn categories_label(&self) -> String {
        self.categories.join(", ")
    }

    /// Toggle a category. Returns true if the selection changed.
    ///
    /// - Removing the sole selected category is a no-op.
    /// - Selecting a category while the sentinel is active replaces the sentinel.
    /// - Selecting the sentinel resets the selection to the sentinel alone.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        let category = category.trim();
        if category.is_empty() {
            return false;
        }

        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            if self.categories.len() == 1 {
                return false;
            }
            self.categories.remove(pos);
            return true;
        }

        if category == SENTINEL_CATEGORY || self.is_sentinel_active() {
            self.categories = vec![category.to_string()];
        } else {
            self.categories.push(category.to_string());
        }
        true
    }

    /// Toggle a country. Removing the last remaining country is a no-op.
    pub fn toggle_country(&mut self, country: &str) -> bool {
        let country = country.trim();
        if country.is_empty() {
            return false;
        }

        if let Some(pos) = self.countries.iter().position(|c| c == country) {
            if self.countries.len() == 1 {
                return false;
            }
            self.countries.remove(pos);
        } else {
            self.countries.push(country.to_string());
        }
        true
    }

    /// Replace the period. Returns true if it differs from the current one.
    pub fn set_period(&mut self, period: Period) -> bool {
        if self.period == period {
            return false;
        }
        self.period = period;
        true
    }

    /// Derive the backend query. Facets are listed in catalog order so the
    /// query only depends on membership, not on click order.
    pub fn to_query(&self) -> VideoQuery {
        VideoQuery {
            categories: catalog_ordered(&self.categories, |c| {
                CATEGORIES.iter().position(|known| *known == c)
            }),
            countries: catalog_ordered(&self.countries, |c| {
                COUNTRIES.iter().position(|(known, _)| *known == c)
            }),
            period: self.period,
        }
    }
}

/// Sort by catalog position; values outside the catalog go last, alphabetically.
fn catalog_ordered(values: &[String], position: impl Fn(&str) -> Option<usize>) -> Vec<String> {
    let mut ordered = values.to_vec();
    ordered.sort_by(|a, b| {
        let pa = position(a).unwrap_or(usize::MAX);
        let pb = position(b).unwrap_or(usize::MAX);
        pa.cmp(&pb).then_with(|| a.cmp(b))
    });
    ordered
}
