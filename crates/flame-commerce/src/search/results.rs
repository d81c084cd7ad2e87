//! Filtered menu results and category facets.

use crate::catalog::{MenuCategory, MenuItem};
use crate::search::{MenuQuery, Selector};
use serde::{Deserialize, Serialize};

/// Outcome of running a [`MenuQuery`] over a catalog.
///
/// A pending result (no query run yet) is distinct from an applied query that
/// matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuResults {
    /// Matching items in catalog order.
    pub items: Vec<MenuItem>,
    /// Number of items in the catalog that was filtered.
    pub catalog_size: usize,
    /// One entry per category chip, "All" first.
    pub facets: Vec<FacetValue>,
    /// The query these results answer; `None` while pending.
    pub applied: Option<MenuQuery>,
}

impl MenuResults {
    /// Results before any query has run.
    pub fn pending() -> Self {
        Self {
            items: Vec::new(),
            catalog_size: 0,
            facets: Vec::new(),
            applied: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.applied.is_none()
    }

    /// A query ran and matched nothing.
    pub fn is_empty(&self) -> bool {
        !self.is_pending() && self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Facet entry for one category chip.
    pub fn facet(&self, category: Selector<MenuCategory>) -> Option<&FacetValue> {
        self.facets.iter().find(|facet| facet.category == category)
    }
}

impl Default for MenuResults {
    fn default() -> Self {
        Self::pending()
    }
}

/// Count for one category chip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    pub category: Selector<MenuCategory>,
    /// Items that would show if this chip were selected, other criteria kept.
    pub count: usize,
    /// Whether this chip is the current category.
    pub selected: bool,
}
