//! Menu query builder.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{MenuCategory, MenuItem, SpiceLevel};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Either the "All" sentinel or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    /// No restriction.
    All,
    /// Only this value.
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    /// Whether `value` passes. A missing value only passes `All`.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => value == Some(wanted),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selector::All => None,
            Selector::Only(value) => Some(value),
        }
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selector::All, Selector::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("All"),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selector<T> {
    type Err = T::Err;

    /// `"All"` (any case) is the sentinel; anything else must parse as `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Menu filter criteria. The default query matches the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuQuery {
    /// Case-insensitive substring of the name or description. Empty matches all.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Selector<MenuCategory>,
    #[serde(default)]
    pub spice_level: Selector<SpiceLevel>,
    #[serde(default)]
    pub vegetarian_only: bool,
}

impl MenuQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Selector<MenuCategory>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_spice_level(mut self, level: impl Into<Selector<SpiceLevel>>) -> Self {
        self.spice_level = level.into();
        self
    }

    /// Only show vegetarian items.
    pub fn vegetarian_only(mut self) -> Self {
        self.vegetarian_only = true;
        self
    }

    /// Whether every criterion is at its sentinel.
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty()
            && self.category.is_all()
            && self.spice_level.is_all()
            && !self.vegetarian_only
    }

    /// Whether `item` satisfies every criterion.
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.matches_except_category(item) && self.category.admits(Some(&item.category))
    }

    /// Every criterion but the category. Used for category chip counts.
    pub(crate) fn matches_except_category(&self, item: &MenuItem) -> bool {
        self.matches_search(item)
            && self.spice_level.admits(item.spice_level.as_ref())
            && (!self.vegetarian_only || item.is_vegetarian)
    }

    fn matches_search(&self, item: &MenuItem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
    }
}

impl From<MenuCategory> for Selector<MenuCategory> {
    fn from(category: MenuCategory) -> Self {
        Selector::Only(category)
    }
}

impl From<SpiceLevel> for Selector<SpiceLevel> {
    fn from(level: SpiceLevel) -> Self {
        Selector::Only(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn wings() -> MenuItem {
        MenuItem::new(
            "3",
            "Chicken Wings",
            "Crispy char",
            Money::new(329, Currency::INR),
            MenuCategory::Chicken,
        )
        .with_spice_level(SpiceLevel::ExtraHot)
    }

    fn chips() -> MenuItem {
        MenuItem::new(
            "11",
            "PERi-Salted Chips",
            "Golden chips",
            Money::new(149, Currency::INR),
            MenuCategory::Sides,
        )
        .vegan()
    }

    #[test]
    fn test_default_query_is_unrestricted() {
        let query = MenuQuery::default();
        assert!(query.is_unrestricted());
        assert!(query.matches(&wings()));
        assert!(query.matches(&chips()));
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_description() {
        assert!(MenuQuery::new().with_search("WINGS").matches(&wings()));
        assert!(MenuQuery::new().with_search("crispy").matches(&wings()));
        assert!(!MenuQuery::new().with_search("burger").matches(&wings()));
    }

    #[test]
    fn test_spice_filter_excludes_items_without_level() {
        let query = MenuQuery::new().with_spice_level(SpiceLevel::ExtraHot);
        assert!(query.matches(&wings()));
        assert!(!query.matches(&chips()));
        assert!(!MenuQuery::new().with_spice_level(SpiceLevel::Mild).matches(&wings()));
    }

    #[test]
    fn test_category_and_veg_filters() {
        assert!(MenuQuery::new().with_category(MenuCategory::Sides).matches(&chips()));
        assert!(!MenuQuery::new().with_category(MenuCategory::Sides).matches(&wings()));
        assert!(MenuQuery::new().vegetarian_only().matches(&chips()));
        assert!(!MenuQuery::new().vegetarian_only().matches(&wings()));
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("All".parse::<Selector<SpiceLevel>>().unwrap(), Selector::All);
        assert_eq!("all".parse::<Selector<MenuCategory>>().unwrap(), Selector::All);
        assert_eq!(
            "extra hot".parse::<Selector<SpiceLevel>>().unwrap(),
            Selector::Only(SpiceLevel::ExtraHot)
        );
        assert_eq!(
            "Burgers & Wraps".parse::<Selector<MenuCategory>>().unwrap(),
            Selector::Only(MenuCategory::BurgersWraps)
        );
        assert!("volcanic".parse::<Selector<SpiceLevel>>().is_err());
    }

    #[test]
    fn test_query_serializes_sentinels_as_strings() {
        let query = MenuQuery::new().with_category(MenuCategory::Chicken);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["category"], "Chicken");
        assert_eq!(json["spice_level"], "All");

        let back: MenuQuery = serde_json::from_value(json).unwrap();
        assert_eq!(back, query);
    }
}
