//! Menu item, category and spice level types.

use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use crate::ids::MenuItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Heat intensity, ordered mildest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpiceLevel {
    #[serde(rename = "Lemon & Herb")]
    LemonHerb,
    #[serde(rename = "Mild")]
    Mild,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Hot")]
    Hot,
    #[serde(rename = "Extra Hot")]
    ExtraHot,
    #[serde(rename = "XX Hot")]
    ExtraExtraHot,
}

impl SpiceLevel {
    /// Every level, mildest first.
    pub const ALL: [SpiceLevel; 6] = [
        SpiceLevel::LemonHerb,
        SpiceLevel::Mild,
        SpiceLevel::Medium,
        SpiceLevel::Hot,
        SpiceLevel::ExtraHot,
        SpiceLevel::ExtraExtraHot,
    ];

    /// Display name (e.g., "Extra Hot").
    pub fn as_str(&self) -> &'static str {
        match self {
            SpiceLevel::LemonHerb => "Lemon & Herb",
            SpiceLevel::Mild => "Mild",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::Hot => "Hot",
            SpiceLevel::ExtraHot => "Extra Hot",
            SpiceLevel::ExtraExtraHot => "XX Hot",
        }
    }

    /// URL/CLI-friendly slug (e.g., "extra-hot").
    pub fn slug(&self) -> &'static str {
        match self {
            SpiceLevel::LemonHerb => "lemon-herb",
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Hot => "hot",
            SpiceLevel::ExtraHot => "extra-hot",
            SpiceLevel::ExtraExtraHot => "xx-hot",
        }
    }

    /// Number of flames shown next to the level, 0 through 5.
    pub fn flames(&self) -> u8 {
        match self {
            SpiceLevel::LemonHerb => 0,
            SpiceLevel::Mild => 1,
            SpiceLevel::Medium => 2,
            SpiceLevel::Hot => 3,
            SpiceLevel::ExtraHot => 4,
            SpiceLevel::ExtraExtraHot => 5,
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpiceLevel {
    type Err = CommerceError;

    /// Accepts the display name or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SpiceLevel::ALL
            .into_iter()
            .find(|level| {
                level.as_str().eq_ignore_ascii_case(needle)
                    || level.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CommerceError::UnknownSpiceLevel(s.to_string()))
    }
}

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    #[serde(rename = "Chicken")]
    Chicken,
    #[serde(rename = "Burgers & Wraps")]
    BurgersWraps,
    #[serde(rename = "Platters")]
    Platters,
    #[serde(rename = "Starters")]
    Starters,
    #[serde(rename = "Sides")]
    Sides,
    #[serde(rename = "Desserts")]
    Desserts,
    #[serde(rename = "Beverages")]
    Beverages,
}

impl MenuCategory {
    /// Every category in menu order.
    pub const ALL: [MenuCategory; 7] = [
        MenuCategory::Chicken,
        MenuCategory::BurgersWraps,
        MenuCategory::Platters,
        MenuCategory::Starters,
        MenuCategory::Sides,
        MenuCategory::Desserts,
        MenuCategory::Beverages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Chicken => "Chicken",
            MenuCategory::BurgersWraps => "Burgers & Wraps",
            MenuCategory::Platters => "Platters",
            MenuCategory::Starters => "Starters",
            MenuCategory::Sides => "Sides",
            MenuCategory::Desserts => "Desserts",
            MenuCategory::Beverages => "Beverages",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            MenuCategory::Chicken => "chicken",
            MenuCategory::BurgersWraps => "burgers-wraps",
            MenuCategory::Platters => "platters",
            MenuCategory::Starters => "starters",
            MenuCategory::Sides => "sides",
            MenuCategory::Desserts => "desserts",
            MenuCategory::Beverages => "beverages",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MenuCategory::ALL
            .into_iter()
            .find(|category| {
                category.as_str().eq_ignore_ascii_case(needle)
                    || category.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

/// An item in the static menu catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique item identifier.
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    /// Unit price.
    pub price: Money,
    pub category: MenuCategory,
    /// Image path or URL.
    pub image: String,
    /// Default heat for the dish, if it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<SpiceLevel>,
    pub is_vegetarian: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegan: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Protein in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    /// Whether the item offers heat, side and sauce choices.
    #[serde(default)]
    pub customizable: bool,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub new: bool,
}

impl MenuItem {
    /// Create an item with the required fields; everything optional is unset.
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: MenuCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category,
            image: String::new(),
            spice_level: None,
            is_vegetarian: false,
            is_vegan: None,
            allergens: Vec::new(),
            calories: None,
            protein: None,
            customizable: false,
            popular: false,
            new: false,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_spice_level(mut self, level: SpiceLevel) -> Self {
        self.spice_level = Some(level);
        self
    }

    pub fn vegetarian(mut self) -> Self {
        self.is_vegetarian = true;
        self
    }

    /// Mark as vegan, which implies vegetarian.
    pub fn vegan(mut self) -> Self {
        self.is_vegetarian = true;
        self.is_vegan = Some(true);
        self
    }

    pub fn with_allergens(mut self, allergens: &[&str]) -> Self {
        self.allergens = allergens.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_nutrition(mut self, calories: u32, protein: u32) -> Self {
        self.calories = Some(calories);
        self.protein = Some(protein);
        self
    }

    pub fn customizable(mut self) -> Self {
        self.customizable = true;
        self
    }

    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    pub fn new_arrival(mut self) -> Self {
        self.new = true;
        self
    }
}
