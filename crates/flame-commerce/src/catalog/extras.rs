//! Sides and sauces offered alongside customizable dishes.

use crate::ids::{SauceId, SideId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A priced side that can be attached to a cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SideItem {
    pub id: SideId,
    pub name: String,
    /// Added to the line's unit price. Never negative.
    pub price: Money,
}

impl SideItem {
    pub fn new(id: impl Into<SideId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// A free sauce choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Sauce {
    pub id: SauceId,
    pub name: String,
}

impl Sauce {
    pub fn new(id: impl Into<SauceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
