//! Menu, cart and checkout logic for Flamegrill.
//!
//! This crate provides the core of a flame-grilled chicken restaurant's
//! ordering flow:
//!
//! - **Catalog**: Menu items, spice levels, sides and sauces
//! - **Cart**: Customizable cart lines, merging, persistence
//! - **Search**: Menu filtering with category facets
//! - **Checkout**: Customer, order and address shapes
//! - **Restaurants** and **recipes**: location and recipe data shapes
//!
//! # Example
//!
//! ```rust
//! use flame_commerce::prelude::*;
//!
//! let mut store = CartStore::open(MemoryPersistence::new());
//!
//! let chicken = catalog::find_item("1").unwrap();
//! let fries = catalog::find_side("fries").unwrap();
//! store.add_item(
//!     chicken,
//!     Selection::new()
//!         .with_spice_level(SpiceLevel::Hot)
//!         .with_side(fries.clone()),
//! );
//!
//! println!("Total: {}", store.total_price().display());
//!
//! let veg = search::filter(catalog::menu(), &MenuQuery::new().vegetarian_only());
//! assert!(veg.iter().all(|item| item.is_vegetarian));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod recipe;
pub mod restaurant;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::{catalog, search};

    // Catalog
    pub use crate::catalog::{MenuCategory, MenuItem, Sauce, SideItem, SpiceLevel};

    // Cart
    pub use crate::cart::{
        Cart, CartLine, CartPersistence, CartSnapshot, CartStore, CartSummary, LineSummary,
        MemoryPersistence, Selection,
    };

    // Checkout
    pub use crate::checkout::{
        Address, AddressType, Order, OrderStatus, OrderType, PaymentMethod, PaymentStatus, User,
    };

    // Locations and recipes
    pub use crate::recipe::{Difficulty, Nutrition, Recipe};
    pub use crate::restaurant::{Coordinates, OpeningHours, Restaurant};

    // Search
    pub use crate::search::{FacetValue, MenuQuery, MenuResults, Selector};
}
