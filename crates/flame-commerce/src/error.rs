//! Commerce error types.

use thiserror::Error;

/// Errors that can occur at the fallible edges of the menu and cart.
///
/// Cart mutations themselves never fail; these cover catalog lookups, parsing
/// of user-supplied selectors, persistence and checkout drafts.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Menu item not found in the catalog.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Side not found.
    #[error("Side not found: {0}")]
    SideNotFound(String),

    /// Sauce not found.
    #[error("Sauce not found: {0}")]
    SauceNotFound(String),

    /// Unrecognised spice level name.
    #[error("Unknown spice level: {0}")]
    UnknownSpiceLevel(String),

    /// Unrecognised menu category name.
    #[error("Unknown menu category: {0}")]
    UnknownCategory(String),

    /// Line item not in cart.
    #[error("Line not in cart: {0}")]
    LineNotInCart(String),

    /// A persisted cart snapshot failed validation.
    #[error("Invalid cart snapshot: {0}")]
    InvalidSnapshot(String),

    /// Cannot draft an order from an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Persistence error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<flame_cache::CacheError> for CommerceError {
    fn from(e: flame_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
