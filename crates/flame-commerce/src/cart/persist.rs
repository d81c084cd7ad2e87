//! Cart snapshots and where they are kept.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use flame_cache::{Cache, Slot};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::money::Currency;

/// Namespace key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "flame-cart-storage";

/// Schema version written alongside the snapshot.
pub const CART_SNAPSHOT_VERSION: u32 = 0;

/// The persisted part of a cart: its lines. The open flag is not stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartLine>,
}

impl CartSnapshot {
    /// Reject snapshots no sequence of operations on a `currency` cart could
    /// have produced.
    pub fn validate(&self, currency: Currency) -> Result<(), CommerceError> {
        let mut seen = HashSet::new();
        for line in &self.items {
            if line.quantity < 1 {
                return Err(CommerceError::InvalidSnapshot(format!(
                    "line {} has quantity {}",
                    line.line_id, line.quantity
                )));
            }
            let foreign = std::iter::once(&line.item.price)
                .chain(line.selected_sides.iter().map(|side| &side.price))
                .chain(std::iter::once(&line.total_price))
                .find(|price| price.currency != currency);
            if let Some(foreign) = foreign {
                return Err(CommerceError::InvalidSnapshot(format!(
                    "line {} is priced in {}, cart is in {}",
                    line.line_id, foreign.currency, currency
                )));
            }
            let sides = &line.selected_sides;
            if line.item.price.is_negative() || sides.iter().any(|s| s.price.is_negative()) {
                return Err(CommerceError::InvalidSnapshot(format!(
                    "line {} has a negative price",
                    line.line_id
                )));
            }
            if !seen.insert(&line.line_id) {
                return Err(CommerceError::InvalidSnapshot(format!(
                    "duplicate line id {}",
                    line.line_id
                )));
            }
        }
        Ok(())
    }
}

/// Durable storage for the cart snapshot.
pub trait CartPersistence {
    /// Read the last saved snapshot, `None` on first run.
    fn load(&self) -> Result<Option<CartSnapshot>, CommerceError>;

    /// Replace the saved snapshot.
    fn save(&self, snapshot: &CartSnapshot) -> Result<(), CommerceError>;
}

impl CartPersistence for Slot<CartSnapshot> {
    fn load(&self) -> Result<Option<CartSnapshot>, CommerceError> {
        Ok(Slot::load(self)?)
    }

    fn save(&self, snapshot: &CartSnapshot) -> Result<(), CommerceError> {
        Ok(self.store(snapshot)?)
    }
}

/// The cart's slot in `cache`, under [`CART_STORAGE_KEY`].
pub fn cart_slot(cache: Cache) -> Slot<CartSnapshot> {
    cart_slot_named(cache, CART_STORAGE_KEY)
}

/// The cart's slot in `cache` under a custom namespace key.
pub fn cart_slot_named(cache: Cache, key: impl Into<String>) -> Slot<CartSnapshot> {
    Slot::new(cache, key).with_version(CART_SNAPSHOT_VERSION)
}

/// In-memory persistence holding the serialized snapshot.
///
/// Clones share storage, so a second store opened on a clone sees what the
/// first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    stored: Rc<RefCell<Option<String>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored JSON, if any.
    pub fn raw(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    /// Overwrite the stored JSON.
    pub fn set_raw(&self, json: impl Into<String>) {
        *self.stored.borrow_mut() = Some(json.into());
    }
}

impl CartPersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<CartSnapshot>, CommerceError> {
        match self.stored.borrow().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &CartSnapshot) -> Result<(), CommerceError> {
        let json = serde_json::to_string(snapshot)?;
        *self.stored.borrow_mut() = Some(json);
        Ok(())
    }
}
