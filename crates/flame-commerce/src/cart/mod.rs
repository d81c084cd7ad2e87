//! Cart module.
//!
//! Contains the cart state, its lines, snapshot persistence and the store that
//! ties them together.

#[allow(clippy::module_inception)]
mod cart;
mod line;
mod persist;
mod pricing;
mod store;

pub use cart::Cart;
pub use line::{CartLine, Selection, SelectionKey};
pub use persist::{
    cart_slot, cart_slot_named, CartPersistence, CartSnapshot, MemoryPersistence,
    CART_SNAPSHOT_VERSION, CART_STORAGE_KEY,
};
pub use pricing::{CartSummary, LineSummary};
pub use store::CartStore;
