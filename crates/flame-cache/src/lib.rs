//! Type-safe key-value persistence for Flamegrill.
//!
//! Provides a small, ergonomic API for keeping serializable state in a durable
//! key-value store with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use flame_cache::{Cache, Slot};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Snapshot {
//!     items: Vec<String>,
//! }
//!
//! let cache = Cache::open(".flame")?;
//!
//! // Raw keyed access
//! cache.set("greeting", &"hello")?;
//!
//! // A versioned slot under a fixed namespace
//! let slot: Slot<Snapshot> = Slot::new(cache, "flame-cart-storage");
//! slot.store(&Snapshot { items: vec![] })?;
//! let restored = slot.load()?;
//! ```

mod backend;
mod error;
mod kv;
mod slot;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;
pub use slot::{Envelope, Slot};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KvBackend, Slot};
}
