//! Search module.
//!
//! Contains the menu query, the filter over the catalog and its results.

mod filter;
mod query;
mod results;

pub use filter::{filter, search};
pub use query::{MenuQuery, Selector};
pub use results::{FacetValue, MenuResults};
