//! Checkout module.
//!
//! Contains the customer, order and address shapes a checkout flow works with.

mod address;
mod order;
mod user;

pub use address::{Address, AddressType};
pub use order::{Order, OrderStatus, OrderType, PaymentMethod, PaymentStatus};
pub use user::User;
