//! Customer accounts.

use crate::checkout::{Address, Order};
use crate::ids::{AddressId, UserId};
use serde::{Deserialize, Serialize};

/// A registered customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Saved delivery addresses. At most one is the default.
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub loyalty_points: u32,
    /// Past and in-flight orders, oldest first.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl User {
    /// Create a new user with a generated id.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            addresses: Vec::new(),
            loyalty_points: 0,
            orders: Vec::new(),
        }
    }

    /// Save an address. A default address takes over from any previous one,
    /// and the first address saved becomes the default.
    pub fn add_address(&mut self, mut address: Address) -> AddressId {
        if self.addresses.is_empty() {
            address.is_default = true;
        }
        if address.is_default {
            for existing in &mut self.addresses {
                existing.is_default = false;
            }
        }
        let id = address.id.clone();
        self.addresses.push(address);
        id
    }

    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|address| address.is_default)
    }

    pub fn address(&self, id: &AddressId) -> Option<&Address> {
        self.addresses.iter().find(|address| &address.id == id)
    }

    /// Orders that have not been delivered or cancelled.
    pub fn active_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| !order.status.is_terminal())
    }
}
