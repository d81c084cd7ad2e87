//! Order types.
//!
//! Orders are plain data. A draft can be captured from a cart, but nothing in
//! this crate submits or advances one.

use chrono::{DateTime, Utc};

use crate::cart::{Cart, CartLine};
use crate::checkout::Address;
use crate::error::CommerceError;
use crate::ids::{OrderId, RestaurantId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order placed, awaiting the restaurant.
    #[default]
    Placed,
    Confirmed,
    /// In the kitchen.
    Preparing,
    /// Ready for pickup or dispatch.
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    #[default]
    Delivery,
    Pickup,
    DineIn,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Delivery => "delivery",
            OrderType::Pickup => "pickup",
            OrderType::DineIn => "dine-in",
        }
    }

    /// Whether a delivery address is required.
    pub fn needs_address(&self) -> bool {
        matches!(self, OrderType::Delivery)
    }
}

/// Payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    Cash,
    Wallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Wallet => "wallet",
        }
    }
}

/// Payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

/// A food order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Cart lines as they were when the order was drafted.
    pub items: Vec<CartLine>,
    pub total: Money,
    pub status: OrderStatus,
    pub order_type: OrderType,
    pub restaurant_id: RestaurantId,
    /// Required for delivery orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

impl Order {
    /// Capture the cart into an unsubmitted order.
    ///
    /// Fails with [`CommerceError::EmptyCart`] for an empty cart and with
    /// [`CommerceError::CheckoutIncomplete`] when a delivery has no address.
    pub fn draft_from_cart(
        cart: &Cart,
        user_id: impl Into<UserId>,
        order_type: OrderType,
        restaurant_id: impl Into<RestaurantId>,
        address: Option<Address>,
        payment_method: PaymentMethod,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if order_type.needs_address() && address.is_none() {
            return Err(CommerceError::CheckoutIncomplete("address".to_string()));
        }

        Ok(Self {
            id: OrderId::generate(),
            user_id: user_id.into(),
            items: cart.lines().to_vec(),
            total: cart.total_price(),
            status: OrderStatus::Placed,
            order_type,
            restaurant_id: restaurant_id.into(),
            address,
            created_at: Utc::now(),
            estimated_delivery_time: None,
            payment_method,
            payment_status: PaymentStatus::Pending,
        })
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Completed
    }
}
