//! Restaurant locations.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::checkout::OrderType;
use crate::ids::RestaurantId;

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Daily opening hours. A `close` earlier than `open` runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl OpeningHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Whether `time` falls inside the hours. `open` is inclusive, `close`
    /// exclusive.
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.open <= self.close {
            self.open <= time && time < self.close
        } else {
            time >= self.open || time < self.close
        }
    }
}

/// A restaurant customers can order from or visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub coordinates: Coordinates,
    pub phone: String,
    pub hours: OpeningHours,
    /// Manual switch; a closed restaurant takes no orders whatever the hours.
    pub is_open: bool,
    pub has_delivery: bool,
    pub has_dine_in: bool,
    pub has_pickup: bool,
    /// Average rating out of 5.
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub image: String,
}

impl Restaurant {
    /// Whether the restaurant offers this way of receiving an order.
    pub fn supports(&self, order_type: OrderType) -> bool {
        match order_type {
            OrderType::Delivery => self.has_delivery,
            OrderType::Pickup => self.has_pickup,
            OrderType::DineIn => self.has_dine_in,
        }
    }

    /// Open and inside its hours at `time`.
    pub fn is_serving_at(&self, time: NaiveTime) -> bool {
        self.is_open && self.hours.contains(time)
    }
}
