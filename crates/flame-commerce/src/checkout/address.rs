//! Delivery address types.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// Label a customer gives a saved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Work,
    Other,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Home => "home",
            AddressType::Work => "work",
            AddressType::Other => "other",
        }
    }
}

/// A delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub id: AddressId,
    #[serde(rename = "type")]
    pub address_type: AddressType,
    pub street: String,
    pub city: String,
    pub state: String,
    /// Postal index number.
    pub pincode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    /// Create a new address with a generated id.
    pub fn new(
        address_type: AddressType,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            id: AddressId::generate(),
            address_type,
            street: street.into(),
            city: city.into(),
            state: state.into(),
            pincode: pincode.into(),
            landmark: None,
            is_default: false,
        }
    }

    pub fn with_landmark(mut self, landmark: impl Into<String>) -> Self {
        self.landmark = Some(landmark.into());
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.street.clone()];
        if let Some(ref landmark) = self.landmark {
            parts.push(format!("near {}", landmark));
        }
        parts.push(self.city.clone());
        parts.push(format!("{} {}", self.state, self.pincode));
        parts.join(", ")
    }

    /// Check if address has everything a rider needs.
    pub fn is_complete(&self) -> bool {
        !self.street.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.state.trim().is_empty()
            && !self.pincode.trim().is_empty()
    }
}
