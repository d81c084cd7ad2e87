//! Menu catalog module.
//!
//! Contains the menu item types, the customization extras and the built-in
//! static menu.

mod data;
mod extras;
mod item;

pub use data::{find_item, find_sauce, find_side, menu, sauces, sides, MENU_CURRENCY};
pub use extras::{Sauce, SideItem};
pub use item::{MenuCategory, MenuItem, SpiceLevel};
