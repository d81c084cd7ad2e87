//! The built-in static menu.
//!
//! Prices are in INR. The catalog is built once on first access and never
//! changes afterwards.

use std::sync::OnceLock;

use crate::catalog::{MenuCategory, MenuItem, Sauce, SideItem, SpiceLevel};
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Currency every built-in price is expressed in.
pub const MENU_CURRENCY: Currency = Currency::INR;

const fn inr(rupees: i64) -> Money {
    Money::from_major(rupees, MENU_CURRENCY)
}

/// The full static menu, in display order.
pub fn menu() -> &'static [MenuItem] {
    static MENU: OnceLock<Vec<MenuItem>> = OnceLock::new();
    MENU.get_or_init(build_menu)
}

/// Sides offered in the customization panel.
pub fn sides() -> &'static [SideItem] {
    static SIDES: OnceLock<Vec<SideItem>> = OnceLock::new();
    SIDES.get_or_init(|| {
        vec![
            SideItem::new("fries", "PERi-Peri Fries", inr(99)),
            SideItem::new("coleslaw", "Coleslaw", inr(79)),
            SideItem::new("corn", "Grilled Corn", inr(89)),
            SideItem::new("rice", "Spicy Rice", inr(99)),
        ]
    })
}

/// Sauces offered in the customization panel.
pub fn sauces() -> &'static [Sauce] {
    static SAUCES: OnceLock<Vec<Sauce>> = OnceLock::new();
    SAUCES.get_or_init(|| {
        vec![
            Sauce::new("extra-hot", "Extra Hot"),
            Sauce::new("hot", "Hot"),
            Sauce::new("medium", "Medium"),
            Sauce::new("mild", "Mild"),
            Sauce::new("lemon-herb", "Lemon & Herb"),
            Sauce::new("garlic", "Garlic BBQ"),
        ]
    })
}

/// Look up a menu item by id.
pub fn find_item(id: &str) -> Result<&'static MenuItem, CommerceError> {
    menu()
        .iter()
        .find(|item| item.id.as_str() == id)
        .ok_or_else(|| CommerceError::MenuItemNotFound(id.to_string()))
}

/// Look up a side by id.
pub fn find_side(id: &str) -> Result<&'static SideItem, CommerceError> {
    sides()
        .iter()
        .find(|side| side.id.as_str() == id)
        .ok_or_else(|| CommerceError::SideNotFound(id.to_string()))
}

/// Look up a sauce by id.
pub fn find_sauce(id: &str) -> Result<&'static Sauce, CommerceError> {
    sauces()
        .iter()
        .find(|sauce| sauce.id.as_str() == id)
        .ok_or_else(|| CommerceError::SauceNotFound(id.to_string()))
}

fn build_menu() -> Vec<MenuItem> {
    use MenuCategory::*;

    vec![
        MenuItem::new(
            "1",
            "1/4 Chicken",
            "Flame-grilled quarter chicken, marinated for 24 hours in PERi-PERi",
            inr(349),
            Chicken,
        )
        .with_image("/images/menu/quarter-chicken.jpg")
        .with_spice_level(SpiceLevel::Medium)
        .with_nutrition(420, 48)
        .customizable()
        .popular(),
        MenuItem::new(
            "2",
            "1/2 Chicken",
            "Half a flame-grilled chicken, basted in your choice of heat",
            inr(599),
            Chicken,
        )
        .with_image("/images/menu/half-chicken.jpg")
        .with_spice_level(SpiceLevel::Hot)
        .with_nutrition(840, 96)
        .customizable()
        .popular(),
        MenuItem::new(
            "3",
            "Chicken Wings (5)",
            "Five flame-grilled wings with a crispy char",
            inr(329),
            Chicken,
        )
        .with_image("/images/menu/wings.jpg")
        .with_spice_level(SpiceLevel::ExtraHot)
        .with_nutrition(510, 42)
        .customizable(),
        MenuItem::new(
            "4",
            "Chicken Butterfly Burger",
            "Two flame-grilled chicken thighs in a toasted Portuguese roll",
            inr(379),
            BurgersWraps,
        )
        .with_image("/images/menu/butterfly-burger.jpg")
        .with_spice_level(SpiceLevel::Mild)
        .with_allergens(&["gluten", "sesame"])
        .with_nutrition(620, 45)
        .customizable()
        .popular(),
        MenuItem::new(
            "5",
            "Veggie Burger",
            "Chickpea and red pepper patty with smoky PERi-PERi mayo",
            inr(299),
            BurgersWraps,
        )
        .with_image("/images/menu/veggie-burger.jpg")
        .with_spice_level(SpiceLevel::Mild)
        .vegetarian()
        .with_allergens(&["gluten", "egg"])
        .with_nutrition(540, 18)
        .customizable(),
        MenuItem::new(
            "6",
            "Sweet Potato & Butternut Wrap",
            "Roasted sweet potato, butternut and spinach in a soft tortilla",
            inr(289),
            BurgersWraps,
        )
        .with_image("/images/menu/sweet-potato-wrap.jpg")
        .with_spice_level(SpiceLevel::LemonHerb)
        .vegan()
        .with_allergens(&["gluten"])
        .with_nutrition(480, 12)
        .customizable()
        .new_arrival(),
        MenuItem::new(
            "7",
            "Full Chicken Platter",
            "A whole flame-grilled chicken with two large sides, made for sharing",
            inr(1199),
            Platters,
        )
        .with_image("/images/menu/full-platter.jpg")
        .with_spice_level(SpiceLevel::Medium)
        .with_nutrition(1960, 180)
        .customizable()
        .popular(),
        MenuItem::new(
            "8",
            "Wing Roulette Platter",
            "Ten wings, each basted at a different heat. Spin and dare",
            inr(649),
            Platters,
        )
        .with_image("/images/menu/wing-roulette.jpg")
        .with_spice_level(SpiceLevel::ExtraExtraHot)
        .with_nutrition(1020, 84)
        .new_arrival(),
        MenuItem::new(
            "9",
            "PERi-PERi Chicken Livers",
            "Chicken livers simmered in PERi-PERi sauce, served with Portuguese roll",
            inr(249),
            Starters,
        )
        .with_image("/images/menu/livers.jpg")
        .with_spice_level(SpiceLevel::Hot)
        .with_allergens(&["gluten"])
        .with_nutrition(390, 28),
        MenuItem::new(
            "10",
            "Halloumi Sticks & Dip",
            "Grilled halloumi sticks with a cool yoghurt and chilli jam dip",
            inr(269),
            Starters,
        )
        .with_image("/images/menu/halloumi.jpg")
        .vegetarian()
        .with_allergens(&["milk"])
        .with_nutrition(450, 22),
        MenuItem::new(
            "11",
            "PERi-Salted Chips",
            "Golden chips dusted with PERi-PERi salt",
            inr(149),
            Sides,
        )
        .with_image("/images/menu/chips.jpg")
        .vegan()
        .with_nutrition(380, 5)
        .popular(),
        MenuItem::new(
            "12",
            "Macho Peas",
            "Crushed peas with mint, parsley and a hint of chilli",
            inr(129),
            Sides,
        )
        .with_image("/images/menu/macho-peas.jpg")
        .with_spice_level(SpiceLevel::Mild)
        .vegan()
        .with_nutrition(160, 9),
        MenuItem::new(
            "13",
            "Naughty Natas",
            "Portuguese custard tarts with a flaky, caramelised crust",
            inr(199),
            Desserts,
        )
        .with_image("/images/menu/natas.jpg")
        .vegetarian()
        .with_allergens(&["gluten", "milk", "egg"])
        .with_nutrition(290, 4),
        MenuItem::new(
            "14",
            "Chocolate Cake",
            "Rich chocolate layer cake with fudge icing",
            inr(229),
            Desserts,
        )
        .with_image("/images/menu/chocolate-cake.jpg")
        .vegetarian()
        .with_allergens(&["gluten", "milk", "egg"])
        .with_nutrition(520, 6),
        MenuItem::new(
            "15",
            "Bottomless Soft Drink",
            "Unlimited refills from the drinks fountain",
            inr(149),
            Beverages,
        )
        .with_image("/images/menu/soft-drink.jpg")
        .vegan(),
        MenuItem::new(
            "16",
            "Mango Lemonade",
            "Fresh mango blended with lemonade and crushed ice",
            inr(179),
            Beverages,
        )
        .with_image("/images/menu/mango-lemonade.jpg")
        .vegan()
        .new_arrival(),
    ]
}
