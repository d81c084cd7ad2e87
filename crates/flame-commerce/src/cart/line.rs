//! Cart lines and the customization choices that distinguish them.

use crate::catalog::{MenuItem, SideItem, SpiceLevel};
use crate::ids::{LineItemId, MenuItemId, SauceId, SideId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Customization choices attached to an add-to-cart request.
///
/// Sides are an ordered list (duplicates allowed, each one is charged).
/// Sauces keep the order they were picked in; picking one twice is a no-op.
/// Special instructions are trimmed and an empty note is treated as no note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub spice_level: Option<SpiceLevel>,
    pub sides: Vec<SideItem>,
    pub sauces: Vec<SauceId>,
    pub special_instructions: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spice_level(mut self, level: SpiceLevel) -> Self {
        self.spice_level = Some(level);
        self
    }

    pub fn with_side(mut self, side: SideItem) -> Self {
        self.sides.push(side);
        self
    }

    pub fn with_sides(mut self, sides: impl IntoIterator<Item = SideItem>) -> Self {
        self.sides.extend(sides);
        self
    }

    pub fn with_sauce(mut self, sauce: impl Into<SauceId>) -> Self {
        let sauce = sauce.into();
        if !self.sauces.contains(&sauce) {
            self.sauces.push(sauce);
        }
        self
    }

    pub fn with_sauces<S: Into<SauceId>>(self, sauces: impl IntoIterator<Item = S>) -> Self {
        sauces
            .into_iter()
            .fold(self, |selection, sauce| selection.with_sauce(sauce))
    }

    pub fn with_instructions(mut self, note: impl Into<String>) -> Self {
        self.special_instructions = normalize_instructions(Some(note.into()));
        self
    }

    /// Price of one unit of `item` with these choices: base plus every side.
    pub fn unit_price(&self, item: &MenuItem) -> Money {
        unit_price(&item.price, &self.sides)
    }

    /// Canonical merge key for `item` with these choices.
    pub fn key(&self, item_id: &MenuItemId) -> SelectionKey {
        SelectionKey::new(
            item_id,
            self.spice_level,
            &self.sides,
            &self.sauces,
            self.special_instructions.as_deref(),
        )
    }
}

/// Canonical identity of a cart line.
///
/// Two add requests with equal keys land on the same line. Sides compare as a
/// sequence of `(id, price)` and sauces as a sequence of ids, both in the order
/// the customer picked them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    item_id: MenuItemId,
    spice_level: Option<SpiceLevel>,
    sides: Vec<(SideId, i64)>,
    sauces: Vec<SauceId>,
    special_instructions: Option<String>,
}

impl SelectionKey {
    fn new(
        item_id: &MenuItemId,
        spice_level: Option<SpiceLevel>,
        sides: &[SideItem],
        sauces: &[SauceId],
        special_instructions: Option<&str>,
    ) -> Self {
        Self {
            item_id: item_id.clone(),
            spice_level,
            sides: sides
                .iter()
                .map(|side| (side.id.clone(), side.price.amount_minor))
                .collect(),
            sauces: sauces.to_vec(),
            special_instructions: normalize_instructions(
                special_instructions.map(str::to_string),
            ),
        }
    }
}

/// One distinct purchasable configuration and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Per-line identifier; the precise addressing key for updates.
    pub line_id: LineItemId,
    /// Menu item as it was when added.
    pub item: MenuItem,
    /// Always at least 1.
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_spice_level: Option<SpiceLevel>,
    #[serde(default)]
    pub selected_sides: Vec<SideItem>,
    #[serde(default)]
    pub selected_sauces: Vec<SauceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// `(item price + side prices) * quantity`, refreshed on every change.
    pub total_price: Money,
}

impl CartLine {
    /// Create a new line.
    pub fn new(item: &MenuItem, selection: Selection, quantity: i64) -> Self {
        let mut line = Self {
            line_id: LineItemId::generate(),
            item: item.clone(),
            quantity,
            selected_spice_level: selection.spice_level,
            selected_sides: selection.sides,
            selected_sauces: selection.sauces,
            special_instructions: normalize_instructions(selection.special_instructions),
            total_price: Money::zero(item.price.currency),
        };
        line.update_total();
        line
    }

    /// Id of the underlying menu item.
    pub fn item_id(&self) -> &MenuItemId {
        &self.item.id
    }

    /// Price of one unit: base plus every selected side.
    pub fn unit_price(&self) -> Money {
        unit_price(&self.item.price, &self.selected_sides)
    }

    /// Recompute `total_price` from the unit price and quantity.
    pub fn update_total(&mut self) {
        self.total_price = self.unit_price().times(self.quantity);
    }

    /// Set the quantity and refresh the total.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.update_total();
    }

    /// Canonical merge key of this line.
    pub fn key(&self) -> SelectionKey {
        SelectionKey::new(
            &self.item.id,
            self.selected_spice_level,
            &self.selected_sides,
            &self.selected_sauces,
            self.special_instructions.as_deref(),
        )
    }
}

fn unit_price(base: &Money, sides: &[SideItem]) -> Money {
    sides
        .iter()
        .fold(*base, |acc, side| acc.saturating_add(&side.price))
}

fn normalize_instructions(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCategory;
    use crate::money::Currency;

    fn burger() -> MenuItem {
        MenuItem::new(
            "2",
            "Veggie Burger",
            "",
            Money::new(299, Currency::INR),
            MenuCategory::BurgersWraps,
        )
    }

    fn side(id: &str, price: i64) -> SideItem {
        SideItem::new(id, id, Money::new(price, Currency::INR))
    }

    #[test]
    fn test_line_total_includes_sides() {
        let line = CartLine::new(&burger(), Selection::new().with_side(side("fries", 99)), 2);
        assert_eq!(line.unit_price().amount_minor, 398);
        assert_eq!(line.total_price.amount_minor, 796);
    }

    #[test]
    fn test_set_quantity_refreshes_total() {
        let mut line = CartLine::new(&burger(), Selection::new().with_side(side("corn", 89)), 1);
        line.set_quantity(3);
        assert_eq!(line.total_price.amount_minor, (299 + 89) * 3);
    }

    #[test]
    fn test_key_follows_side_order() {
        let id = MenuItemId::new("2");
        let a = Selection::new()
            .with_side(side("fries", 99))
            .with_side(side("corn", 89));
        let b = Selection::new()
            .with_side(side("corn", 89))
            .with_side(side("fries", 99));
        assert_ne!(a.key(&id), b.key(&id));
        assert_eq!(a.key(&id), a.clone().key(&id));
    }

    #[test]
    fn test_key_follows_sauce_order() {
        let id = MenuItemId::new("2");
        let a = Selection::new().with_sauces(["mild", "garlic"]);
        let b = Selection::new().with_sauces(["garlic", "mild"]);
        assert_ne!(a.key(&id), b.key(&id));
    }

    #[test]
    fn test_repeated_sauce_is_kept_once() {
        let selection = Selection::new().with_sauces(["garlic", "mild", "garlic"]);
        let ids: Vec<&str> = selection.sauces.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["garlic", "mild"]);
    }

    #[test]
    fn test_key_counts_duplicate_sides() {
        let id = MenuItemId::new("2");
        let once = Selection::new().with_side(side("fries", 99));
        let twice = Selection::new()
            .with_side(side("fries", 99))
            .with_side(side("fries", 99));
        assert_ne!(once.key(&id), twice.key(&id));
    }

    #[test]
    fn test_key_distinguishes_each_choice() {
        let id = MenuItemId::new("2");
        let base = Selection::new();
        let variants = [
            Selection::new().with_spice_level(SpiceLevel::Hot),
            Selection::new().with_side(side("rice", 99)),
            Selection::new().with_sauce("garlic"),
            Selection::new().with_instructions("no onions"),
        ];
        for variant in &variants {
            assert_ne!(base.key(&id), variant.key(&id));
        }
        assert_ne!(base.key(&id), base.key(&MenuItemId::new("3")));
    }

    #[test]
    fn test_blank_instructions_are_no_instructions() {
        let id = MenuItemId::new("2");
        let blank = Selection::new().with_instructions("   ");
        assert_eq!(blank.special_instructions, None);
        assert_eq!(blank.key(&id), Selection::new().key(&id));

        let padded = Selection::new().with_instructions("  extra napkins ");
        assert_eq!(padded.special_instructions.as_deref(), Some("extra napkins"));
    }

    #[test]
    fn test_line_key_matches_selection_key() {
        let selection = Selection::new()
            .with_spice_level(SpiceLevel::Mild)
            .with_side(side("fries", 99))
            .with_sauce("medium");
        let item = burger();
        let line = CartLine::new(&item, selection.clone(), 1);
        assert_eq!(line.key(), selection.key(&item.id));
    }
}
