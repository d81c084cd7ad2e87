//! Cart state and its mutations.

use tracing::debug;

use crate::cart::{CartLine, CartSnapshot, CartSummary, LineSummary, Selection};
use crate::catalog::MenuItem;
use crate::ids::{LineItemId, MenuItemId};
use crate::money::{Currency, Money};

/// The shopping cart: ordered lines plus the drawer's open flag.
///
/// Every operation is total. Quantities on lines are always at least 1, each
/// line's `total_price` is refreshed whenever its quantity changes, and every
/// price on every line is in the cart's currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    /// Lines in insertion order.
    items: Vec<CartLine>,
    /// Whether the cart drawer is showing. Never persisted.
    is_open: bool,
    /// Currency every line is priced in.
    currency: Currency,
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            currency,
        }
    }

    /// Rebuild a closed cart from a persisted snapshot.
    ///
    /// Line totals are recomputed rather than trusted. The snapshot should
    /// already have passed [`CartSnapshot::validate`] for `currency`.
    pub fn restore(snapshot: CartSnapshot, currency: Currency) -> Self {
        let mut items = snapshot.items;
        for line in &mut items {
            line.update_total();
        }
        Self {
            items,
            is_open: false,
            currency,
        }
    }

    /// Add one unit of `item` with the given choices.
    ///
    /// If a line with the same canonical selection exists its quantity goes up
    /// by one; otherwise a new line is appended. Returns the line's id, or
    /// `None` without touching the cart when the item or a side is priced in
    /// another currency.
    pub fn add_item(&mut self, item: &MenuItem, selection: Selection) -> Option<LineItemId> {
        self.add_units(item, selection, 1)
    }

    /// Add `quantity` units at once, as if `add_item` were called that many
    /// times. Returns `None` and does nothing when `quantity <= 0` or the
    /// prices are in another currency.
    pub fn add_item_quantity(
        &mut self,
        item: &MenuItem,
        selection: Selection,
        quantity: i64,
    ) -> Option<LineItemId> {
        if quantity <= 0 {
            return None;
        }
        self.add_units(item, selection, quantity)
    }

    /// Whether `item` with `selection` is priced in this cart's currency.
    pub fn accepts(&self, item: &MenuItem, selection: &Selection) -> bool {
        item.price.currency == self.currency
            && selection
                .sides
                .iter()
                .all(|side| side.price.currency == self.currency)
    }

    fn add_units(
        &mut self,
        item: &MenuItem,
        selection: Selection,
        quantity: i64,
    ) -> Option<LineItemId> {
        if !self.accepts(item, &selection) {
            debug!(
                item = %item.id,
                cart_currency = %self.currency,
                item_currency = %item.price.currency,
                "skipping item priced in another currency"
            );
            return None;
        }

        let key = selection.key(&item.id);

        if let Some(existing) = self.items.iter_mut().find(|line| line.key() == key) {
            let new_quantity = existing.quantity.saturating_add(quantity);
            existing.set_quantity(new_quantity);
            return Some(existing.line_id.clone());
        }

        let line = CartLine::new(item, selection, quantity);
        let id = line.line_id.clone();
        self.items.push(line);
        Some(id)
    }

    /// Remove every line for this menu item, whatever its customization.
    ///
    /// Returns how many lines were removed.
    pub fn remove_item(&mut self, item_id: &MenuItemId) -> usize {
        let len_before = self.items.len();
        self.items.retain(|line| line.item_id() != item_id);
        len_before - self.items.len()
    }

    /// Remove exactly one line.
    pub fn remove_line(&mut self, line_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|line| &line.line_id != line_id);
        self.items.len() < len_before
    }

    /// Set the quantity of every line for this menu item.
    ///
    /// A quantity of zero or less removes those lines instead. Returns how many
    /// lines were touched.
    pub fn update_quantity(&mut self, item_id: &MenuItemId, quantity: i64) -> usize {
        if quantity <= 0 {
            return self.remove_item(item_id);
        }

        let mut touched = 0;
        for line in self.items.iter_mut().filter(|line| line.item_id() == item_id) {
            line.set_quantity(quantity);
            touched += 1;
        }
        touched
    }

    /// Set the quantity of one line. Zero or less removes it.
    pub fn update_line_quantity(&mut self, line_id: &LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_line(line_id);
        }

        match self.items.iter_mut().find(|line| &line.line_id == line_id) {
            Some(line) => {
                line.set_quantity(quantity);
                true
            }
            None => false,
        }
    }

    /// Drop every line. The open flag is left alone.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Flip the open flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Sum of every line's total.
    pub fn total_price(&self) -> Money {
        Money::sum(self.items.iter().map(|line| &line.total_price), self.currency)
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }

    pub fn line(&self, line_id: &LineItemId) -> Option<&CartLine> {
        self.items.iter().find(|line| &line.line_id == line_id)
    }

    /// Lines for one menu item, in cart order.
    pub fn lines_for(&self, item_id: &MenuItemId) -> impl Iterator<Item = &CartLine> {
        let item_id = item_id.clone();
        self.items.iter().filter(move |line| line.item_id() == &item_id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The persistable part of the cart.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
        }
    }

    /// Totals and per-line breakdown for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .items
                .iter()
                .map(|line| LineSummary {
                    line_id: line.line_id.clone(),
                    item_id: line.item.id.clone(),
                    name: line.item.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price(),
                    total: line.total_price,
                })
                .collect(),
            total_items: self.total_items(),
            unique_items: self.unique_item_count(),
            total_price: self.total_price(),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MenuCategory, SideItem, SpiceLevel};

    fn chicken() -> MenuItem {
        MenuItem::new(
            "1",
            "1/4 Chicken",
            "Flame-grilled",
            Money::new(349, Currency::INR),
            MenuCategory::Chicken,
        )
    }

    fn burger() -> MenuItem {
        MenuItem::new(
            "2",
            "Veggie Burger",
            "Chickpea patty",
            Money::new(299, Currency::INR),
            MenuCategory::BurgersWraps,
        )
        .vegetarian()
        .with_spice_level(SpiceLevel::Mild)
    }

    fn fries() -> SideItem {
        SideItem::new("fries", "PERi-Peri Fries", Money::new(99, Currency::INR))
    }

    fn corn() -> SideItem {
        SideItem::new("corn", "Corn on the Cob", Money::new(89, Currency::INR))
    }

    fn assert_totals_consistent(cart: &Cart) {
        let sum: i64 = cart.lines().iter().map(|l| l.total_price.amount_minor).sum();
        assert_eq!(cart.total_price().amount_minor, sum);
        for line in cart.lines() {
            assert!(line.quantity >= 1);
            assert_eq!(line.total_price, line.unit_price().times(line.quantity));
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::INR);
        assert!(cart.is_empty());
        assert!(!cart.is_open());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_identical_adds_merge() {
        let mut cart = Cart::new(Currency::INR);
        let first = cart.add_item(&chicken(), Selection::new());
        let second = cart.add_item(&chicken(), Selection::new());
        let third = cart.add_item(&chicken(), Selection::new());

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total_price().amount_minor, 349 * 3);
    }

    #[test]
    fn test_different_selection_creates_new_line() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&burger(), Selection::new());
        cart.add_item(&burger(), Selection::new().with_spice_level(SpiceLevel::Hot));
        cart.add_item(&burger(), Selection::new().with_side(fries()));
        cart.add_item(&burger(), Selection::new().with_sauce("garlic"));
        cart.add_item(&burger(), Selection::new().with_instructions("no mayo"));

        assert_eq!(cart.unique_item_count(), 5);
        assert_eq!(cart.total_items(), 5);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&burger(), Selection::new());
        cart.add_item(&chicken(), Selection::new());
        cart.add_item(&burger(), Selection::new());

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_add_item_quantity() {
        let mut cart = Cart::new(Currency::INR);
        let selection = Selection::new().with_side(fries());
        let id = cart
            .add_item_quantity(&burger(), selection.clone(), 3)
            .unwrap();
        cart.add_item(&burger(), selection);

        assert_eq!(cart.line(&id).unwrap().quantity, 4);
        assert_eq!(cart.total_price().amount_minor, (299 + 99) * 4);
        assert_eq!(cart.add_item_quantity(&burger(), Selection::new(), 0), None);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_remove_item_removes_all_variants() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&burger(), Selection::new());
        cart.add_item(&burger(), Selection::new().with_spice_level(SpiceLevel::Hot));
        cart.add_item(&chicken(), Selection::new());

        assert_eq!(cart.remove_item(&MenuItemId::new("2")), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.remove_item(&MenuItemId::new("missing")), 0);
    }

    #[test]
    fn test_remove_line_removes_one_variant() {
        let mut cart = Cart::new(Currency::INR);
        let mild = cart.add_item(&burger(), Selection::new()).unwrap();
        let hot = cart
            .add_item(&burger(), Selection::new().with_spice_level(SpiceLevel::Hot))
            .unwrap();

        assert!(cart.remove_line(&mild));
        assert!(!cart.remove_line(&mild));
        assert_eq!(cart.unique_item_count(), 1);
        assert!(cart.line(&hot).is_some());
    }

    #[test]
    fn test_update_quantity_resizes_all_variants() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&burger(), Selection::new());
        cart.add_item(&burger(), Selection::new().with_side(fries()));

        assert_eq!(cart.update_quantity(&MenuItemId::new("2"), 4), 2);
        let totals: Vec<i64> = cart
            .lines()
            .iter()
            .map(|l| l.total_price.amount_minor)
            .collect();
        assert_eq!(totals, vec![299 * 4, (299 + 99) * 4]);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        for quantity in [0, -5] {
            let mut cart = Cart::new(Currency::INR);
            cart.add_item(&burger(), Selection::new());
            cart.add_item(&burger(), Selection::new().with_side(fries()));
            cart.add_item(&chicken(), Selection::new());

            cart.update_quantity(&MenuItemId::new("2"), quantity);
            assert_eq!(cart.unique_item_count(), 1);
            assert_eq!(cart.lines()[0].item.id.as_str(), "1");
        }
    }

    #[test]
    fn test_update_line_quantity() {
        let mut cart = Cart::new(Currency::INR);
        let plain = cart.add_item(&burger(), Selection::new()).unwrap();
        let with_fries = cart
            .add_item(&burger(), Selection::new().with_side(fries()))
            .unwrap();

        assert!(cart.update_line_quantity(&with_fries, 3));
        assert_eq!(cart.line(&plain).unwrap().quantity, 1);
        assert_eq!(
            cart.line(&with_fries).unwrap().total_price.amount_minor,
            398 * 3
        );

        assert!(cart.update_line_quantity(&plain, 0));
        assert!(cart.line(&plain).is_none());
        assert!(!cart.update_line_quantity(&LineItemId::new("nope"), 2));
    }

    #[test]
    fn test_clear_keeps_open_flag() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&chicken(), Selection::new());
        assert!(cart.toggle());

        cart.clear();
        assert!(cart.is_open());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_toggle() {
        let mut cart = Cart::new(Currency::INR);
        assert!(cart.toggle());
        assert!(!cart.toggle());
    }

    #[test]
    fn test_restore_recomputes_totals() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&burger(), Selection::new().with_side(fries()));
        let mut snapshot = cart.snapshot();
        snapshot.items[0].total_price = Money::new(1, Currency::INR);

        let restored = Cart::restore(snapshot, Currency::INR);
        assert_eq!(restored.total_price().amount_minor, 398);
        assert!(!restored.is_open());
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&chicken(), Selection::new());
        cart.add_item(&chicken(), Selection::new());
        cart.add_item(&burger(), Selection::new().with_side(fries()));

        let summary = cart.summary();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.unique_items, 2);
        assert_eq!(summary.total_price.amount_minor, 698 + 398);
        assert_eq!(summary.lines[1].unit_price.amount_minor, 398);
    }

    #[test]
    fn test_side_order_keeps_lines_apart() {
        let mut cart = Cart::new(Currency::INR);
        let a = cart.add_item(&burger(), Selection::new().with_side(fries()).with_side(corn()));
        let b = cart.add_item(&burger(), Selection::new().with_side(corn()).with_side(fries()));

        assert_ne!(a, b);
        assert_eq!(cart.unique_item_count(), 2);
        let first: Vec<&str> = cart.lines()[0]
            .selected_sides
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(first, vec!["fries", "corn"]);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_sauce_order_keeps_lines_apart() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&chicken(), Selection::new().with_sauces(["mild", "garlic"]));
        cart.add_item(&chicken(), Selection::new().with_sauces(["garlic", "mild"]));
        cart.add_item(&chicken(), Selection::new().with_sauces(["mild", "garlic"]));

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_foreign_currency_item_is_skipped() {
        let mut cart = Cart::new(Currency::ZAR);
        assert_eq!(cart.add_item(&chicken(), Selection::new()), None);
        assert_eq!(cart.add_item_quantity(&chicken(), Selection::new(), 2), None);
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Money::zero(Currency::ZAR));
    }

    #[test]
    fn test_foreign_currency_side_is_skipped() {
        let mut cart = Cart::new(Currency::INR);
        let dollar_fries = SideItem::new("fries", "Fries", Money::new(99, Currency::USD));
        let selection = Selection::new().with_side(dollar_fries);

        assert!(!cart.accepts(&burger(), &selection));
        assert_eq!(cart.add_item(&burger(), selection), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_lines_for() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&burger(), Selection::new());
        cart.add_item(&chicken(), Selection::new());
        cart.add_item(&burger(), Selection::new().with_sauce("hot"));

        assert_eq!(cart.lines_for(&MenuItemId::new("2")).count(), 2);
    }
}
