//! The cart store: a [`Cart`] that writes itself through after every change.

use tracing::{debug, warn};

use crate::cart::{Cart, CartLine, CartPersistence, CartSnapshot, CartSummary, Selection};
use crate::catalog::MenuItem;
use crate::ids::{LineItemId, MenuItemId};
use crate::money::{Currency, Money};

/// Single owner of the cart state.
///
/// Persistence is best effort. Load failures and corrupt snapshots start an
/// empty cart, and a failed save is logged and otherwise ignored; the in-memory
/// cart stays authoritative.
#[derive(Debug)]
pub struct CartStore<P: CartPersistence> {
    cart: Cart,
    persistence: P,
}

impl<P: CartPersistence> CartStore<P> {
    /// Open the store, restoring whatever `persistence` holds.
    pub fn open(persistence: P) -> Self {
        Self::open_with_currency(persistence, Currency::default())
    }

    pub fn open_with_currency(persistence: P, currency: Currency) -> Self {
        let cart = match persistence.load() {
            Ok(Some(snapshot)) => match snapshot.validate(currency) {
                Ok(()) => {
                    debug!(lines = snapshot.items.len(), "restored cart");
                    Cart::restore(snapshot, currency)
                }
                Err(e) => {
                    warn!(error = %e, "discarding invalid cart snapshot");
                    Cart::new(currency)
                }
            },
            Ok(None) => Cart::new(currency),
            Err(e) => {
                warn!(error = %e, "failed to load cart, starting empty");
                Cart::new(currency)
            }
        };

        Self { cart, persistence }
    }

    /// Add one unit of `item`. Returns the id of the line it landed on, or
    /// `None` when the item is priced in another currency.
    pub fn add_item(&mut self, item: &MenuItem, selection: Selection) -> Option<LineItemId> {
        let line_id = self.cart.add_item(item, selection)?;
        debug!(item = %item.id, line = %line_id, "added item");
        self.persist();
        Some(line_id)
    }

    /// Add `quantity` units at once. Non-positive quantities and items priced
    /// in another currency do nothing.
    pub fn add_item_quantity(
        &mut self,
        item: &MenuItem,
        selection: Selection,
        quantity: i64,
    ) -> Option<LineItemId> {
        let line_id = self.cart.add_item_quantity(item, selection, quantity)?;
        debug!(item = %item.id, line = %line_id, quantity, "added items");
        self.persist();
        Some(line_id)
    }

    /// Remove every line for `item_id`.
    pub fn remove_item(&mut self, item_id: &MenuItemId) -> usize {
        let removed = self.cart.remove_item(item_id);
        debug!(item = %item_id, removed, "removed item");
        self.persist();
        removed
    }

    pub fn remove_line(&mut self, line_id: &LineItemId) -> bool {
        let removed = self.cart.remove_line(line_id);
        debug!(line = %line_id, removed, "removed line");
        self.persist();
        removed
    }

    /// Resize every line for `item_id`; `<= 0` removes them.
    pub fn update_quantity(&mut self, item_id: &MenuItemId, quantity: i64) -> usize {
        let touched = self.cart.update_quantity(item_id, quantity);
        debug!(item = %item_id, quantity, touched, "updated quantity");
        self.persist();
        touched
    }

    pub fn update_line_quantity(&mut self, line_id: &LineItemId, quantity: i64) -> bool {
        let touched = self.cart.update_line_quantity(line_id, quantity);
        debug!(line = %line_id, quantity, touched, "updated line quantity");
        self.persist();
        touched
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cleared cart");
        self.persist();
    }

    /// Show or hide the cart drawer. Not persisted.
    pub fn toggle_cart(&mut self) -> bool {
        self.cart.toggle()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    pub fn unique_item_count(&self) -> usize {
        self.cart.unique_item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.cart.is_open()
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn line(&self, line_id: &LineItemId) -> Option<&CartLine> {
        self.cart.line(line_id)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.cart.snapshot()) {
            warn!(error = %e, "failed to persist cart");
        }
    }
}
