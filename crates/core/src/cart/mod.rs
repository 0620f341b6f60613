//! Cart
//!
//! The mutable draft of one order: a list of lines keyed by item name, each
//! carrying the price captured when the item was first added. At most one
//! line exists per name, and a line's quantity is always positive; the
//! mutation operations preserve both.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{menu::MenuItem, prices::Price};

/// Errors that can occur while mutating a draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No line with the given name is in the cart.
    #[error("no \"{0}\" in the cart")]
    UnknownItem(String),
}

/// One distinct menu item in a draft: its name, the unit price captured at
/// add time, and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    name: String,
    price: Price,
    quantity: u32,
}

impl CartLine {
    /// Create a line directly, for records arriving from outside a draft.
    ///
    /// Quantities below one are lifted to one.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: quantity.max(1),
        }
    }

    /// The item name this line is keyed on.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price captured when the item was first added.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Number of units ordered, always at least one.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The in-progress cart for one ordering session.
///
/// Lines keep their insertion order. The total is derived from the lines on
/// every call; it is never stored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    lines: Vec<CartLine>,
}

impl OrderDraft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item` to the draft.
    ///
    /// If a line with the same name exists its quantity increments by one;
    /// otherwise a new line is created with quantity one and the item's
    /// current price captured. Availability is not checked here; screens
    /// decide what can be picked.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == item.name) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            });
        }
    }

    /// Remove one unit of the named item.
    ///
    /// Decrements the quantity when it is above one, otherwise deletes the
    /// line. Unknown names are a no-op.
    pub fn remove_item(&mut self, name: &str) {
        let Some(index) = self.lines.iter().position(|line| line.name == name) else {
            return;
        };

        match self.lines.get_mut(index) {
            Some(line) if line.quantity > 1 => line.quantity -= 1,
            _ => {
                self.lines.remove(index);
            }
        }
    }

    /// Remove the named line entirely, whatever its quantity.
    ///
    /// Deleting a name that is not in the cart is a no-op.
    pub fn delete_item(&mut self, name: &str) {
        self.lines.retain(|line| line.name != name);
    }

    /// Set the named line's quantity directly.
    ///
    /// A quantity of zero removes the line, exactly like
    /// [`delete_item`](Self::delete_item). Setting a positive quantity for a
    /// name that is not in the cart reports [`CartError::UnknownItem`] and
    /// leaves the draft unchanged.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownItem`]: no line with that name exists.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            self.delete_item(name);
            return Ok(());
        }

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.name == name)
            .ok_or_else(|| CartError::UnknownItem(name.to_string()))?;

        line.quantity = quantity;

        Ok(())
    }

    /// Sum of unit price times quantity over all lines; zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the draft has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::menu::Category;

    use super::*;

    fn item(name: &str, rupees: u64) -> MenuItem {
        MenuItem {
            id: format!("item-{}", name.to_lowercase()),
            name: name.to_string(),
            price: Price::from_rupees(rupees),
            category: Category::Snack,
            available: true,
            description: String::new(),
            image: None,
        }
    }

    #[test]
    fn adding_the_same_item_twice_merges_into_one_line() -> TestResult {
        let mut draft = OrderDraft::new();
        let samosa = item("Samosa", 15);

        draft.add_item(&samosa);
        draft.add_item(&samosa);

        assert_eq!(draft.len(), 1);

        let line = draft.lines().first().ok_or("missing line")?;

        assert_eq!(line.name(), "Samosa");
        assert_eq!(line.price(), Price::from_minor(15_00));
        assert_eq!(line.quantity(), 2);
        assert_eq!(draft.total(), Price::from_minor(30_00));

        Ok(())
    }

    #[test]
    fn distinct_items_keep_insertion_order() {
        let mut draft = OrderDraft::new();

        draft.add_item(&item("Tea", 10));
        draft.add_item(&item("Samosa", 15));
        draft.add_item(&item("Tea", 10));

        let names: Vec<&str> = draft.lines().iter().map(CartLine::name).collect();

        assert_eq!(names, ["Tea", "Samosa"]);
    }

    #[test]
    fn quantity_tracks_net_add_and_remove_calls() {
        let mut draft = OrderDraft::new();
        let tea = item("Tea", 10);

        for _ in 0..5 {
            draft.add_item(&tea);
        }
        draft.remove_item("Tea");
        draft.remove_item("Tea");

        let quantity = draft.lines().first().map(CartLine::quantity);

        assert_eq!(quantity, Some(3));
    }

    #[test]
    fn remove_decrements_above_one_and_deletes_at_one() {
        let mut draft = OrderDraft::new();
        let tea = item("Tea", 10);

        draft.add_item(&tea);
        draft.add_item(&tea);

        draft.remove_item("Tea");
        assert_eq!(draft.len(), 1, "quantity 2 should only decrement");

        draft.remove_item("Tea");
        assert!(draft.is_empty(), "quantity 1 should delete the line");
    }

    #[test]
    fn remove_of_unknown_name_is_a_no_op() {
        let mut draft = OrderDraft::new();
        draft.add_item(&item("Tea", 10));

        draft.remove_item("Coffee");

        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn delete_removes_regardless_of_quantity_and_is_idempotent() {
        let mut draft = OrderDraft::new();
        let tea = item("Tea", 10);

        draft.add_item(&tea);
        draft.add_item(&tea);
        draft.add_item(&tea);

        draft.delete_item("Tea");
        assert!(draft.is_empty());

        draft.delete_item("Tea");
        assert!(draft.is_empty());
    }

    #[test]
    fn set_quantity_overwrites_the_count() -> TestResult {
        let mut draft = OrderDraft::new();
        draft.add_item(&item("Tea", 10));

        draft.set_quantity("Tea", 4)?;

        assert_eq!(draft.lines().first().map(CartLine::quantity), Some(4));
        assert_eq!(draft.total(), Price::from_minor(40_00));

        Ok(())
    }

    #[test]
    fn set_quantity_zero_matches_delete() -> TestResult {
        let tea = item("Tea", 10);
        let samosa = item("Samosa", 15);

        let mut via_set = OrderDraft::new();
        via_set.add_item(&tea);
        via_set.add_item(&samosa);

        let mut via_delete = via_set.clone();

        via_set.set_quantity("Tea", 0)?;
        via_delete.delete_item("Tea");

        assert_eq!(via_set, via_delete);

        Ok(())
    }

    #[test]
    fn set_quantity_zero_for_unknown_name_is_a_no_op() -> TestResult {
        let mut draft = OrderDraft::new();
        draft.add_item(&item("Tea", 10));

        draft.set_quantity("Coffee", 0)?;

        assert_eq!(draft.len(), 1);

        Ok(())
    }

    #[test]
    fn set_quantity_reports_unknown_names_and_changes_nothing() {
        let mut draft = OrderDraft::new();
        draft.add_item(&item("Tea", 10));

        let before = draft.clone();
        let result = draft.set_quantity("Coffee", 2);

        assert_eq!(result, Err(CartError::UnknownItem("Coffee".to_string())));
        assert_eq!(draft, before);
    }

    #[test]
    fn total_is_zero_when_empty_and_round_trips() {
        let mut draft = OrderDraft::new();

        assert_eq!(draft.total(), Price::ZERO);

        draft.add_item(&item("Tea", 10));
        let before = draft.total();

        draft.add_item(&item("Samosa", 15));
        draft.delete_item("Samosa");

        assert_eq!(draft.total(), before);
    }

    #[test]
    fn line_price_is_captured_at_add_time() {
        let mut draft = OrderDraft::new();
        let mut tea = item("Tea", 10);

        draft.add_item(&tea);
        tea.price = Price::from_rupees(12);
        draft.add_item(&tea);

        let line_price = draft.lines().first().map(CartLine::price);

        assert_eq!(line_price, Some(Price::from_minor(10_00)));
        assert_eq!(draft.total(), Price::from_minor(20_00));
    }

    #[test]
    fn unavailable_items_can_still_be_added() {
        let mut draft = OrderDraft::new();
        let mut soup = item("Soup", 25);
        soup.available = false;

        draft.add_item(&soup);

        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn line_constructor_lifts_zero_quantities_to_one() {
        let line = CartLine::new("Tea", Price::from_rupees(10), 0);

        assert_eq!(line.quantity(), 1);
    }
}
