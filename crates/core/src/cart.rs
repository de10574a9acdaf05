//! Cart state machine and derived totals.
//!
//! The cart is a reducer over an ordered list of lines: every mutation is a
//! [`CartCommand`] applied to a [`CartState`] snapshot via
//! [`CartState::apply`], which consumes the old snapshot and returns the
//! complete new one. There is no partial-update visibility: whoever owns the
//! snapshot swaps it wholesale.
//!
//! # Invariants
//!
//! - At most one line per product id.
//! - Every line's quantity is >= 1; a line is removed rather than stored at
//!   zero.
//! - Lines keep first-add order, and quantity changes never reorder them.
//!
//! Commands are total: operating on an id with no matching line is a no-op,
//! not an error. The storefront may race two clicks against the same line
//! (e.g. a decrease after a remove already landed), and "nothing to do" is
//! the correct outcome for the loser.

use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, Product, ProductId};

/// One product entry in the cart with an associated quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Units of this product in the cart. Always >= 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Quantity x unit price for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// A named mutation request applied to a [`CartState`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Append a new line with quantity 1, or increment the existing line.
    Add(Product),
    /// Increment the matching line's quantity by 1.
    Increase(ProductId),
    /// Decrement the matching line's quantity by 1, removing the line when
    /// it would reach zero.
    Decrease(ProductId),
    /// Remove the matching line regardless of quantity.
    Remove(ProductId),
}

/// The complete cart snapshot: an ordered list of lines, one per product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Apply one command, producing the next snapshot.
    ///
    /// Total over all inputs: unknown product ids leave the state unchanged.
    #[must_use]
    pub fn apply(self, command: CartCommand) -> Self {
        match command {
            CartCommand::Add(product) => self.add(product),
            CartCommand::Increase(id) => self.increase(&id),
            CartCommand::Decrease(id) => self.decrease(&id),
            CartCommand::Remove(id) => self.remove(&id),
        }
    }

    fn add(mut self, product: Product) -> Self {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(product));
        }
        self
    }

    fn increase(mut self, id: &ProductId) -> Self {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == id) {
            line.quantity += 1;
        }
        self
    }

    fn decrease(mut self, id: &ProductId) -> Self {
        if let Some(index) = self.lines.iter().position(|l| &l.product.id == id) {
            // Vec::remove keeps the order of the remaining lines.
            match self.lines.get_mut(index) {
                Some(line) if line.quantity > 1 => line.quantity -= 1,
                _ => {
                    self.lines.remove(index);
                }
            }
        }
        self
    }

    fn remove(mut self, id: &ProductId) -> Self {
        self.lines.retain(|l| &l.product.id != id);
        self
    }

    /// Lines in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether any line exists for the given product.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.lines.iter().any(|l| &l.product.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Count of distinct lines.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// Sum of quantity x unit price across all lines, in exact decimals.
    ///
    /// An empty cart totals to zero in the default currency.
    #[must_use]
    pub fn total_cost(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |l| l.product.price.currency_code);

        self.lines
            .iter()
            .fold(Price::zero(currency), |sum, line| sum + line.line_total())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_uppercase(),
            price: Price::from_cents(cents, CurrencyCode::USD),
            category: "Test".to_owned(),
            image: format!("https://example.com/{id}.jpg"),
            description: String::new(),
        }
    }

    fn quantities(state: &CartState) -> Vec<(String, u32)> {
        state
            .lines()
            .iter()
            .map(|l| (l.product.id.to_string(), l.quantity()))
            .collect()
    }

    #[test]
    fn test_add_to_empty_cart_creates_single_line() {
        let state = CartState::new().apply(CartCommand::Add(product("a", 1000)));

        assert_eq!(quantities(&state), vec![("a".to_owned(), 1)]);
        assert_eq!(state.total_quantity(), 1);
    }

    #[test]
    fn test_add_twice_increments_instead_of_duplicating() {
        let state = CartState::new()
            .apply(CartCommand::Add(product("a", 1000)))
            .apply(CartCommand::Add(product("a", 1000)));

        assert_eq!(quantities(&state), vec![("a".to_owned(), 2)]);
        assert_eq!(state.total_lines(), 1);
    }

    #[test]
    fn test_two_products_one_increase() {
        let state = CartState::new()
            .apply(CartCommand::Add(product("a", 1000)))
            .apply(CartCommand::Add(product("b", 500)))
            .apply(CartCommand::Increase(ProductId::new("a")));

        assert_eq!(
            quantities(&state),
            vec![("a".to_owned(), 2), ("b".to_owned(), 1)]
        );
        assert_eq!(state.total_quantity(), 3);
        assert_eq!(state.total_cost().amount, Decimal::new(2500, 2));
        assert_eq!(state.total_cost().display(), "$25.00");
    }

    #[test]
    fn test_decrease_at_quantity_one_removes_line() {
        let state = CartState::new()
            .apply(CartCommand::Add(product("a", 1000)))
            .apply(CartCommand::Decrease(ProductId::new("a")));

        assert!(state.is_empty());
        assert_eq!(state.total_quantity(), 0);
        assert_eq!(state.total_cost().display(), "$0.00");
    }

    #[test]
    fn test_decrease_at_quantity_two_keeps_line() {
        let state = CartState::new()
            .apply(CartCommand::Add(product("a", 1000)))
            .apply(CartCommand::Add(product("a", 1000)))
            .apply(CartCommand::Decrease(ProductId::new("a")));

        assert_eq!(quantities(&state), vec![("a".to_owned(), 1)]);
    }

    #[test]
    fn test_remove_drops_line_regardless_of_quantity() {
        let state = CartState::new()
            .apply(CartCommand::Add(product("a", 1000)))
            .apply(CartCommand::Add(product("a", 1000)))
            .apply(CartCommand::Add(product("b", 500)))
            .apply(CartCommand::Remove(ProductId::new("a")));

        assert_eq!(quantities(&state), vec![("b".to_owned(), 1)]);
    }

    #[test]
    fn test_unknown_ids_are_structural_no_ops() {
        let state = CartState::new().apply(CartCommand::Add(product("a", 1000)));

        let after_increase = state.clone().apply(CartCommand::Increase("x".into()));
        assert_eq!(after_increase, state);

        let after_decrease = state.clone().apply(CartCommand::Decrease("x".into()));
        assert_eq!(after_decrease, state);

        let after_remove = state.clone().apply(CartCommand::Remove("x".into()));
        assert_eq!(after_remove, state);
    }

    #[test]
    fn test_quantity_changes_preserve_first_add_order() {
        let state = CartState::new()
            .apply(CartCommand::Add(product("a", 1000)))
            .apply(CartCommand::Add(product("b", 500)))
            .apply(CartCommand::Add(product("c", 250)))
            .apply(CartCommand::Increase(ProductId::new("c")))
            .apply(CartCommand::Increase(ProductId::new("a")))
            .apply(CartCommand::Decrease(ProductId::new("b")));

        let ids: Vec<_> = state
            .lines()
            .iter()
            .map(|l| l.product.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_total_cost_has_no_float_drift() {
        // 3 x $0.10 must be exactly $0.30, not 0.30000000000000004.
        let state = CartState::new()
            .apply(CartCommand::Add(product("a", 10)))
            .apply(CartCommand::Add(product("a", 10)))
            .apply(CartCommand::Add(product("a", 10)));

        assert_eq!(state.total_cost().amount, Decimal::new(30, 2));
    }

    #[test]
    fn test_empty_cart_totals() {
        let state = CartState::new();
        assert_eq!(state.total_lines(), 0);
        assert_eq!(state.total_quantity(), 0);
        assert_eq!(state.total_cost(), Price::zero(CurrencyCode::USD));
    }

    #[test]
    fn test_contains() {
        let state = CartState::new().apply(CartCommand::Add(product("a", 1000)));
        assert!(state.contains(&ProductId::new("a")));
        assert!(!state.contains(&ProductId::new("b")));
    }

    #[test]
    fn test_state_serde_round_trip() {
        // The storefront stores the snapshot in the session as JSON.
        let state = CartState::new()
            .apply(CartCommand::Add(product("a", 1099)))
            .apply(CartCommand::Add(product("b", 599)))
            .apply(CartCommand::Increase(ProductId::new("a")));

        let json = serde_json::to_string(&state).unwrap();
        let back: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    // Fixed per-id price so repeated Adds of the same id agree.
    fn pool_product(id: &str) -> Product {
        let cents = 100 + 997 * i64::try_from(id.len()).unwrap();
        product(id, cents)
    }

    fn arb_command() -> impl Strategy<Value = CartCommand> {
        let id = prop::sample::select(vec!["a", "bb", "ccc", "dddd", "eeeee"]);
        prop_oneof![
            id.clone().prop_map(|s| CartCommand::Add(pool_product(s))),
            id.clone().prop_map(|s| CartCommand::Increase(s.into())),
            id.clone().prop_map(|s| CartCommand::Decrease(s.into())),
            id.prop_map(|s| CartCommand::Remove(s.into())),
        ]
    }

    proptest! {
        /// After every command in any sequence, the structural invariants
        /// hold and every selector agrees with a direct recomputation.
        #[test]
        fn test_invariants_hold_for_all_command_sequences(
            commands in prop::collection::vec(arb_command(), 0..40)
        ) {
            let mut state = CartState::new();

            for command in commands {
                state = state.apply(command);

                // No zero/negative quantity line is ever observable.
                prop_assert!(state.lines().iter().all(|l| l.quantity() >= 1));

                // At most one line per product id.
                let mut ids: Vec<_> =
                    state.lines().iter().map(|l| l.product.id.clone()).collect();
                ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                ids.dedup();
                prop_assert_eq!(ids.len(), state.total_lines());

                // Selectors match direct recomputation.
                let quantity: u32 = state.lines().iter().map(CartLine::quantity).sum();
                prop_assert_eq!(state.total_quantity(), quantity);

                let cost: Decimal = state
                    .lines()
                    .iter()
                    .map(|l| l.product.price.amount * Decimal::from(l.quantity()))
                    .sum();
                prop_assert_eq!(state.total_cost().amount, cost);

                prop_assert_eq!(state.total_lines(), state.lines().len());
            }
        }

        /// Add then Remove of ids never in the cart leaves an empty cart
        /// empty, whatever interleaving of unknown-id commands runs.
        #[test]
        fn test_unknown_only_commands_keep_cart_empty(
            ops in prop::collection::vec(0..3usize, 0..20)
        ) {
            let mut state = CartState::new();
            for op in ops {
                let id = ProductId::new("never-added");
                state = state.apply(match op {
                    0 => CartCommand::Increase(id),
                    1 => CartCommand::Decrease(id),
                    _ => CartCommand::Remove(id),
                });
                prop_assert!(state.is_empty());
            }
        }
    }
}
