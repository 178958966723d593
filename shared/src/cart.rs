use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one menu item's quantity selector.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Short random id for selectors whose card carries no `data-item-id`.
    pub fn random() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(9);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    Increment,
    Decrement,
}

impl QuantityAction {
    /// Maps the selector button's modifier classes to an action.
    pub fn from_button(is_plus: bool, is_minus: bool) -> Option<Self> {
        match (is_plus, is_minus) {
            (true, _) => Some(QuantityAction::Increment),
            (false, true) => Some(QuantityAction::Decrement),
            (false, false) => None,
        }
    }
}

/// Outcome of a single quantity button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub item: ItemId,
    pub quantity: u32,
    pub changed: bool,
    pub total: u32,
}

impl QuantityUpdate {
    pub fn decrement_enabled(&self) -> bool {
        self.quantity > 0
    }
}

/// Per-item quantities selected on the page.
///
/// The cart count is the sum of the item quantities, so the badge can never
/// disagree with the selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    quantities: BTreeMap<ItemId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a selector at quantity zero, resetting any previous value.
    pub fn register(&mut self, item: ItemId) {
        self.quantities.insert(item, 0);
    }

    pub fn quantity(&self, item: &ItemId) -> u32 {
        self.quantities.get(item).copied().unwrap_or(0)
    }

    pub fn apply(&mut self, item: &ItemId, action: QuantityAction) -> QuantityUpdate {
        let quantity = self.quantities.entry(item.clone()).or_insert(0);
        let before = *quantity;
        match action {
            QuantityAction::Increment => *quantity = quantity.saturating_add(1),
            QuantityAction::Decrement => *quantity = quantity.saturating_sub(1),
        }
        let after = *quantity;

        QuantityUpdate {
            item: item.clone(),
            quantity: after,
            changed: after != before,
            total: self.total(),
        }
    }

    pub fn total(&self) -> u32 {
        self.quantities.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn item_count(&self) -> usize {
        self.quantities.len()
    }

    pub fn badge_text(&self) -> String {
        self.total().to_string()
    }

    /// The badge pulses while anything is selected.
    pub fn badge_pulses(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> ItemId {
        ItemId::from("burger-1")
    }

    #[test]
    fn test_burger_scenario() {
        let mut cart = Cart::new();
        cart.register(burger());

        for _ in 0..3 {
            cart.apply(&burger(), QuantityAction::Increment);
        }
        let update = cart.apply(&burger(), QuantityAction::Decrement);
        assert_eq!(update.quantity, 2);
        assert_eq!(cart.badge_text(), "2");
        assert!(update.decrement_enabled());

        cart.apply(&burger(), QuantityAction::Decrement);
        let update = cart.apply(&burger(), QuantityAction::Decrement);
        assert_eq!(update.quantity, 0);
        assert_eq!(cart.badge_text(), "0");
        assert!(!update.decrement_enabled());
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut cart = Cart::new();
        cart.register(burger());

        let update = cart.apply(&burger(), QuantityAction::Decrement);
        assert_eq!(update.quantity, 0);
        assert!(!update.changed);
        assert_eq!(update.total, 0);
    }

    #[test]
    fn test_decrement_reenabled_after_increment() {
        let mut cart = Cart::new();
        cart.register(burger());

        cart.apply(&burger(), QuantityAction::Increment);
        let update = cart.apply(&burger(), QuantityAction::Decrement);
        assert!(!update.decrement_enabled());

        let update = cart.apply(&burger(), QuantityAction::Increment);
        assert!(update.decrement_enabled());
    }

    #[test]
    fn test_total_is_increments_minus_decrements_in_any_order() {
        let a = ItemId::from("a");
        let b = ItemId::from("b");
        let alphabet = [
            (&a, QuantityAction::Increment),
            (&a, QuantityAction::Decrement),
            (&b, QuantityAction::Increment),
            (&b, QuantityAction::Decrement),
        ];

        // Every sequence of up to six presses, encoded as base-4 digits.
        for len in 0..=6u32 {
            for code in 0..alphabet.len().pow(len) {
                let mut cart = Cart::new();
                let (mut increments, mut decrements) = (0u32, 0u32);
                let mut digits = code;

                for _ in 0..len {
                    let (item, action) = alphabet[digits % alphabet.len()];
                    digits /= alphabet.len();

                    let before = cart.quantity(item);
                    let update = cart.apply(item, action);
                    match action {
                        QuantityAction::Increment => increments += 1,
                        QuantityAction::Decrement if before > 0 => decrements += 1,
                        QuantityAction::Decrement => assert!(!update.changed),
                    }

                    assert_eq!(update.total, increments - decrements);
                    assert_eq!(cart.total(), cart.quantity(&a) + cart.quantity(&b));
                    assert_eq!(update.decrement_enabled(), update.quantity > 0);
                }
            }
        }
    }

    #[test]
    fn test_register_resets_quantity() {
        let mut cart = Cart::new();
        cart.apply(&burger(), QuantityAction::Increment);
        cart.register(burger());
        assert_eq!(cart.quantity(&burger()), 0);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_badge_pulse_follows_total() {
        let mut cart = Cart::new();
        assert!(!cart.badge_pulses());
        cart.apply(&burger(), QuantityAction::Increment);
        assert!(cart.badge_pulses());
    }

    #[test]
    fn test_action_from_button() {
        assert_eq!(QuantityAction::from_button(true, false), Some(QuantityAction::Increment));
        assert_eq!(QuantityAction::from_button(false, true), Some(QuantityAction::Decrement));
        assert_eq!(QuantityAction::from_button(false, false), None);
    }

    #[test]
    fn test_random_item_id_length() {
        let id = ItemId::random();
        assert_eq!(id.as_str().len(), 9);
        assert_ne!(id, ItemId::random());
    }
}
