use std::collections::BTreeMap;
use std::num::NonZeroU32;

use crate::domain::shared::value_objects::ItemId;

/// State of one item in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEntry {
    Absent,
    Present(NonZeroU32),
}

impl CartEntry {
    /// Quantity in the cart, 0 when absent.
    pub fn quantity(&self) -> u32 {
        match self {
            CartEntry::Absent => 0,
            CartEntry::Present(quantity) => quantity.get(),
        }
    }
}

/// Per-session mapping from item to quantity.
///
/// A key exists only while its quantity is at least one: decrementing the
/// last unit removes the key, so zero and negative quantities cannot be
/// represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<ItemId, NonZeroU32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `id`, starting at 1 when absent. Returns the new quantity.
    pub fn add(&mut self, id: &ItemId) -> NonZeroU32 {
        let quantity = match self.items.get(id) {
            Some(current) => current.saturating_add(1),
            None => NonZeroU32::MIN,
        };
        self.items.insert(id.clone(), quantity);
        quantity
    }

    /// Removes one unit of `id`. Removing an absent item is a no-op.
    pub fn remove(&mut self, id: &ItemId) -> CartEntry {
        let Some(current) = self.items.get(id).copied() else {
            return CartEntry::Absent;
        };

        match NonZeroU32::new(current.get() - 1) {
            Some(decremented) => {
                self.items.insert(id.clone(), decremented);
                CartEntry::Present(decremented)
            }
            None => {
                self.items.remove(id);
                CartEntry::Absent
            }
        }
    }

    pub fn entry(&self, id: &ItemId) -> CartEntry {
        match self.items.get(id) {
            Some(quantity) => CartEntry::Present(*quantity),
            None => CartEntry::Absent,
        }
    }

    pub fn quantity(&self, id: &ItemId) -> u32 {
        self.entry(id).quantity()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.values().map(|q| u64::from(q.get())).sum()
    }

    /// Present entries ordered by item id.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, NonZeroU32)> {
        self.items.iter().map(|(id, quantity)| (id, *quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str) -> ItemId {
        ItemId::new(id)
    }

    #[test]
    fn should_start_at_one_when_adding_absent_item() {
        let mut cart = Cart::new();

        let quantity = cart.add(&item("42"));

        assert_eq!(quantity.get(), 1);
        assert_eq!(cart.quantity(&item("42")), 1);
    }

    #[test]
    fn should_increment_when_adding_present_item() {
        let mut cart = Cart::new();
        cart.add(&item("42"));

        let quantity = cart.add(&item("42"));

        assert_eq!(quantity.get(), 2);
    }

    #[test]
    fn should_remove_key_when_last_unit_removed() {
        let mut cart = Cart::new();
        cart.add(&item("42"));

        let entry = cart.remove(&item("42"));

        assert_eq!(entry, CartEntry::Absent);
        assert!(cart.is_empty());
        assert_eq!(cart.entry(&item("42")), CartEntry::Absent);
    }

    #[test]
    fn should_ignore_remove_when_item_absent() {
        let mut cart = Cart::new();
        cart.add(&item("a"));

        let entry = cart.remove(&item("b"));

        assert_eq!(entry, CartEntry::Absent);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity(&item("a")), 1);
    }

    #[test]
    fn should_decrement_without_removing_when_more_than_one() {
        let mut cart = Cart::new();
        cart.add(&item("42"));
        cart.add(&item("42"));
        cart.add(&item("42"));

        let entry = cart.remove(&item("42"));

        assert_eq!(entry.quantity(), 2);
        assert!(matches!(entry, CartEntry::Present(_)));
    }

    #[test]
    fn should_keep_items_independent() {
        let mut cart = Cart::new();
        cart.add(&item("a"));
        cart.add(&item("b"));
        cart.add(&item("b"));

        cart.remove(&item("a"));

        assert_eq!(cart.quantity(&item("a")), 0);
        assert_eq!(cart.quantity(&item("b")), 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn should_empty_cart_on_clear() {
        let mut cart = Cart::new();
        cart.add(&item("a"));
        cart.add(&item("b"));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn should_iterate_in_item_id_order() {
        let mut cart = Cart::new();
        cart.add(&item("c"));
        cart.add(&item("a"));
        cart.add(&item("b"));

        let ids: Vec<&str> = cart.iter().map(|(id, _)| id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8),
        Remove(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..4).prop_map(Op::Add),
            (0u8..4).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn should_hold_n_after_n_adds(n in 0u32..200) {
            let mut cart = Cart::new();
            let id = item("i");
            for _ in 0..n {
                cart.add(&id);
            }

            if n == 0 {
                prop_assert_eq!(cart.entry(&id), CartEntry::Absent);
            } else {
                prop_assert_eq!(cart.quantity(&id), n);
            }
        }

        #[test]
        fn should_restore_previous_state_after_add_then_remove(
            ops in prop::collection::vec(op(), 0..50),
            target in 0u8..4,
        ) {
            let mut cart = Cart::new();
            for op in ops {
                match op {
                    Op::Add(i) => { cart.add(&item(&i.to_string())); }
                    Op::Remove(i) => { cart.remove(&item(&i.to_string())); }
                }
            }
            let before = cart.clone();
            let id = item(&target.to_string());

            cart.add(&id);
            cart.remove(&id);

            prop_assert_eq!(cart, before);
        }

        #[test]
        fn should_match_reference_counter_for_any_sequence(
            ops in prop::collection::vec(op(), 0..100),
        ) {
            let mut cart = Cart::new();
            let mut expected = [0i64; 4];
            for op in ops {
                match op {
                    Op::Add(i) => {
                        cart.add(&item(&i.to_string()));
                        expected[i as usize] += 1;
                    }
                    Op::Remove(i) => {
                        cart.remove(&item(&i.to_string()));
                        expected[i as usize] = (expected[i as usize] - 1).max(0);
                    }
                }
            }

            for (i, count) in expected.iter().enumerate() {
                let id = item(&i.to_string());
                prop_assert_eq!(i64::from(cart.quantity(&id)), *count);
                prop_assert_eq!(matches!(cart.entry(&id), CartEntry::Present(_)), *count > 0);
            }
        }
    }
}
