//! recur Test Utilities
//!
//! Shared fixtures and proptest strategies for the recur workspace.

use proptest::prelude::*;
use recur_core::Item;
use serde_json::json;

/// The canonical mixed-depth list of the numbers 1 through 9
pub fn number_lists() -> Item {
    Item::from(json!([[1, 2], [3, 4], [5, 6], [[7, 8], 9]]))
}

/// Lists that nest only other lists, holding no leaves at all
pub fn hollow_lists() -> Item {
    Item::from(json!([[], [[]]]))
}

/// A single leaf wrapped in `levels` lists
pub fn deep_chain(levels: usize, leaf: Item) -> Item {
    (0..levels).fold(leaf, |inner, _| Item::List(vec![inner]))
}

/// A complete tree of `fanout` children per list, `levels` lists deep,
/// with consecutive integers at the leaves
pub fn wide_tree(fanout: usize, levels: usize) -> Item {
    fn build(fanout: usize, levels: usize, next: &mut i64) -> Item {
        if levels == 0 {
            let leaf = Item::Int(*next);
            *next += 1;
            return leaf;
        }
        Item::List((0..fanout).map(|_| build(fanout, levels - 1, next)).collect())
    }

    let mut next = 0;
    build(fanout, levels.max(1), &mut next)
}

/// Strategy for leaf items, opaque containers included
pub fn arb_leaf() -> impl Strategy<Value = Item> {
    prop_oneof![
        Just(Item::Null),
        any::<bool>().prop_map(Item::Bool),
        (-20i64..20).prop_map(Item::Int),
        "[a-c]{0,3}".prop_map(Item::Text),
        (-5i64..5, 0i64..10).prop_map(|(start, len)| Item::range(start, start + len)),
    ]
}

/// Strategy for arbitrary items, leaves and lists up to a few levels deep
pub fn arb_item() -> impl Strategy<Value = Item> {
    arb_leaf().prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Item::List)
    })
}

/// Strategy for list roots, suitable for every traversal entry point
pub fn arb_nested() -> impl Strategy<Value = Item> {
    prop::collection::vec(arb_item(), 0..8).prop_map(Item::List)
}

/// Reference flattening by plain recursion, used as a test oracle
pub fn naive_leaves(item: &Item) -> Vec<Item> {
    match item {
        Item::List(items) => items.iter().flat_map(naive_leaves).collect(),
        Item::Map(entries) => entries.iter().flat_map(|(key, _)| naive_leaves(key)).collect(),
        leaf => vec![leaf.clone()],
    }
}
