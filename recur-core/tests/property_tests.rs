//! Property-based tests for flattening, membership and counting

use proptest::prelude::*;
use recur_core::{count_recursive, depth, flatten, Item, Nested, Node};
use recur_test_utils::{arb_item, arb_leaf, arb_nested, naive_leaves};

proptest! {
    #[test]
    fn flatten_matches_naive_recursion(root in arb_nested()) {
        let leaves: Vec<Item> = flatten(&root).unwrap().cloned().collect();
        prop_assert_eq!(leaves, naive_leaves(&root));
    }

    #[test]
    fn len_equals_flattened_count(root in arb_nested()) {
        let nest = Nested::new(&root).unwrap();
        prop_assert_eq!(nest.len(), flatten(&root).unwrap().count());
        prop_assert_eq!(nest.is_empty(), nest.len() == 0);
    }

    #[test]
    fn flattened_leaves_are_never_lists(root in arb_nested()) {
        for leaf in flatten(&root).unwrap() {
            prop_assert!(!leaf.is_traversable_container());
        }
    }

    #[test]
    fn contains_iff_equal_or_contained(root in arb_nested(), value in arb_leaf()) {
        let nest = Nested::new(&root).unwrap();
        let expected = naive_leaves(&root)
            .iter()
            .any(|leaf| *leaf == value || leaf.membership(&value) == Some(true));
        prop_assert_eq!(nest.contains(&value), expected);
    }

    #[test]
    fn every_leaf_is_contained(root in arb_nested()) {
        let nest = Nested::new(&root).unwrap();
        for leaf in nest.iter() {
            prop_assert!(nest.contains(leaf));
        }
    }

    #[test]
    fn count_sums_equality_and_containment(root in arb_nested(), value in arb_item()) {
        let expected: usize = naive_leaves(&root)
            .iter()
            .map(|leaf| {
                usize::from(*leaf == value) + usize::from(leaf.membership(&value) == Some(true))
            })
            .sum();
        prop_assert_eq!(count_recursive(&root, &value).unwrap(), expected);
        prop_assert_eq!(Nested::new(&root).unwrap().count(&value), expected);
    }

    #[test]
    fn count_positive_implies_contains(root in arb_nested(), value in arb_leaf()) {
        let nest = Nested::new(&root).unwrap();
        prop_assert_eq!(nest.count(&value) > 0, nest.contains(&value));
    }

    #[test]
    fn repeated_operations_agree(root in arb_nested(), value in arb_leaf()) {
        let nest = Nested::new(&root).unwrap();
        let first: Vec<&Item> = nest.iter().collect();
        let second: Vec<&Item> = nest.iter().collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(nest.len(), nest.len());
        prop_assert_eq!(nest.contains(&value), nest.contains(&value));
        prop_assert_eq!(nest.count(&value), nest.count(&value));
    }

    #[test]
    fn wrapping_in_a_list_keeps_leaves_and_adds_a_level(root in arb_nested()) {
        let wrapped = Item::List(vec![root.clone()]);
        prop_assert!(flatten(&wrapped).unwrap().eq(flatten(&root).unwrap()));
        prop_assert_eq!(depth(&wrapped).unwrap(), depth(&root).unwrap() + 1);
    }
}
