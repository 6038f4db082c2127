//! Collection view over a nested structure

use crate::count::count_from;
use crate::depth::{check_depth, depth_from};
use crate::error::{RecurError, Result};
use crate::flatten::Flatten;
use crate::limits::TraversalLimits;
use crate::node::{leaf_contains, Node};

/// Recursive collection view over a borrowed nested container.
///
/// Membership, length and iteration see the flattened leaves; counting walks
/// the original structure. Nothing is cached, so every call traverses again.
///
/// ```
/// use recur_core::{Item, Nested};
/// use serde_json::json;
///
/// let numbers = Item::from(json!([[1, 2], [3, 4], [5, 6], [[7, 8], 9]]));
/// let nest = Nested::new(&numbers).unwrap();
///
/// assert!(nest.contains(&Item::Int(5)));
/// assert!(!nest.contains(&Item::Int(10)));
/// assert_eq!(nest.len(), 9);
/// assert_eq!(nest.count(&Item::Int(5)), 1);
/// ```
#[derive(Debug)]
pub struct Nested<'a, N: Node> {
    container: &'a N,
}

// Derived Clone/Copy would require `N: Clone`; only the borrow is copied.
impl<'a, N: Node> Clone for Nested<'a, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N: Node> Copy for Nested<'a, N> {}

impl<'a, N: Node> Nested<'a, N> {
    /// Wrap a container without traversing it.
    ///
    /// Fails with [`RecurError::NotIterable`] when `container` is a leaf.
    pub fn new(container: &'a N) -> Result<Self> {
        if !container.is_traversable_container() {
            return Err(RecurError::not_iterable::<N>());
        }
        tracing::debug!(type_name = std::any::type_name::<N>(), "wrapping nested container");
        Ok(Self { container })
    }

    /// Wrap a container after checking its nesting depth against `limits`.
    ///
    /// Unlike [`Nested::new`] this traverses the structure once, so it must be
    /// finite.
    pub fn with_limits(container: &'a N, limits: TraversalLimits) -> Result<Self> {
        let levels = check_depth(container, &limits)?;
        tracing::debug!(levels, max_depth = limits.max_depth, "nested depth within limits");
        Self::new(container)
    }

    /// The original, unflattened container
    pub fn nested_container(&self) -> &'a N {
        self.container
    }

    /// Whether `value` equals some leaf, or is found by the containment test
    /// of some leaf (an opaque container or a text substring). Stops at the
    /// first match.
    pub fn contains(&self, value: &N) -> bool {
        self.iter()
            .any(|leaf| leaf == value || leaf_contains(leaf, value))
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        let len = self.iter().count();
        tracing::debug!(len, "measured nested length");
        len
    }

    /// Whether the structure holds no leaves at all
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Fresh lazy iterator over the leaves
    pub fn iter(&self) -> Flatten<'a, N> {
        Flatten::from_node(self.container)
    }

    /// Occurrences of `value` in the original structure, see
    /// [`count_recursive`](crate::count_recursive)
    pub fn count(&self, value: &N) -> usize {
        count_from(self.container, value)
    }

    /// Maximum nesting depth, the wrapped container counting as 1
    pub fn depth(&self) -> usize {
        depth_from(self.container)
    }
}

impl<'a, N: Node> IntoIterator for Nested<'a, N> {
    type Item = &'a N;
    type IntoIter = Flatten<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'n, N: Node> IntoIterator for &'n Nested<'a, N> {
    type Item = &'a N;
    type IntoIter = Flatten<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
