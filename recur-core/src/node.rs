//! Capabilities a value exposes to recursive traversal
//!
//! A nested structure is never materialized as an explicit tree. Instead every
//! value answers two questions through [`Node`]:
//!
//! - Is it a traversable container, and if so what are its children?
//! - Does it support a containment test against another value?
//!
//! Values that are not traversable containers are *leaves*. Leaves that still
//! support a containment test are *opaque containers*: they are never expanded
//! by flattening, but membership and counting look inside them.

/// A value that may appear inside a nested structure.
///
/// # Text-like scalars
///
/// Implementations must report text values (strings and similar) as leaves by
/// returning `None` from [`Node::children`], even if the underlying type could
/// be iterated character by character. Expanding text would recurse forever on
/// single-character strings.
pub trait Node: PartialEq {
    /// Iterator over the direct children of a container
    type Children<'a>: Iterator<Item = &'a Self>
    where
        Self: 'a;

    /// Children of this value when it is a traversable container, `None` for leaves
    fn children(&self) -> Option<Self::Children<'_>>;

    /// Whether flattening descends into this value
    fn is_traversable_container(&self) -> bool {
        self.children().is_some()
    }

    /// Containment test against `target`.
    ///
    /// Returns `None` when this value has no containment capability, which
    /// callers treat the same as "not contained". Traversable containers are
    /// never asked; only leaves are.
    fn membership(&self, _target: &Self) -> Option<bool> {
        None
    }
}

/// Whether `leaf` matches `target` through its containment capability.
pub(crate) fn leaf_contains<N: Node>(leaf: &N, target: &N) -> bool {
    match leaf.membership(target) {
        Some(found) => found,
        None => {
            tracing::trace!("leaf has no containment capability, skipping");
            false
        }
    }
}
