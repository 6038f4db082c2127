//! Recursive occurrence counting

use crate::error::{RecurError, Result};
use crate::flatten::Flatten;
use crate::node::{leaf_contains, Node};

/// Count occurrences of `target` anywhere inside `root`.
///
/// Walks the original structure in flattening order. Every leaf contributes
/// one for equality with `target`, and independently one more when the leaf is
/// an opaque container whose containment test finds `target`. A leaf that is
/// both equal to and containing the target therefore counts twice.
///
/// Fails with [`RecurError::NotIterable`] when `root` is itself a leaf.
pub fn count_recursive<N: Node>(root: &N, target: &N) -> Result<usize> {
    if !root.is_traversable_container() {
        return Err(RecurError::not_iterable::<N>());
    }
    Ok(count_from(root, target))
}

/// Count occurrences below `root`; a leaf root counts nothing.
///
/// Runs on the explicit stack of [`Flatten`], so depth is bounded by memory
/// rather than by the thread stack.
pub(crate) fn count_from<N: Node>(root: &N, target: &N) -> usize {
    let total = Flatten::from_node(root)
        .map(|leaf| usize::from(leaf == target) + usize::from(leaf_contains(leaf, target)))
        .sum();
    tracing::debug!(total, "counted recursive occurrences");
    total
}
