//! Depth-first flattening of nested structures

use crate::error::{RecurError, Result};
use crate::node::Node;
use smallvec::SmallVec;
use std::fmt;
use std::iter::FusedIterator;

/// Nesting levels kept inline before the stack spills to the heap
const INLINE_DEPTH: usize = 8;

/// Lazy, single-pass iterator over the leaves of a nested structure.
///
/// Leaves are produced depth-first, left to right. The iterator keeps one
/// child iterator per open nesting level and pulls a single element at a time,
/// so containers with unbounded children still stream. There is no cycle
/// detection.
pub struct Flatten<'a, N: Node + 'a> {
    stack: SmallVec<[N::Children<'a>; INLINE_DEPTH]>,
}

impl<'a, N: Node + 'a> Flatten<'a, N> {
    /// Start a traversal at `root`. A leaf root produces an empty iterator.
    pub(crate) fn from_node(root: &'a N) -> Self {
        let mut stack = SmallVec::new();
        if let Some(children) = root.children() {
            stack.push(children);
        }
        Self { stack }
    }
}

impl<'a, N: Node + 'a> Iterator for Flatten<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => match node.children() {
                    Some(children) => {
                        tracing::trace!(depth = self.stack.len() + 1, "descending");
                        self.stack.push(children);
                    }
                    None => return Some(node),
                },
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<'a, N: Node + 'a> FusedIterator for Flatten<'a, N> {}

impl<'a, N: Node + 'a> fmt::Debug for Flatten<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("open_levels", &self.stack.len())
            .finish()
    }
}

/// Flatten `root` into its leaves.
///
/// Fails with [`RecurError::NotIterable`] when `root` is itself a leaf.
/// Each call returns a fresh, independent iterator.
pub fn flatten<N: Node>(root: &N) -> Result<Flatten<'_, N>> {
    if !root.is_traversable_container() {
        return Err(RecurError::not_iterable::<N>());
    }
    Ok(Flatten::from_node(root))
}
