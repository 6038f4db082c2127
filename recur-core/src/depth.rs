//! Nesting depth measurement

use crate::error::{RecurError, Result};
use crate::limits::TraversalLimits;
use crate::node::Node;
use smallvec::SmallVec;

/// Maximum nesting depth of `root`. The root container itself is depth 1.
///
/// Fails with [`RecurError::NotIterable`] when `root` is a leaf.
pub fn depth<N: Node>(root: &N) -> Result<usize> {
    let children = root.children().ok_or_else(RecurError::not_iterable::<N>)?;
    measure::<N>(children, 1, usize::MAX)
}

/// Unbounded depth below `root`; a leaf root has depth 0.
pub(crate) fn depth_from<N: Node>(root: &N) -> usize {
    root.children()
        .and_then(|children| measure::<N>(children, 1, usize::MAX).ok())
        .unwrap_or(0)
}

/// Like [`depth`], but stops with [`RecurError::LimitExceeded`] as soon as a
/// container deeper than `limits.max_depth` is reached.
pub fn check_depth<N: Node>(root: &N, limits: &TraversalLimits) -> Result<usize> {
    limits.validate()?;
    let children = root.children().ok_or_else(RecurError::not_iterable::<N>)?;
    measure::<N>(children, 1, limits.max_depth)
}

/// Deepest container level below a container at level 1, walked on an
/// explicit stack so the thread stack does not bound the depth.
fn measure<'a, N: Node + 'a>(
    children: N::Children<'a>,
    level: usize,
    max_depth: usize,
) -> Result<usize> {
    if level > max_depth {
        return Err(RecurError::LimitExceeded { max_depth });
    }

    let mut stack: SmallVec<[N::Children<'a>; 8]> = SmallVec::new();
    stack.push(children);
    let mut deepest = level;

    while let Some(open) = stack.last_mut() {
        match open.next() {
            Some(child) => {
                if let Some(nested) = child.children() {
                    let current = level + stack.len();
                    if current > max_depth {
                        return Err(RecurError::LimitExceeded { max_depth });
                    }
                    deepest = deepest.max(current);
                    stack.push(nested);
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(deepest)
}
