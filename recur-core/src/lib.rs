//! recur core - Recursive operations over nested containers
//!
//! This crate treats an arbitrarily nested container as an implicit tree and
//! provides:
//!
//! - The [`Node`] capability trait (traversable container vs. leaf, optional
//!   containment test)
//! - Depth-first, lazy flattening ([`flatten`])
//! - Recursive occurrence counting ([`count_recursive`])
//! - Nesting depth measurement with configurable limits
//! - The [`Nested`] collection view
//! - [`Item`], a dynamic value tree, plus `Node` support for
//!   `serde_json::Value`
//!
//! Text values are always leaves. Cyclic or infinite structures are not
//! detected.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod count;
pub mod depth;
pub mod error;
pub mod flatten;
pub mod item;
pub mod json;
pub mod limits;
pub mod nested;
pub mod node;

// Re-export commonly used types
pub use count::count_recursive;
pub use depth::{check_depth, depth};
pub use error::{RecurError, Result};
pub use flatten::{flatten, Flatten};
pub use item::{Item, ItemChildren};
pub use limits::TraversalLimits;
pub use nested::Nested;
pub use node::Node;
