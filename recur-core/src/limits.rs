//! Traversal limits

use crate::error::{RecurError, Result};

/// Limits applied by depth-checked traversals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Maximum nesting depth, root container included (default: 1,024, hard: 65,536)
    pub max_depth: usize,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self { max_depth: 1_024 }
    }
}

impl TraversalLimits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self { max_depth: 65_536 }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_depth == 0 {
            return Err(RecurError::InvalidLimits(
                "max_depth must be at least 1".to_string(),
            ));
        }

        if self.max_depth > hard.max_depth {
            return Err(RecurError::InvalidLimits(format!(
                "max_depth {} exceeds hard limit {}",
                self.max_depth, hard.max_depth
            )));
        }

        Ok(())
    }
}
