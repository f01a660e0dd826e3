//! Router seam used by views

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateOptions {
    /// Run the handler registered for the new fragment
    pub trigger: bool,
    /// Rewrite the current history entry instead of pushing a new one
    pub replace: bool,
}

impl NavigateOptions {
    /// Push a new entry without running handlers
    pub fn push() -> Self {
        Self::default()
    }

    /// Rewrite the current entry without running handlers
    pub fn replace() -> Self {
        Self {
            trigger: false,
            replace: true,
        }
    }

    /// Push a new entry and run the matching handler
    pub fn trigger() -> Self {
        Self {
            trigger: true,
            replace: false,
        }
    }
}

pub trait Router: Send + Sync {
    /// Update the location to `fragment`
    fn navigate(&self, fragment: &str, options: NavigateOptions) -> Result<()>;

    /// Fragment of the current location, if any
    fn current_fragment(&self) -> Option<String>;
}
