//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("A tabbed view needs at least one tab")]
    NoTabs,

    #[error("Duplicate tab URL: {0}")]
    DuplicateUrl(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid view options: {0}")]
    InvalidOptions(String),

    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("View has not been rendered")]
    NotRendered,

    #[error("Router error: {0}")]
    Router(#[from] tabkit_router::RouterError),
}
