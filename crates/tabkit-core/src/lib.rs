//! tabkit Core
//!
//! Wires a tabbed view to configuration, logging and an optional history
//! router. The router owns the location; the page registers one route per
//! tab url so external navigation activates the matching tab.

mod config;
mod error;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use page::TabbedPage;

// Re-export core components
pub use tabkit_dom::{
    ClickEvent, Element, EventOutcome, Key, KeyboardEvent, Modifiers, Node, TextView, UiEvent,
    View,
};
pub use tabkit_router::{HistoryEntry, HistoryRouter, Location, NavigateOptions, Router, RouterError};
pub use tabkit_tabs::{
    ActivationMode, FocusTarget, TabDescriptor, TabError, TabMeta, TabSelector, TabState,
    TabbedView, ViewOptions,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` wins over `default_filter`. Later calls are ignored.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
