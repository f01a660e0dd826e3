//! tabkit Router
//!
//! Maps location fragments to callbacks and keeps a back/forward history:
//! - `navigate` with `replace` rewrites the current entry instead of pushing
//! - `trigger` runs the handler registered for the new fragment
//! - `back` / `forward` always run the handler of the fragment they land on

mod error;
mod history;
mod location;
mod router;

pub use error::RouterError;
pub use history::{HistoryEntry, HistoryRouter};
pub use location::{normalize_fragment, Location};
pub use router::{NavigateOptions, Router};

pub type Result<T> = std::result::Result<T, RouterError>;
