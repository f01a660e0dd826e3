//! tabkit Tabs
//!
//! A tab strip with one content panel per tab. Exactly one tab is active;
//! arrow keys move focus around the strip and wrap at both ends.
//! ```text
//! Inactive
//!   ↓ click / Enter / Space / activate_tab
//! Active
//!   ↓ another tab activated
//! Inactive
//! ```

mod descriptor;
mod error;
mod keyboard;
mod options;
mod panel;
mod state;
mod urls;
mod view;

pub use descriptor::{TabDescriptor, TabMeta, TabSelector};
pub use error::TabError;
pub use keyboard::KeyAction;
pub use options::{ActivationMode, ViewOptions};
pub use panel::TabPanel;
pub use state::TabState;
pub use urls::UrlMap;
pub use view::{FocusTarget, TabbedView};

pub type Result<T> = std::result::Result<T, TabError>;
