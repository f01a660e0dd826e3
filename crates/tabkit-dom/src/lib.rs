//! tabkit DOM
//!
//! A small retained element tree standing in for the browser DOM:
//! - Elements carry a tag, classes, attributes and child nodes
//! - Trees can be queried, mutated in place and serialized to HTML
//! - Content views render themselves into a `Node`

mod event;
mod html;
mod node;
mod view;

pub use event::{ClickEvent, EventOutcome, EventTarget, Key, KeyboardEvent, Modifiers, UiEvent};
pub use html::escape_html;
pub use node::{Element, Node};
pub use view::{TextView, View};
