//! Tab panels

use std::collections::HashSet;
use std::fmt;

use tabkit_dom::{Element, View};

use crate::state::TabState;

/// Content region of one tab
pub struct TabPanel {
    index: usize,
    id: String,
    view: Box<dyn View>,
}

impl TabPanel {
    pub fn new(index: usize, id: String, view: Box<dyn View>) -> Self {
        Self { index, id, view }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render the panel element around the content view
    pub fn render(&self, labelled_by: &str, state: TabState) -> Element {
        let mut el = Element::new("div")
            .with_class("tabpanel")
            .with_attr("id", self.id.clone())
            .with_attr("role", "tabpanel")
            .with_attr("aria-labelledby", labelled_by)
            .with_attr("tabindex", "-1")
            .with_attr("data-index", self.index.to_string())
            .with_child(self.view.render());
        state.apply_to_panel(&mut el);
        el
    }
}

impl fmt::Debug for TabPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabPanel")
            .field("index", &self.index)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Keep characters valid in an HTML id; replace the rest with `-`
fn sanitize_id(url: &str) -> String {
    url.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Panel ids derived from tab urls, or from the tab index for tabs without one.
/// Falls back to index ids for every panel if url ids would collide.
pub(crate) fn panel_ids(prefix: &str, urls: &[Option<&str>]) -> Vec<String> {
    let by_index = |index: usize| format!("{}{}", prefix, index);

    let derived: Vec<String> = urls
        .iter()
        .enumerate()
        .map(|(index, url)| match url {
            Some(url) => format!("{}{}", prefix, sanitize_id(url)),
            None => by_index(index),
        })
        .collect();

    let unique: HashSet<&String> = derived.iter().collect();
    if unique.len() == derived.len() {
        derived
    } else {
        tracing::warn!("Tab URLs map to colliding panel ids; using tab indices");
        (0..urls.len()).map(by_index).collect()
    }
}
