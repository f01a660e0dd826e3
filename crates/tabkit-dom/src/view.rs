//! Renderable content

use crate::node::{Element, Node};

/// Anything that can render itself into a node
pub trait View: Send + Sync {
    fn render(&self) -> Node;
}

/// A `div` holding plain text
#[derive(Debug, Clone)]
pub struct TextView {
    text: String,
}

impl TextView {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl View for TextView {
    fn render(&self) -> Node {
        Element::new("div").with_text(self.text.clone()).into()
    }
}

impl<F> View for F
where
    F: Fn() -> Node + Send + Sync,
{
    fn render(&self) -> Node {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_view() {
        let view = TextView::new("hello");
        assert_eq!(view.render().to_html(), "<div>hello</div>");
    }

    #[test]
    fn test_closure_view() {
        let view = || Node::text("from closure");
        assert_eq!(View::render(&view), Node::text("from closure"));
    }
}
