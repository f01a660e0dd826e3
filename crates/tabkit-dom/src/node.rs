//! Element tree

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
    #[serde(default)]
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Value of a `data-*` attribute
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attr(&format!("data-{}", key))
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class unless already present
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Removes all children
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Depth-first search over this element and its descendants
    pub fn find<P>(&self, pred: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.find_with(&pred)
    }

    fn find_with<P>(&self, pred: &P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_with(pred))
    }

    pub fn find_mut<P>(&mut self, pred: P) -> Option<&mut Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.find_mut_with(&pred)
    }

    fn find_mut_with<P>(&mut self, pred: &P) -> Option<&mut Element>
    where
        P: Fn(&Element) -> bool,
    {
        if pred(self) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child {
                if let Some(found) = el.find_mut_with(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// All matching elements in document order
    pub fn find_all<P>(&self, pred: P) -> Vec<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        let mut out = Vec::new();
        self.collect_matching(&pred, &mut out);
        out
    }

    fn collect_matching<'a, P>(&'a self, pred: &P, out: &mut Vec<&'a Element>)
    where
        P: Fn(&Element) -> bool,
    {
        if pred(self) {
            out.push(self);
        }
        for child in self.child_elements() {
            child.collect_matching(pred, out);
        }
    }

    /// Run `f` on every matching element, in document order
    pub fn for_each_mut<P, F>(&mut self, pred: P, mut f: F)
    where
        P: Fn(&Element) -> bool,
        F: FnMut(&mut Element),
    {
        self.visit_mut(&pred, &mut f);
    }

    fn visit_mut<P, F>(&mut self, pred: &P, f: &mut F)
    where
        P: Fn(&Element) -> bool,
        F: FnMut(&mut Element),
    {
        if pred(self) {
            f(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.visit_mut(pred, f);
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|el| el.id() == Some(id))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(|el| el.has_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_class("root")
            .with_child(
                Element::new("nav")
                    .with_class("strip")
                    .with_child(Element::new("button").with_attr("data-index", "0").with_text("One"))
                    .with_child(Element::new("button").with_attr("data-index", "1").with_text("Two")),
            )
            .with_child(Element::new("p").with_attr("id", "body").with_text("body text"))
    }

    #[test]
    fn test_find_and_data() {
        let root = sample();
        let second = root.find(|el| el.data("index") == Some("1")).unwrap();
        assert_eq!(second.text_content(), "Two");
        assert!(root.find_by_id("missing").is_none());
        assert_eq!(root.find_by_id("body").unwrap().tag, "p");
    }

    #[test]
    fn test_find_all_document_order() {
        let root = sample();
        let buttons = root.find_all(|el| el.tag == "button");
        let labels: Vec<String> = buttons.iter().map(|b| b.text_content()).collect();
        assert_eq!(labels, vec!["One", "Two"]);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut root = sample();
        root.find_mut(|el| el.data("index") == Some("0"))
            .unwrap()
            .set_attr("aria-selected", "true");

        let first = root.find(|el| el.data("index") == Some("0")).unwrap();
        assert_eq!(first.attr("aria-selected"), Some("true"));
    }

    #[test]
    fn test_for_each_mut_visits_all_matches() {
        let mut root = sample();
        let mut visited = 0;
        root.for_each_mut(
            |el| el.tag == "button",
            |el| {
                el.set_attr("tabindex", "-1");
                visited += 1;
            },
        );

        assert_eq!(visited, 2);
        assert!(root
            .find_all(|el| el.tag == "button")
            .iter()
            .all(|el| el.attr("tabindex") == Some("-1")));
        assert_eq!(root.find_by_id("body").unwrap().attr("tabindex"), None);
    }

    #[test]
    fn test_classes_are_unique() {
        let mut el = Element::new("div").with_class("a");
        el.add_class("a");
        el.toggle_class("b", true);
        assert_eq!(el.classes(), ["a", "b"]);

        el.toggle_class("a", false);
        assert!(!el.has_class("a"));
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        assert_eq!(Node::from(sample()).text_content(), "OneTwobody text");
    }

    #[test]
    fn test_serde_shape() {
        let node = Node::from(Element::new("span").with_text("hi"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["element"]["tag"], "span");
        assert_eq!(json["element"]["children"][0]["text"], "hi");
    }
}
