//! UI events delivered to views

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::node::Element;

/// Keys with special meaning to interactive widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Home,
    End,
    Enter,
    Space,
    Other(u32),
}

impl Key {
    /// Map a legacy `keyCode` / `which` value
    pub fn from_code(code: u32) -> Self {
        match code {
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            36 => Key::Home,
            35 => Key::End,
            13 => Key::Enter,
            32 => Key::Space,
            other => Key::Other(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Key::Left => 37,
            Key::Up => 38,
            Key::Right => 39,
            Key::Down => 40,
            Key::Home => 36,
            Key::End => 35,
            Key::Enter => 13,
            Key::Space => 32,
            Key::Other(code) => *code,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

/// Snapshot of the element an event was dispatched on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTarget {
    pub tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl EventTarget {
    pub fn of(el: &Element) -> Self {
        Self {
            tag: el.tag.clone(),
            classes: el.classes().to_vec(),
            attributes: el.attributes().clone(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.attr(&format!("data-{}", key))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: EventTarget,
}

impl ClickEvent {
    pub fn on(el: &Element) -> Self {
        Self {
            target: EventTarget::of(el),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub target: EventTarget,
}

impl KeyboardEvent {
    pub fn on(el: &Element, key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            target: EventTarget::of(el),
        }
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(ClickEvent),
    Keydown(KeyboardEvent),
}

impl UiEvent {
    pub fn target(&self) -> &EventTarget {
        match self {
            UiEvent::Click(ev) => &ev.target,
            UiEvent::Keydown(ev) => &ev.target,
        }
    }
}

/// What a handler did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Consumed; the host should prevent the default action
    Handled,
    /// Not consumed; default handling proceeds
    Propagate,
}

impl EventOutcome {
    pub fn prevents_default(&self) -> bool {
        matches!(self, EventOutcome::Handled)
    }
}
