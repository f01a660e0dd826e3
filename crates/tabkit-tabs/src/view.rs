//! Tabbed view
//!
//! Owns the tab descriptors, the rendered element tree and the active index.
//! Exactly one tab/panel pair carries active ARIA state once rendered.

use std::sync::Arc;

use tabkit_dom::{ClickEvent, Element, EventOutcome, EventTarget, KeyboardEvent, UiEvent};
use tabkit_router::{NavigateOptions, Router};

use crate::descriptor::{TabDescriptor, TabMeta, TabSelector};
use crate::error::TabError;
use crate::keyboard::KeyAction;
use crate::options::{ActivationMode, ViewOptions};
use crate::panel::{panel_ids, TabPanel};
use crate::state::TabState;
use crate::urls::UrlMap;
use crate::Result;

const TAB_CLASS: &str = "tab";

/// Element that currently holds input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Tab(usize),
    Panel(usize),
}

#[derive(Debug, Clone)]
struct TabEntry {
    title: String,
    url: Option<String>,
    button_id: String,
}

pub struct TabbedView {
    tabs: Vec<TabEntry>,
    panels: Vec<TabPanel>,
    urls: UrlMap,
    options: ViewOptions,
    /// Location collaborator, if tab switches should update the URL
    router: Option<Arc<dyn Router>>,
    /// Index of the active tab
    active: usize,
    focus: Option<FocusTarget>,
    /// Rendered tree; `None` until `render`
    root: Option<Element>,
}

impl TabbedView {
    pub fn new(descriptors: Vec<TabDescriptor>, options: ViewOptions) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(TabError::NoTabs);
        }
        options.validate()?;

        let urls = UrlMap::build(&descriptors)?;
        let ids = panel_ids(
            &options.panel_id_prefix,
            &descriptors.iter().map(|d| d.url.as_deref()).collect::<Vec<_>>(),
        );

        let mut tabs = Vec::with_capacity(descriptors.len());
        let mut panels = Vec::with_capacity(descriptors.len());
        for ((index, descriptor), panel_id) in descriptors.into_iter().enumerate().zip(ids) {
            tabs.push(TabEntry {
                title: descriptor.title,
                url: descriptor.url,
                button_id: format!("{}{}", options.tab_id_prefix, index),
            });
            panels.push(TabPanel::new(index, panel_id, descriptor.view));
        }

        tracing::info!(
            tab_count = tabs.len(),
            url_count = urls.len(),
            label = %options.view_label,
            "Initialized tabbed view"
        );

        Ok(Self {
            tabs,
            panels,
            urls,
            options,
            router: None,
            active: 0,
            focus: None,
            root: None,
        })
    }

    pub fn with_router(mut self, router: Arc<dyn Router>) -> Self {
        self.router = Some(router);
        self
    }

    pub fn set_router(&mut self, router: Option<Arc<dyn Router>>) {
        self.router = router;
    }

    pub fn router(&self) -> Option<&Arc<dyn Router>> {
        self.router.as_ref()
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; construction rejects an empty tab list
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn urls(&self) -> &UrlMap {
        &self.urls
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn is_rendered(&self) -> bool {
        self.root.is_some()
    }

    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    pub fn to_html(&self) -> Option<String> {
        self.root.as_ref().map(Element::to_html)
    }

    /// Build the tab strip and panels, then show the tab for the current
    /// location, falling back to the first tab.
    pub fn render(&mut self) -> &Element {
        let initial = self.initial_index();

        let mut nav = Element::new("nav")
            .with_class("page-content-nav")
            .with_attr("role", "tablist")
            .with_attr("aria-label", self.options.view_label.clone());
        let mut container = Element::new("div").with_class("tabs");

        for (index, (tab, panel)) in self.tabs.iter().zip(&self.panels).enumerate() {
            let state = TabState::from_active(index == initial);
            nav.append(tab_button(index, tab, panel.id(), state));
            container.append(panel.render(&tab.button_id, state));
        }

        let root = Element::new("div")
            .with_class("tabbed-view")
            .with_child(nav)
            .with_child(container);

        self.active = initial;
        self.focus = None;

        tracing::info!(
            active = initial,
            tab_count = self.tabs.len(),
            "Rendered tabbed view"
        );

        self.root.insert(root)
    }

    fn initial_index(&self) -> usize {
        self.router
            .as_ref()
            .and_then(|router| router.current_fragment())
            .and_then(|fragment| self.urls.get(&fragment))
            .unwrap_or(0)
    }

    /// Resolve a selector to its tab. Pure lookup.
    pub fn resolve_tab_meta(&self, selector: &TabSelector) -> Option<TabMeta<'_>> {
        let index = self.resolve_index(selector)?;
        let tab = &self.tabs[index];

        Some(TabMeta {
            index,
            title: &tab.title,
            url: tab.url.as_deref(),
            panel_id: self.panels[index].id(),
            button: self.tab_button(index),
        })
    }

    fn resolve_index(&self, selector: &TabSelector) -> Option<usize> {
        match selector {
            TabSelector::ByIndex(index) if *index < self.tabs.len() => Some(*index),
            TabSelector::ByIndex(_) => None,
            TabSelector::ByUrl(url) => self.urls.get(url),
        }
    }

    pub fn active_tab(&self) -> TabMeta<'_> {
        let tab = &self.tabs[self.active];
        TabMeta {
            index: self.active,
            title: &tab.title,
            url: tab.url.as_deref(),
            panel_id: self.panels[self.active].id(),
            button: self.tab_button(self.active),
        }
    }

    /// Rendered button of tab `index`
    pub fn tab_button(&self, index: usize) -> Option<&Element> {
        let root = self.root.as_ref()?;
        let index = index.to_string();
        root.find(|el| el.has_class(TAB_CLASS) && el.data("index") == Some(index.as_str()))
    }

    /// Rendered panel of tab `index`
    pub fn panel_element(&self, index: usize) -> Option<&Element> {
        let panel_id = self.panels.get(index)?.id();
        self.root.as_ref()?.find_by_id(panel_id)
    }

    /// Make the selected tab active and move focus into its panel.
    ///
    /// A selector that resolves to nothing leaves the current tab active.
    /// With a router, the location is replaced first and router errors
    /// are returned without touching view state.
    pub fn activate_tab(&mut self, selector: impl Into<TabSelector>) -> Result<()> {
        let selector = selector.into();
        let index = self.resolve_index(&selector).ok_or_else(|| {
            tracing::warn!(selector = %selector, "Cannot activate unknown tab");
            TabError::NotFound(selector.to_string())
        })?;

        self.activate_index(index, self.options.focus_panel_on_activate)
    }

    fn activate_index(&mut self, index: usize, focus_panel: bool) -> Result<()> {
        let root = self.root.as_mut().ok_or(TabError::NotRendered)?;

        if let (Some(router), Some(url)) = (&self.router, self.tabs[index].url.as_deref()) {
            router.navigate(url, NavigateOptions::replace())?;
        }

        let previous = self.active;
        for (i, panel) in self.panels.iter().enumerate() {
            let state = TabState::from_active(i == index);
            let index_str = i.to_string();
            if let Some(button) = root.find_mut(|el| {
                el.has_class(TAB_CLASS) && el.data("index") == Some(index_str.as_str())
            }) {
                state.apply_to_tab(button);
            }
            if let Some(panel_el) = root.find_mut(|el| el.id() == Some(panel.id())) {
                state.apply_to_panel(panel_el);
            }
        }
        self.active = index;

        if focus_panel {
            self.focus = Some(FocusTarget::Panel(index));
        }

        tracing::debug!(from = previous, to = index, "Tab state transition");

        Ok(())
    }

    /// Move focus to a tab button without activating it.
    /// The focused button becomes the only one with `tabindex=0`.
    pub fn focus_tab(&mut self, index: usize) -> Result<()> {
        if index >= self.tabs.len() {
            return Err(TabError::NotFound(TabSelector::ByIndex(index).to_string()));
        }
        let root = self.root.as_mut().ok_or(TabError::NotRendered)?;

        let focused = index.to_string();
        root.for_each_mut(
            |el| el.has_class(TAB_CLASS),
            |button| {
                let tabindex = if button.data("index") == Some(focused.as_str()) { "0" } else { "-1" };
                button.set_attr("tabindex", tabindex);
            },
        );

        self.focus = Some(FocusTarget::Tab(index));
        tracing::debug!(index, "Tab focused");
        Ok(())
    }

    /// Route an event to the handler registered for its target
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<EventOutcome> {
        if !event.target().has_class(TAB_CLASS) {
            return Ok(EventOutcome::Propagate);
        }
        match event {
            UiEvent::Click(ev) => self.on_tab_click(ev),
            UiEvent::Keydown(ev) => self.on_tab_keydown(ev),
        }
    }

    /// Activate the clicked tab. The default action is always suppressed.
    pub fn on_tab_click(&mut self, event: &ClickEvent) -> Result<EventOutcome> {
        let index = self.target_index(&event.target)?;
        self.activate_index(index, self.options.focus_panel_on_activate)?;
        Ok(EventOutcome::Handled)
    }

    /// Roving focus across the tab strip
    pub fn on_tab_keydown(&mut self, event: &KeyboardEvent) -> Result<EventOutcome> {
        let action = KeyAction::resolve(event.key, event.modifiers);
        if action == KeyAction::Ignore {
            return Ok(EventOutcome::Propagate);
        }

        let index = self.target_index(&event.target)?;

        if action == KeyAction::Activate {
            self.activate_index(index, self.options.focus_panel_on_activate)?;
            return Ok(EventOutcome::Handled);
        }

        if let Some(next) = action.target(index, self.tabs.len()) {
            self.focus_tab(next)?;
            if self.options.activation == ActivationMode::Automatic {
                self.activate_index(next, false)?;
            }
        }

        Ok(EventOutcome::Handled)
    }

    fn target_index(&self, target: &EventTarget) -> Result<usize> {
        target
            .data("index")
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|index| *index < self.tabs.len())
            .ok_or_else(|| {
                tracing::warn!(data_index = ?target.data("index"), "Event target is not a known tab");
                TabError::NotFound(format!("event target {:?}", target.data("index")))
            })
    }
}

fn tab_button(index: usize, tab: &TabEntry, panel_id: &str, state: TabState) -> Element {
    let mut button = Element::new("button")
        .with_class(TAB_CLASS)
        .with_class("nav-item")
        .with_attr("type", "button")
        .with_attr("role", "tab")
        .with_attr("id", tab.button_id.clone())
        .with_attr("data-index", index.to_string())
        .with_attr("aria-controls", panel_id)
        .with_text(tab.title.clone());
    if let Some(url) = tab.url.as_deref() {
        button.set_attr("data-url", url);
    }
    state.apply_to_tab(&mut button);
    button
}
