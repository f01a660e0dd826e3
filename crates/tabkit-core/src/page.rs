//! Tabbed page
//!
//! Shares one `TabbedView` between the host and the router's route handlers.

use parking_lot::RwLock;
use std::sync::Arc;

use tabkit_dom::{EventOutcome, UiEvent};
use tabkit_router::{HistoryRouter, NavigateOptions, Router};
use tabkit_tabs::{TabDescriptor, TabSelector, TabbedView};

use crate::config::Config;
use crate::Result;

pub struct TabbedPage {
    /// Configuration
    config: Config,
    /// The view, shared with route handlers
    view: Arc<RwLock<TabbedView>>,
    /// Location collaborator, if tabs are addressable by url
    router: Option<HistoryRouter>,
}

impl TabbedPage {
    /// Page without url integration
    pub fn new(config: Config, tabs: Vec<TabDescriptor>) -> Result<Self> {
        let view = TabbedView::new(tabs, config.view_options())?;

        Ok(Self {
            config,
            view: Arc::new(RwLock::new(view)),
            router: None,
        })
    }

    /// Page whose tabs follow the router's location.
    ///
    /// Registers a route for every tab url; each route activates its tab.
    /// Call `start` after `render` to sync with the current location.
    /// Until then tabs still switch, but the location is left alone.
    pub fn with_router(config: Config, tabs: Vec<TabDescriptor>, router: HistoryRouter) -> Result<Self> {
        let view = TabbedView::new(tabs, config.view_options())?
            .with_router(Arc::new(router.clone()));

        let urls: Vec<String> = (0..view.len())
            .filter_map(|index| {
                view.resolve_tab_meta(&TabSelector::ByIndex(index))
                    .and_then(|meta| meta.url.map(str::to_string))
            })
            .collect();

        let view = Arc::new(RwLock::new(view));

        // Handlers hold a weak handle; the view already owns the router
        for url in urls {
            let weak = Arc::downgrade(&view);
            let target = url.clone();
            router.route(&url, move |_| {
                let Some(view) = weak.upgrade() else {
                    return;
                };
                let result = view.write().activate_tab(target.as_str());
                if let Err(e) = result {
                    tracing::error!(url = %target, "Failed to activate tab from route: {}", e);
                }
            });
        }

        tracing::info!(label = %config.view_label, "Created routed tabbed page");

        Ok(Self {
            config,
            view,
            router: Some(router),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> Option<&HistoryRouter> {
        self.router.as_ref()
    }

    /// Render the view and return its HTML
    pub fn render(&self) -> String {
        self.view.write().render().to_html()
    }

    /// Start the router, activating the tab for the current location.
    /// Returns whether the location matched a tab.
    pub fn start(&self) -> bool {
        match &self.router {
            Some(router) => router.start(),
            None => false,
        }
    }

    pub fn activate_tab(&self, selector: impl Into<TabSelector>) -> Result<()> {
        Ok(self.view.write().activate_tab(selector)?)
    }

    pub fn dispatch(&self, event: &UiEvent) -> Result<EventOutcome> {
        Ok(self.view.write().dispatch(event)?)
    }

    /// Navigate as if the user followed a link to `fragment`
    pub fn navigate(&self, fragment: &str) -> Result<()> {
        if let Some(router) = &self.router {
            router.navigate(fragment, NavigateOptions::trigger())?;
        }
        Ok(())
    }

    pub fn back(&self) -> bool {
        self.router.as_ref().map(HistoryRouter::back).unwrap_or(false)
    }

    pub fn forward(&self) -> bool {
        self.router
            .as_ref()
            .map(HistoryRouter::forward)
            .unwrap_or(false)
    }

    pub fn active_index(&self) -> usize {
        self.view.read().active_index()
    }

    /// Run `f` with read access to the view
    pub fn with_view<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TabbedView) -> T,
    {
        let view = self.view.read();
        f(&*view)
    }
}

impl Clone for TabbedPage {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            view: Arc::clone(&self.view),
            router: self.router.clone(),
        }
    }
}
