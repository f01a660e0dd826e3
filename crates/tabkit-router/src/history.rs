//! In-memory history router

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::location::{normalize_fragment, Location};
use crate::router::{NavigateOptions, Router};
use crate::Result;

type RouteHandler = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub fragment: String,
    pub navigated_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(fragment: String) -> Self {
        Self {
            fragment,
            navigated_at: Utc::now(),
        }
    }
}

struct Route {
    fragment: String,
    handler: RouteHandler,
}

struct HistoryState {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    started: bool,
}

impl HistoryState {
    fn current(&self) -> &str {
        &self.entries[self.cursor].fragment
    }
}

pub struct HistoryRouter {
    /// Registered routes, most recent last
    routes: Arc<RwLock<Vec<Route>>>,
    /// Entries and cursor
    state: Arc<RwLock<HistoryState>>,
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self::at_fragment("")
    }

    /// Router whose initial location has the given fragment
    pub fn at_fragment(fragment: &str) -> Self {
        Self {
            routes: Arc::new(RwLock::new(Vec::new())),
            state: Arc::new(RwLock::new(HistoryState {
                entries: vec![HistoryEntry::new(normalize_fragment(fragment))],
                cursor: 0,
                started: false,
            })),
        }
    }

    /// Router whose initial location is a full URL
    pub fn with_location(href: &str) -> Result<Self> {
        let location = Location::parse(href)?;
        Ok(Self::at_fragment(location.fragment()))
    }

    /// Register a handler for an exact fragment.
    /// Later registrations win over earlier ones for the same fragment.
    pub fn route<F>(&self, fragment: &str, handler: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let fragment = normalize_fragment(fragment);
        tracing::debug!(fragment = %fragment, "Registered route");
        self.routes.write().push(Route {
            fragment,
            handler: Arc::new(handler),
        });
    }

    /// Start routing and run the handler for the current fragment.
    /// Returns whether a route matched.
    pub fn start(&self) -> bool {
        let fragment = {
            let mut state = self.state.write();
            if state.started {
                return false;
            }
            state.started = true;
            state.current().to_string()
        };

        tracing::info!(fragment = %fragment, "Router started");
        self.load(&fragment)
    }

    pub fn stop(&self) {
        self.state.write().started = false;
    }

    pub fn is_started(&self) -> bool {
        self.state.read().started
    }

    /// Step back one entry and run its handler
    pub fn back(&self) -> bool {
        let fragment = {
            let mut state = self.state.write();
            if !state.started || state.cursor == 0 {
                return false;
            }
            state.cursor -= 1;
            state.current().to_string()
        };

        tracing::debug!(fragment = %fragment, "History back");
        self.load(&fragment);
        true
    }

    /// Step forward one entry and run its handler
    pub fn forward(&self) -> bool {
        let fragment = {
            let mut state = self.state.write();
            if !state.started || state.cursor + 1 >= state.entries.len() {
                return false;
            }
            state.cursor += 1;
            state.current().to_string()
        };

        tracing::debug!(fragment = %fragment, "History forward");
        self.load(&fragment);
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.state.read().cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let state = self.state.read();
        state.cursor + 1 < state.entries.len()
    }

    /// Snapshot of all entries, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state.read().entries.clone()
    }

    /// Number of history entries
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Run the handler registered for `fragment`.
    /// No lock is held while the handler runs, so it may navigate again.
    fn load(&self, fragment: &str) -> bool {
        let handler = self
            .routes
            .read()
            .iter()
            .rev()
            .find(|route| route.fragment == fragment)
            .map(|route| Arc::clone(&route.handler));

        match handler {
            Some(handler) => {
                handler(fragment);
                true
            }
            None => {
                tracing::debug!(fragment = %fragment, "No route for fragment");
                false
            }
        }
    }
}

impl Router for HistoryRouter {
    fn navigate(&self, fragment: &str, options: NavigateOptions) -> Result<()> {
        let fragment = normalize_fragment(fragment);

        {
            let mut state = self.state.write();
            if !state.started {
                tracing::debug!(fragment = %fragment, "Router not started, ignoring navigation");
                return Ok(());
            }
            if state.current() == fragment {
                return Ok(());
            }

            if options.replace {
                let cursor = state.cursor;
                state.entries[cursor] = HistoryEntry::new(fragment.clone());
            } else {
                let keep = state.cursor + 1;
                state.entries.truncate(keep);
                state.entries.push(HistoryEntry::new(fragment.clone()));
                state.cursor += 1;
            }
        }

        tracing::debug!(
            fragment = %fragment,
            replace = options.replace,
            trigger = options.trigger,
            "Navigated"
        );

        if options.trigger {
            self.load(&fragment);
        }

        Ok(())
    }

    fn current_fragment(&self) -> Option<String> {
        Some(self.state.read().current().to_string())
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HistoryRouter {
    fn clone(&self) -> Self {
        Self {
            routes: Arc::clone(&self.routes),
            state: Arc::clone(&self.state),
        }
    }
}
