//! Navigation state machine.
//!
//! ```text
//!     List ──navigate_to_detail(id)──► Detail(id)
//!      ▲                                  │
//!      └──────────navigate_back───────────┘
//! ```
//!
//! The current route is always the top of the stack. `history` holds the
//! routes below it, oldest first, and is empty while the root is showing.

use std::mem;

use tracing::debug;

use contacts_types::{ContactId, Route};

/// Outcome of a navigation request.
///
/// Callers redraw only when something other than `Unchanged` comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Pushed { from: Route, to: Route },
    Popped { from: Route, to: Route },
    Unchanged,
}

impl NavEvent {
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: Route,
    history: Vec<Route>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Starts at the list route with nothing to go back to.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Route::List,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.current
    }

    /// Number of routes on the stack, including the current one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len() + 1
    }

    /// Pushes `detail(id)` and makes it current.
    ///
    /// The id is not checked against any dataset; a bad id surfaces when the
    /// detail screen looks it up.
    pub fn navigate_to_detail(&mut self, id: ContactId) -> NavEvent {
        self.push(Route::Detail(id))
    }

    /// Pops the current route. No-op at the root.
    pub fn navigate_back(&mut self) -> NavEvent {
        let Some(previous) = self.history.pop() else {
            debug!(route = %self.current, "Back at root ignored");
            return NavEvent::Unchanged;
        };
        let from = mem::replace(&mut self.current, previous);
        debug!(%from, to = %previous, depth = self.depth(), "Navigated back");
        NavEvent::Popped { from, to: previous }
    }

    fn push(&mut self, to: Route) -> NavEvent {
        let from = self.current;
        self.history.push(from);
        self.current = to;
        debug!(%from, %to, depth = self.depth(), "Navigated forward");
        NavEvent::Pushed { from, to }
    }
}
