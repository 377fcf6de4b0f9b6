use acks_core::User;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

/// Which admin page a cell is being rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Multi-row grid
    List,
    /// Single-row details page
    Details,
}

impl RenderMode {
    pub fn is_details(self) -> bool {
        self == RenderMode::Details
    }
}

/// Produces list URLs with one filter changed
pub trait QueryModifier {
    /// URL of the current list with `flt_{column}_{operation}` set to `value`
    fn with_filter(&self, column: &str, operation: &str, value: &str) -> String;
}

/// Capabilities the hosting admin site lends to formatters
pub trait AdminView {
    /// Build a URL for a named endpoint; parameters become the query string
    fn url_for(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String>;

    /// Resolve a user id stored on a payment record
    fn user(&self, id: &str) -> Option<&User>;
}

/// Per-render state handed to every formatter
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub mode: RenderMode,
    /// Reference instant for relative timestamps
    pub now: DateTime<Utc>,
    pub query: &'a dyn QueryModifier,
}

impl<'a> RenderContext<'a> {
    pub fn new(mode: RenderMode, query: &'a dyn QueryModifier) -> Self {
        Self {
            mode,
            now: Utc::now(),
            query,
        }
    }

    /// Pin the clock, e.g. for reproducible output
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn is_details(&self) -> bool {
        self.mode.is_details()
    }
}
