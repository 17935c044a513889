//! Route navigation

use serde_json::Value;
use svrdash_core::Result;
use tracing::debug;

/// Navigation sink trait. The router itself lives with the UI host; this
/// is the seam the service layer talks through.
pub trait Navigator: Send + Sync {
    /// Navigate to a route
    fn navigate(&self, route: &str) -> Result<()>;

    /// Navigate to a route, attaching a state payload
    fn navigate_with_state(&self, route: &str, state: Value) -> Result<()>;
}

/// Forward to the navigation sink. A missing `state` performs a stateless
/// navigation rather than attaching an empty payload.
pub fn redirect_to(navigator: &dyn Navigator, route: &str, state: Option<Value>) -> Result<()> {
    match state {
        None => navigator.navigate(route),
        Some(payload) => navigator.navigate_with_state(route, payload),
    }
}

/// Headless sink logging navigations instead of performing them
#[derive(Debug, Clone, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) -> Result<()> {
        debug!(route = %route, "Navigating");
        Ok(())
    }

    fn navigate_with_state(&self, route: &str, state: Value) -> Result<()> {
        debug!(route = %route, state = %state, "Navigating with state");
        Ok(())
    }
}
