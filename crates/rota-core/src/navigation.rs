//! Navigation seam for post-login routing.

/// Screen shown after a successful login.
pub const MAIN_SCREEN: &str = "Main";

/// Outbound navigation capability.
///
/// The store core never renders; it only signals the host shell where to
/// go next.
pub trait Navigator {
    /// Navigates to the named screen.
    fn navigate(&self, screen: &str);
}

/// Navigator that records the transition in the log stream.
///
/// Used by headless hosts (the CLI) where there is no screen stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, screen: &str) {
        tracing::info!(screen, "navigate");
    }
}
