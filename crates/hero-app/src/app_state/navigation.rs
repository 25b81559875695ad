//! Desktop navigation: hand the target URL to the system browser.

use hero_scene::Navigator;

#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => tracing::info!(url, "Opened target in browser"),
            Err(e) => tracing::error!(url, error = %e, "Failed to open browser"),
        }
    }
}
