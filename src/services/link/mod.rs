// Link opening capability
// Fire-and-forget navigation to external URLs

use std::io;

#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener: Send + Sync {
    /// Opens `url` externally. Failures are logged, never returned.
    fn open(&self, url: &str);
}

/// Opens links in the system's default browser.
#[derive(Debug, Clone, Copy)]
pub struct BrowserLinkOpener {
    launch: fn(&str) -> io::Result<()>,
}

impl BrowserLinkOpener {
    pub fn new() -> Self {
        Self::with_launcher(webbrowser::open)
    }

    /// Uses `launch` in place of the system browser.
    pub fn with_launcher(launch: fn(&str) -> io::Result<()>) -> Self {
        Self { launch }
    }
}

impl Default for BrowserLinkOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkOpener for BrowserLinkOpener {
    fn open(&self, url: &str) {
        let url = url.to_string();
        let launch = self.launch;
        let open_in_browser = move || {
            if let Err(e) = launch(&url) {
                log::warn!("Failed to open link {}: {}", url, e);
            }
        };

        // the launcher blocks until the browser process returns
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(open_in_browser);
            }
            Err(_) => open_in_browser(),
        }
    }
}

/// Records links instead of opening them. Used by headless runs.
#[derive(Debug, Default)]
pub struct LoggingLinkOpener;

impl LinkOpener for LoggingLinkOpener {
    fn open(&self, url: &str) {
        log::info!("Link requested: {}", url);
    }
}
