// Actions - step helpers shared by the suites
//
// Each helper is locate -> interact -> (optionally) wait. None of them retry:
// the first failure is returned and the test stops there.

use crate::config::DEFAULT_ACTION_TIMEOUT;
use crate::error::{Error, Result};
use crate::selectors;
use playwright_rs::{ClickOptions, FillOptions, Locator, Page, PressOptions};
use std::time::{Duration, Instant};
use tracing::Instrument;

/// Interval between load-state checks
const LOAD_STATE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long the resource count must stay flat to call the network idle
const NETWORK_IDLE_QUIET: Duration = Duration::from_millis(500);

/// Identifies the committed document: its URL and when it started loading.
const DOCUMENT_IDENTITY: &str = "[window.location.href, performance.timeOrigin]";

/// Per-session action timeout, turned into the option structs Playwright takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTimeout(Duration);

impl ActionTimeout {
    pub fn new(timeout: Duration) -> Self {
        Self(timeout)
    }

    pub fn duration(self) -> Duration {
        self.0
    }

    fn as_millis_f64(self) -> f64 {
        self.0.as_millis() as f64
    }

    pub(crate) fn click_options(self) -> ClickOptions {
        ClickOptions::builder().timeout(self.as_millis_f64()).build()
    }

    pub(crate) fn fill_options(self) -> FillOptions {
        FillOptions::builder().timeout(self.as_millis_f64()).build()
    }

    pub(crate) fn press_options(self) -> PressOptions {
        PressOptions::builder().timeout(self.as_millis_f64()).build()
    }
}

impl Default for ActionTimeout {
    fn default() -> Self {
        Self(DEFAULT_ACTION_TIMEOUT)
    }
}

/// Document readiness a helper can wait for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// `DOMContentLoaded` has fired
    DomContentLoaded,
    /// The `load` event has fired
    Load,
    /// Loaded, and no new resource requests for 500ms
    NetworkIdle,
}

impl LoadState {
    fn as_str(self) -> &'static str {
        match self {
            LoadState::DomContentLoaded => "domcontentloaded",
            LoadState::Load => "load",
            LoadState::NetworkIdle => "networkidle",
        }
    }
}

/// Step helpers for one page.
///
/// Owned by the session that opened the page and carries that session's
/// action timeout; sessions never see each other's settings.
#[derive(Clone)]
pub struct Actions {
    page: Page,
    timeout: ActionTimeout,
}

impl Actions {
    pub fn new(page: &Page, timeout: ActionTimeout) -> Self {
        Self {
            page: page.clone(),
            timeout,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Timeout applied to every interaction and wait of these helpers.
    pub fn timeout(&self) -> ActionTimeout {
        self.timeout
    }

    /// Types `value` into the input with the given placeholder.
    ///
    /// Clicks the input first, then fills it and waits for DOMContentLoaded.
    /// Filling replaces the current value, so repeating the call is a no-op.
    pub async fn search(&self, placeholder: &str, value: &str) -> Result<()> {
        tracing::debug!(placeholder, value, "search");
        let input = self
            .page
            .locator(&selectors::by_placeholder(placeholder))
            .await;
        input.click(Some(self.timeout.click_options())).await?;
        input.fill(value, Some(self.timeout.fill_options())).await?;
        self.wait_for_load_state(LoadState::DomContentLoaded).await
    }

    /// Clicks `locator` to focus it, then fills it with `value`.
    pub async fn fill_text(&self, locator: &Locator, value: &str) -> Result<()> {
        tracing::debug!(selector = locator.selector(), "fill");
        locator.click(Some(self.timeout.click_options())).await?;
        locator.fill(value, Some(self.timeout.fill_options())).await?;
        Ok(())
    }

    /// Clicks the button whose accessible name is `name`, then waits for DOMContentLoaded.
    pub async fn click_button_by_name(&self, name: &str) -> Result<()> {
        tracing::debug!(button = name, "click");
        self.page
            .locator(&selectors::by_role("button", Some(name)))
            .await
            .click(Some(self.timeout.click_options()))
            .await?;
        self.wait_for_load_state(LoadState::DomContentLoaded).await
    }

    /// Submits the OrangeHRM login form.
    ///
    /// Does not check the outcome: callers assert the URL or the error banner.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        async {
            let field = self
                .page
                .locator(&selectors::by_role("textbox", Some("Username")))
                .await;
            self.fill_text(&field, username).await
        }
        .instrument(tracing::info_span!("step", name = "Enter user name"))
        .await?;

        async {
            let field = self
                .page
                .locator(&selectors::by_role("textbox", Some("Password")))
                .await;
            self.fill_text(&field, password).await
        }
        .instrument(tracing::info_span!("step", name = "Enter password"))
        .await?;

        self.click_button_by_name("Login")
            .instrument(tracing::info_span!("step", name = "Click on Login button"))
            .await
    }

    /// Dismisses every dialog the page opens from now on.
    pub async fn auto_dismiss_dialogs(&self) -> Result<()> {
        self.page
            .on_dialog(|dialog| async move {
                tracing::info!("Dismissing dialog: {}", dialog.message());
                dialog.dismiss().await
            })
            .await?;
        Ok(())
    }

    /// Waits until the current document reaches `state`.
    ///
    /// Returns immediately if it already has. Checks that fail because the
    /// document is being replaced count as "not yet".
    pub async fn wait_for_load_state(&self, state: LoadState) -> Result<()> {
        let timeout = self.timeout.duration();
        let start = Instant::now();
        let mut resource_count: Option<u64> = None;
        let mut quiet_since = Instant::now();

        loop {
            let reached = match self
                .page
                .evaluate::<(), String>("document.readyState", None)
                .await
            {
                Ok(ready) => match state {
                    LoadState::DomContentLoaded => ready != "loading",
                    LoadState::Load => ready == "complete",
                    LoadState::NetworkIdle if ready == "complete" => {
                        let count = self
                            .page
                            .evaluate::<(), u64>(
                                "performance.getEntriesByType('resource').length",
                                None,
                            )
                            .await
                            .ok();
                        if count.is_none() || count != resource_count {
                            resource_count = count;
                            quiet_since = Instant::now();
                        }
                        quiet_since.elapsed() >= NETWORK_IDLE_QUIET
                    }
                    LoadState::NetworkIdle => false,
                },
                Err(e) => {
                    tracing::debug!("readyState check failed, retrying: {}", e);
                    false
                }
            };

            if reached {
                return Ok(());
            }

            if start.elapsed() >= timeout {
                return Err(Error::LoadStateTimeout {
                    state: state.as_str().to_string(),
                    duration_ms: timeout.as_millis() as u64,
                });
            }

            tokio::time::sleep(LOAD_STATE_POLL_INTERVAL).await;
        }
    }

    /// Navigates one entry back in session history.
    ///
    /// Returns once a different document (or a different URL of the same
    /// document) is committed and has reached DOMContentLoaded. With no
    /// previous entry nothing changes and the call times out.
    pub async fn go_back(&self) -> Result<()> {
        let before = self.document_identity().await?;
        tracing::debug!(url = %before.0, "history back");
        self.page.evaluate_expression("history.back()").await?;

        let timeout = self.timeout.duration();
        let start = Instant::now();
        loop {
            match self.document_identity().await {
                Ok(current) if current != before => break,
                Ok(_) => {}
                Err(e) => tracing::debug!("document check failed, retrying: {}", e),
            }
            if start.elapsed() >= timeout {
                return Err(Error::HistoryTimeout {
                    from: before.0,
                    duration_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(LOAD_STATE_POLL_INTERVAL).await;
        }

        self.wait_for_load_state(LoadState::DomContentLoaded).await
    }

    async fn document_identity(&self) -> Result<(String, f64)> {
        Ok(self
            .page
            .evaluate::<(), (String, f64)>(DOCUMENT_IDENTITY, None)
            .await?)
    }

    /// Puts `text` on the clipboard, focuses `locator` and pastes with Ctrl/Cmd+V.
    ///
    /// Needs clipboard permissions on the context (granted by the session
    /// fixture on Chromium).
    pub async fn paste_text(&self, locator: &Locator, text: &str) -> Result<()> {
        self.page
            .evaluate::<String, ()>(
                "async (text) => { await navigator.clipboard.writeText(text); }",
                Some(&text.to_string()),
            )
            .await?;
        locator.click(Some(self.timeout.click_options())).await?;
        self.page.keyboard().press("ControlOrMeta+V", None).await?;
        Ok(())
    }
}

/// Fixed pause. Prefer an assertion or a load-state wait.
pub async fn wait_for_timeout(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Guard for opportunistic checks: visible right now, without waiting.
///
/// A failed query counts as not visible.
pub async fn is_visible_now(locator: &Locator) -> bool {
    match locator.is_visible().await {
        Ok(visible) => visible,
        Err(e) => {
            tracing::debug!(selector = locator.selector(), "visibility check failed: {}", e);
            false
        }
    }
}
