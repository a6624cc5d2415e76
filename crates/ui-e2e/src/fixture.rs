// Session fixture - per-test browser session and prepared pages
//
// Every test gets its own Playwright server connection, browser and context;
// nothing is shared between tests. Three preparations mirror the fixtures the
// suites need:
//
// - Raw:           blank page
// - SignIn:        page navigated to the login screen
// - Authenticated: page after logging in with the session's credentials
//
// `Session::run` is the scoped form: acquire, prepare, run the body, and close
// the session on every exit path, including an error or a panic in the body.

use crate::actions::{ActionTimeout, Actions};
use crate::config::{BrowserKind, Settings};
use crate::error::Result;
use futures_util::FutureExt;
use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, GotoOptions, LaunchOptions, Page, Playwright,
};
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// Demo account of the public OrangeHRM instance
pub const DEMO_USERNAME: &str = "Admin";
pub const DEMO_PASSWORD: &str = "admin123";

/// Login credentials (the `user_info` fixture).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }
}

/// How the page handed to a test body is prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    Raw,
    SignIn,
    Authenticated,
}

/// One test's browser session.
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    page: Page,
    actions: Actions,
    settings: Settings,
}

impl Session {
    /// Launches a browser per `settings` and opens a fresh context and page.
    ///
    /// The page's [`Actions`] carry `settings.action_timeout`; other sessions
    /// keep their own.
    pub async fn launch(settings: &Settings) -> Result<Self> {
        let effective = serde_json::to_string(settings)?;
        tracing::info!(settings = %effective, "launching session");

        let playwright = Playwright::launch().await?;
        let browser_type = match settings.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let browser = browser_type
            .launch_with_options(LaunchOptions::new().headless(settings.headless))
            .await?;

        let mut options = BrowserContextOptions::builder();
        // Clipboard permission names are Chromium-only; other engines reject them
        if settings.browser == BrowserKind::Chromium {
            options = options.permissions(vec![
                "clipboard-read".to_string(),
                "clipboard-write".to_string(),
            ]);
        }
        let context = browser.new_context_with_options(options.build()).await?;
        let page = context.new_page().await?;
        let actions = Actions::new(&page, ActionTimeout::new(settings.action_timeout));

        Ok(Self {
            playwright,
            browser,
            context,
            page,
            actions,
            settings: settings.clone(),
        })
    }

    /// The session's page, as it currently is.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Step helpers bound to the page and this session's action timeout.
    pub fn actions(&self) -> &Actions {
        &self.actions
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Credentials configured for this session.
    pub fn user_info(&self) -> &Credentials {
        &self.settings.credentials
    }

    /// Navigates to the login screen and returns the page (not logged in).
    pub async fn sign_in(&self) -> Result<Page> {
        let url = self.settings.login_url();
        tracing::debug!(url = %url, "open login screen");
        self.page
            .goto(
                &url,
                Some(GotoOptions::new().timeout(self.settings.navigation_timeout)),
            )
            .await?;
        Ok(self.page.clone())
    }

    /// Navigates to the login screen, logs in with `credentials`, and returns the page.
    ///
    /// Does not verify the login succeeded.
    pub async fn authenticated(&self, credentials: &Credentials) -> Result<Page> {
        let page = self.sign_in().await?;
        self.actions
            .login(&credentials.username, &credentials.password)
            .await?;
        Ok(page)
    }

    /// Prepares the page per `fixture`. Dialogs are auto-dismissed in every case.
    pub async fn prepare(&self, fixture: Fixture) -> Result<Page> {
        self.actions.auto_dismiss_dialogs().await?;
        match fixture {
            Fixture::Raw => Ok(self.page.clone()),
            Fixture::SignIn => self.sign_in().await,
            Fixture::Authenticated => self.authenticated(self.user_info()).await,
        }
    }

    /// Closes context, browser and the Playwright server, in that order.
    ///
    /// Attempts every step; the first failure is returned.
    pub async fn close(self) -> Result<()> {
        let context = self.context.close().await;
        let browser = self.browser.close().await;
        let server = self.playwright.shutdown().await;
        tracing::info!("session closed");
        context?;
        browser?;
        server?;
        Ok(())
    }

    /// Runs `body` against a freshly prepared page and its [`Actions`], then
    /// closes the session.
    ///
    /// The session is closed whether the body returns `Ok`, `Err`, or panics.
    /// The body's outcome wins over a teardown failure, which is only logged.
    pub async fn run<F, Fut, T>(settings: &Settings, fixture: Fixture, body: F) -> Result<T>
    where
        F: FnOnce(Page, Actions) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let session = Session::launch(settings).await?;

        let outcome = match session.prepare(fixture).await {
            Ok(page) => {
                let actions = session.actions.clone();
                AssertUnwindSafe(body(page, actions)).catch_unwind().await
            }
            Err(e) => Ok(Err(e)),
        };

        if let Err(e) = session.close().await {
            tracing::warn!("session teardown failed: {}", e);
        }

        match outcome {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
