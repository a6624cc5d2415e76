// Settings - where the suites point and how the browser is launched
//
// Every value has a default matching the public demo targets, so the suites run
// with no configuration at all. Environment variables override single values:
//
//   E2E_BASE_URL         OrangeHRM origin (default: https://opensource-demo.orangehrmlive.com)
//   E2E_NOVEL_SITE_URL   novel-reading site (default: https://www.drxsw.com/)
//   E2E_BROWSER          chromium | firefox | webkit (default: chromium)
//   E2E_HEADLESS         true | false (default: true)
//   E2E_TIMEOUT_MS       action timeout in milliseconds (default: 10000)
//   E2E_USERNAME         demo username (default: Admin)
//   E2E_PASSWORD         demo password (default: admin123)

use crate::error::{Error, Result};
use crate::fixture::Credentials;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Public OrangeHRM demo instance
pub const DEFAULT_BASE_URL: &str = "https://opensource-demo.orangehrmlive.com";

/// Third-party novel-reading site used by the smoke suite
pub const DEFAULT_NOVEL_SITE_URL: &str = "https://www.drxsw.com/";

/// Default timeout for a single interaction or load-state wait
pub const DEFAULT_ACTION_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default timeout for page navigation
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_millis(30_000);

const LOGIN_PATH: &str = "web/index.php/auth/login";
const DASHBOARD_PATH: &str = "web/index.php/dashboard/index";

/// Browser engine to launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(Error::config(
                "E2E_BROWSER",
                format!("unknown browser '{}'", other),
            )),
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        };
        f.write_str(name)
    }
}

/// Suite settings.
///
/// Build with [`Settings::default`], [`Settings::from_env`], or the builder-style
/// setters when a test points the suites at a local server.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// OrangeHRM origin; login and dashboard URLs are derived from it
    pub base_url: Url,
    /// Entry page of the novel-reading site
    pub novel_site_url: Url,
    pub browser: BrowserKind,
    pub headless: bool,
    /// Applied to every action helper and load-state wait
    #[serde(rename = "action_timeout_ms", serialize_with = "millis")]
    pub action_timeout: Duration,
    #[serde(rename = "navigation_timeout_ms", serialize_with = "millis")]
    pub navigation_timeout: Duration,
    /// Credentials handed out by the `user_info` fixture
    #[serde(skip)]
    pub credentials: Credentials,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            novel_site_url: Url::parse(DEFAULT_NOVEL_SITE_URL)
                .expect("default novel site URL is valid"),
            browser: BrowserKind::default(),
            headless: true,
            action_timeout: DEFAULT_ACTION_TIMEOUT,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            credentials: Credentials::default(),
        }
    }
}

impl Settings {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`; keys it returns `None` for keep their default.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(value) = get("E2E_BASE_URL") {
            settings.base_url = parse_url("E2E_BASE_URL", &value)?;
        }
        if let Some(value) = get("E2E_NOVEL_SITE_URL") {
            settings.novel_site_url = parse_url("E2E_NOVEL_SITE_URL", &value)?;
        }
        if let Some(value) = get("E2E_BROWSER") {
            settings.browser = value.parse()?;
        }
        if let Some(value) = get("E2E_HEADLESS") {
            settings.headless = parse_bool("E2E_HEADLESS", &value)?;
        }
        if let Some(value) = get("E2E_TIMEOUT_MS") {
            let ms: u64 = value.trim().parse().map_err(|_| {
                Error::config(
                    "E2E_TIMEOUT_MS",
                    format!("expected milliseconds, got '{}'", value),
                )
            })?;
            settings.action_timeout = Duration::from_millis(ms);
        }
        if let Some(value) = get("E2E_USERNAME") {
            settings.credentials.username = value;
        }
        if let Some(value) = get("E2E_PASSWORD") {
            settings.credentials.password = value;
        }

        Ok(settings)
    }

    /// Points the OrangeHRM suites at another origin (e.g. a local replica).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_url("base_url", base_url)?;
        Ok(self)
    }

    /// Points the novel-site suite at another entry page.
    pub fn with_novel_site_url(mut self, url: &str) -> Result<Self> {
        self.novel_site_url = parse_url("novel_site_url", url)?;
        Ok(self)
    }

    pub fn with_action_timeout(mut self, timeout: Duration) -> Self {
        self.action_timeout = timeout;
        self
    }

    /// OrangeHRM login screen
    pub fn login_url(&self) -> String {
        self.join(LOGIN_PATH)
    }

    /// OrangeHRM dashboard, reached after a successful login
    pub fn dashboard_url(&self) -> String {
        self.join(DASHBOARD_PATH)
    }

    fn join(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{}/{}", base, path)
    }
}

fn millis<S>(value: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(value.as_millis() as u64)
}

fn parse_url(key: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value.trim())
        .map_err(|e| Error::config(key, format!("'{}' is not a URL: {}", value, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::config(
            key,
            format!("unsupported scheme '{}' in '{}'", scheme, value),
        )),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::config(
            key,
            format!("expected a boolean, got '{}'", value),
        )),
    }
}
