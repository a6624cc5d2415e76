// Assertions - auto-retrying checks playwright-rs's expect() does not cover
//
// Page-level URL/title assertions and locator count/attribute assertions.
// Same model as playwright_rs::expect: poll until the condition holds or the
// timeout elapses, with `.not()` negation and per-assertion timeouts.
//
// See: https://playwright.dev/docs/test-assertions

use crate::error::{Error, Result};
use playwright_rs::{Locator, Page};
use regex::Regex;
use std::future::Future;
use std::time::{Duration, Instant};

/// Default timeout for assertions (5 seconds, matching Playwright)
const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for assertions (100ms)
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Creates an expectation on page state (URL, title).
///
/// ```ignore
/// expect_page(&page).to_have_url_regex(".*dashboard").await?;
/// expect_page(&page).to_have_url(&settings.login_url()).await?;
/// ```
pub fn expect_page(page: &Page) -> PageExpectation {
    PageExpectation {
        page: page.clone(),
        retry: Retry::default(),
    }
}

/// Creates an expectation on a locator's match count or attributes.
///
/// ```ignore
/// expect_locator(&login.required_messages).to_have_count(2).await?;
/// expect_locator(&login.password).to_have_attribute("type", "password").await?;
/// ```
pub fn expect_locator(locator: &Locator) -> LocatorExpectation {
    LocatorExpectation {
        locator: locator.clone(),
        retry: Retry::default(),
    }
}

#[derive(Debug, Clone, Copy)]
struct Retry {
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

impl Default for Retry {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_ASSERTION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            negate: false,
        }
    }
}

impl Retry {
    /// Polls `check` until its verdict (after negation) is true.
    ///
    /// `check` yields whether the positive condition holds and a rendering of
    /// the observed value for the failure message.
    async fn until<F, Fut>(self, subject: &str, predicate: &str, mut check: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(bool, String)>>,
    {
        let start = Instant::now();

        loop {
            let (holds, actual) = check().await?;

            if holds != self.negate {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected {} NOT {}, but it did after {:?}",
                        subject, predicate, self.timeout
                    )
                } else {
                    format!(
                        "Expected {} {}, but was {} after {:?}",
                        subject, predicate, actual, self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Expectation on page-level state.
pub struct PageExpectation {
    page: Page,
    retry: Retry,
}

// to_* methods consume self, matching playwright_rs::Expectation
#[allow(clippy::wrong_self_convention)]
impl PageExpectation {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.retry.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.retry.poll_interval = interval;
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.retry.negate = true;
        self
    }

    /// Asserts the page URL equals `expected`.
    pub async fn to_have_url(self, expected: &str) -> Result<()> {
        let page = &self.page;
        self.retry
            .until("page", &format!("to have URL '{}'", expected), move || async move {
                let actual = current_url(page).await;
                Ok((actual == expected, format!("'{}'", actual)))
            })
            .await
    }

    /// Asserts the page URL matches `pattern` (unanchored, like a JS regex test).
    pub async fn to_have_url_regex(self, pattern: &str) -> Result<()> {
        let re = &compile(pattern)?;
        let page = &self.page;
        self.retry
            .until("page URL", &format!("to match '{}'", pattern), move || async move {
                let actual = current_url(page).await;
                Ok((re.is_match(&actual), format!("'{}'", actual)))
            })
            .await
    }

    /// Asserts the document title matches `pattern`.
    pub async fn to_have_title_regex(self, pattern: &str) -> Result<()> {
        let re = &compile(pattern)?;
        let page = &self.page;
        self.retry
            .until("page title", &format!("to match '{}'", pattern), move || async move {
                let actual = page.title().await.unwrap_or_default();
                Ok((re.is_match(&actual), format!("'{}'", actual)))
            })
            .await
    }
}

/// URL of the committed document.
///
/// Read from the page itself so navigations started by scripts are seen; an
/// empty string while the document is being replaced.
async fn current_url(page: &Page) -> String {
    match page
        .evaluate::<(), String>("window.location.href", None)
        .await
    {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("location read failed: {}", e);
            String::new()
        }
    }
}

/// Expectation on what a locator matches.
pub struct LocatorExpectation {
    locator: Locator,
    retry: Retry,
}

#[allow(clippy::wrong_self_convention)]
impl LocatorExpectation {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.retry.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.retry.poll_interval = interval;
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.retry.negate = true;
        self
    }

    /// Asserts the locator matches exactly `expected` elements.
    pub async fn to_have_count(self, expected: usize) -> Result<()> {
        let locator = &self.locator;
        let subject = format!("'{}'", locator.selector());
        self.retry
            .until(&subject, &format!("to have count {}", expected), move || async move {
                let count = locator.count().await?;
                Ok((count == expected, count.to_string()))
            })
            .await
    }

    /// Asserts the locator matches more than `floor` elements.
    pub async fn to_have_count_greater_than(self, floor: usize) -> Result<()> {
        let locator = &self.locator;
        let subject = format!("'{}'", locator.selector());
        self.retry
            .until(
                &subject,
                &format!("to have count greater than {}", floor),
                move || async move {
                    let count = locator.count().await?;
                    Ok((count > floor, count.to_string()))
                },
            )
            .await
    }

    /// Asserts the element's `name` attribute equals `expected`.
    pub async fn to_have_attribute(self, name: &str, expected: &str) -> Result<()> {
        let locator = &self.locator;
        let subject = format!("'{}'", locator.selector());
        self.retry
            .until(
                &subject,
                &format!("to have attribute {}='{}'", name, expected),
                move || async move {
                    let value = locator.get_attribute(name).await?;
                    let rendered = match &value {
                        Some(v) => format!("'{}'", v),
                        None => "absent".to_string(),
                    };
                    Ok((value.as_deref() == Some(expected), rendered))
                },
            )
            .await
    }
}
