// Scope - anything page objects can build locators against
//
// A page object is bound to one page at construction. Some screens are built
// against a container instead (e.g. the novel list), so factories take a
// Scope rather than a concrete Page.

use async_trait::async_trait;
use playwright_rs::{Locator, Page};

/// Capability to create locators rooted at a page or an element.
#[async_trait]
pub trait Scope: Send + Sync {
    /// Locator for `selector` resolved inside this scope.
    ///
    /// Nothing is queried here; resolution happens when the locator is used.
    async fn locate(&self, selector: &str) -> Locator;
}

#[async_trait]
impl Scope for Page {
    async fn locate(&self, selector: &str) -> Locator {
        Page::locator(self, selector).await
    }
}

#[async_trait]
impl Scope for Locator {
    async fn locate(&self, selector: &str) -> Locator {
        Locator::locator(self, selector)
    }
}
