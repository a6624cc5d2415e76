//! ui-e2e: page objects, fixtures and end-to-end UI suites on playwright-rs
//!
//! Covers the OrangeHRM login screen and dashboard, plus smoke checks of a
//! third-party novel-reading site. Test bodies request a prepared page from
//! the session fixture together with its [`Actions`], wrap the page in page
//! objects, drive it through the action helpers, and assert with `playwright_rs::expect` or this crate's
//! [`expect_page`] / [`expect_locator`].
//!
//! # Examples
//!
//! ## Authenticated session
//!
//! ```ignore
//! use ui_e2e::{Fixture, HomePage, Session, Settings, expect_page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env()?;
//!
//!     Session::run(&settings, Fixture::Authenticated, |page, actions| async move {
//!         expect_page(&page).to_have_url_regex(".*dashboard").await?;
//!
//!         let home = HomePage::new(&page).await;
//!         playwright_rs::expect(home.heading.clone()).to_be_visible().await?;
//!
//!         home.filter_menu(&actions, "Adm").await?;
//!         let admin = home.menu_locator("Admin");
//!         playwright_rs::expect(admin).to_have_text("Admin").await?;
//!         Ok(())
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Rejected login
//!
//! ```ignore
//! use ui_e2e::{Fixture, LoginPage, Session, Settings, expect_page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::default();
//!     let login_url = settings.login_url();
//!
//!     Session::run(&settings, Fixture::SignIn, |page, actions| async move {
//!         let login = LoginPage::new(&page).await;
//!         actions.login("InvalidUser", "admin123").await?;
//!
//!         playwright_rs::expect(login.error_message.clone()).to_be_visible().await?;
//!         expect_page(&page).to_have_url(&login_url).await?;
//!         Ok(())
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
mod assertions;
pub mod config;
mod error;
pub mod fixture;
pub mod pages;
pub mod scenario;
pub mod scope;
pub mod selectors;

// Re-export step helpers
pub use actions::{ActionTimeout, Actions, LoadState};

// Re-export error types
pub use error::{Error, Result};

// Re-export assertions API
pub use assertions::{LocatorExpectation, PageExpectation, expect_locator, expect_page};

// Re-export settings and fixtures
pub use config::{BrowserKind, Settings};
pub use fixture::{Credentials, Fixture, Session};

// Re-export page objects
pub use pages::{HOME_PAGE_MENU, HomePage, LoginPage, NovelSitePage, menu_ordinal};
pub use scope::Scope;
