// OrangeHRM dashboard (home) screen
//
// The sidebar lists a fixed set of modules. HOME_PAGE_MENU records each label's
// 1-based position so a menu entry can be located structurally with
// `li:nth-child(n)`, independent of its text.

use crate::actions::{Actions, LoadState};
use crate::error::Result;
use crate::scope::Scope;
use crate::selectors;
use playwright_rs::Locator;

/// Sidebar label -> 1-based position. Labels are unique.
pub const HOME_PAGE_MENU: &[(&str, u32)] = &[
    ("Admin", 1),
    ("PIM", 2),
    ("Leave", 3),
    ("Time", 4),
    ("Recruitment", 5),
    ("My Info", 6),
    ("Performance", 7),
    ("Dashboard", 8),
    ("Directory", 9),
    ("Maintenance", 10),
    ("Claim", 11),
    ("Buzz", 12),
];

/// Position of `name` in the sidebar, or `None` for an unknown label.
pub fn menu_ordinal(name: &str) -> Option<u32> {
    ordinal_in(HOME_PAGE_MENU, name)
}

// Presence decides "found"; any stored value, 0 included, is returned as-is.
fn ordinal_in(table: &[(&str, u32)], name: &str) -> Option<u32> {
    table
        .iter()
        .find(|(label, _)| *label == name)
        .map(|&(_, ordinal)| ordinal)
}

/// Sidebar labels in display order.
pub fn menu_names() -> impl Iterator<Item = &'static str> {
    HOME_PAGE_MENU.iter().map(|&(label, _)| label)
}

/// Locators on the dashboard.
#[derive(Clone)]
pub struct HomePage {
    /// The scope the page object was built against
    root: Locator,
    pub search_field: Locator,
    pub search_button: Locator,
    pub search_results: Locator,
    /// Every sidebar entry label
    pub search_list: Locator,
    pub heading: Locator,
    pub profile_picture: Locator,
}

impl HomePage {
    pub async fn new(scope: &impl Scope) -> Self {
        Self {
            root: scope.locate(":scope").await,
            search_field: scope.locate(r#"input[placeholder="Search"]"#).await,
            search_button: scope.locate(r#"button[type="submit"]"#).await,
            search_results: scope.locate(".search-results").await,
            search_list: scope.locate(selectors::SIDEBAR_MENU_ITEM).await,
            heading: scope
                .locate(&selectors::by_role("heading", Some("Dashboard")))
                .await,
            profile_picture: scope
                .locate(&selectors::by_role("img", Some("profile picture")))
                .await,
        }
    }

    /// Sidebar entry whose label is exactly `name`.
    ///
    /// Any label yields a locator; whether it matches anything is up to the DOM.
    pub fn menu_locator(&self, name: &str) -> Locator {
        self.root.locator(&selectors::menu_span_text(name))
    }

    /// Sidebar entry at the position [`HOME_PAGE_MENU`] records for `name`.
    ///
    /// `None` when `name` is not a known label.
    pub fn menu_locator_by_name(&self, name: &str) -> Option<Locator> {
        let ordinal = menu_ordinal(name)?;
        Some(self.root.locator(&selectors::nth_menu_item(ordinal)))
    }

    /// Fills the search field and clicks the search button.
    pub async fn search_for(&self, actions: &Actions, value: &str) -> Result<()> {
        let timeout = actions.timeout();
        self.search_field
            .fill(value, Some(timeout.fill_options()))
            .await?;
        self.search_button
            .click(Some(timeout.click_options()))
            .await?;
        Ok(())
    }

    /// Filters the sidebar: fill, press Enter, wait for the network to settle.
    pub async fn filter_menu(&self, actions: &Actions, value: &str) -> Result<()> {
        tracing::debug!(value, "filter sidebar");
        let timeout = actions.timeout();
        self.search_field
            .fill(value, Some(timeout.fill_options()))
            .await?;
        self.search_field
            .press("Enter", Some(timeout.press_options()))
            .await?;
        actions.wait_for_load_state(LoadState::NetworkIdle).await
    }
}
