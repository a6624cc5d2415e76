// Page objects - one struct of named locators per screen
//
// Constructors take the page (or a Scope) and build every locator up front.
// Locators are lazy, so construction never touches the DOM.

pub mod home;
pub mod login;
pub mod novel;

pub use home::{HOME_PAGE_MENU, HomePage, menu_names, menu_ordinal};
pub use login::LoginPage;
pub use novel::NovelSitePage;
