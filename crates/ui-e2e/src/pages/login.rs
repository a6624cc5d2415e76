// OrangeHRM login screen

use crate::error::Result;
use crate::fixture::Credentials;
use crate::scope::Scope;
use crate::selectors;
use playwright_rs::Locator;

/// Label preceding the demo username in the hint box
const ACCOUNT_HINT_PREFIX: &str = "Username : ";

/// Label preceding the demo password in the hint box
const PASSWORD_HINT_PREFIX: &str = "Password : ";

/// Locators on the login screen.
///
/// Built once per page; every locator is resolved against the live DOM when used.
#[derive(Clone)]
pub struct LoginPage {
    pub username: Locator,
    pub password: Locator,
    pub login_button: Locator,
    /// Banner shown after rejected credentials
    pub error_message: Locator,
    /// Hint paragraph "Username : Admin"
    pub page_account: Locator,
    /// Hint paragraph "Password : admin123"
    pub page_password: Locator,
    pub remember_me: Locator,
    pub branding: Locator,
    /// Per-field "Required" validation messages
    pub required_messages: Locator,
}

impl LoginPage {
    pub async fn new(scope: &impl Scope) -> Self {
        Self {
            username: scope.locate("[name=username]").await,
            password: scope.locate("[name=password]").await,
            login_button: scope.locate("button[type=submit]").await,
            error_message: scope.locate(".oxd-alert-content-text").await,
            page_account: scope
                .locate("div.orangehrm-login-form >div p:nth-child(1)")
                .await,
            page_password: scope
                .locate("div.orangehrm-login-form > div p:nth-child(2)")
                .await,
            remember_me: scope.locate(&selectors::by_role("checkbox", None)).await,
            branding: scope
                .locate(&selectors::by_role("img", Some("company-branding")))
                .await,
            required_messages: scope.locate(&selectors::by_text("Required")).await,
        }
    }

    /// Reads the demo credentials printed in the hint box.
    pub async fn demo_credentials(&self) -> Result<Credentials> {
        let account = self.page_account.text_content().await?;
        let password = self.page_password.text_content().await?;
        Ok(Credentials {
            username: hint_value(account.as_deref(), ACCOUNT_HINT_PREFIX),
            password: hint_value(password.as_deref(), PASSWORD_HINT_PREFIX),
        })
    }
}

/// Text after `prefix`, trimmed; empty when the text or the prefix is missing.
fn hint_value(text: Option<&str>, prefix: &str) -> String {
    text.and_then(|t| t.split(prefix).nth(1))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}
