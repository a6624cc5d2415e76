// Selectors - pure builders for the selector strings page objects use
//
// Two families:
// - Exact-text XPath matchers (`p_text`, `div_text`, ...). The value is
//   interpolated as-is: a value containing `'` produces a malformed XPath that
//   the engine rejects when the locator is used.
// - `by_*` builders emitting the `internal:` selectors Playwright's getBy*
//   locators resolve to. Values are quoted and matched as case-insensitive
//   substrings, the non-exact getBy* behavior.
//
// See: https://playwright.dev/docs/other-locators#xpath-locator

/// Sidebar menu entry at a 1-based position.
pub const SIDEBAR_MENU_ITEM: &str = "div.oxd-sidepanel-body li:nth-child(n) span";

/// `//p[text()='value']`
pub fn p_text(value: &str) -> String {
    tag_text("p", value)
}

/// `//div[text()='value']`
pub fn div_text(value: &str) -> String {
    tag_text("div", value)
}

/// `//span[text()='value']`
pub fn span_text(value: &str) -> String {
    tag_text("span", value)
}

/// Sidebar label: a `span` directly inside a link, `//a/span[text()='value']`
pub fn menu_span_text(value: &str) -> String {
    format!("//a/span[text()='{}']", value)
}

fn tag_text(tag: &str, value: &str) -> String {
    format!("//{}[text()='{}']", tag, value)
}

/// Sidebar entry at `ordinal` (1-based, as CSS `nth-child` counts).
pub fn nth_menu_item(ordinal: u32) -> String {
    SIDEBAR_MENU_ITEM.replacen("(n)", &format!("({})", ordinal), 1)
}

/// Element with ARIA `role`, optionally filtered by accessible name.
///
/// ```ignore
/// assert_eq!(by_role("button", Some("Login")), r#"internal:role=button[name="Login"i]"#);
/// ```
pub fn by_role(role: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!(
            "internal:role={}[name={}]",
            role,
            escape_for_attribute_selector(name)
        ),
        None => format!("internal:role={}", role),
    }
}

/// Input whose placeholder contains `text`.
pub fn by_placeholder(text: &str) -> String {
    format!(
        "internal:attr=[placeholder={}]",
        escape_for_attribute_selector(text)
    )
}

/// Smallest elements whose text contains `text`.
pub fn by_text(text: &str) -> String {
    format!("internal:text={}", escape_for_text_selector(text))
}

fn escape_for_attribute_selector(value: &str) -> String {
    format!(
        "\"{}\"i",
        value.replace('\\', "\\\\").replace('"', "\\\"")
    )
}

fn escape_for_text_selector(value: &str) -> String {
    // JSON string literal, same quoting the text engine parses
    format!("{}i", serde_json::Value::String(value.to_string()))
}
