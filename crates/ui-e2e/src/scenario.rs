// Scenario descriptors for data-driven suites
//
// A descriptor is a plain record: tag, case id, name, plus the inputs and the
// expected outcome of one case. The built-in tables cover the login and menu
// search suites; the serde derives let callers load extra cases from JSON.

use serde::{Deserialize, Serialize};

/// Error banner text OrangeHRM shows for rejected credentials
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Identity shared by every scenario kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInfo {
    pub tag: String,
    pub case_id: String,
    pub test_case_name: String,
}

impl ScenarioInfo {
    pub fn new(tag: &str, case_id: &str, test_case_name: &str) -> Self {
        Self {
            tag: tag.to_string(),
            case_id: case_id.to_string(),
            test_case_name: test_case_name.to_string(),
        }
    }
}

impl std::fmt::Display for ScenarioInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} - {}", self.tag, self.case_id, self.test_case_name)
    }
}

/// Credentials that must be rejected, and the banner expected for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginScenario {
    #[serde(flatten)]
    pub info: ScenarioInfo,
    pub username: String,
    pub password: String,
    pub expected_error: String,
}

/// A sidebar search and whether any module should remain listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchScenario {
    #[serde(flatten)]
    pub info: ScenarioInfo,
    /// Placeholder of the field typed into
    pub search_field: String,
    pub value: String,
    pub expect_results: bool,
    /// Module label that must stay visible when `expect_results` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_menu: Option<String>,
}

fn negative_login(case_id: &str, name: &str, username: &str, password: &str) -> LoginScenario {
    LoginScenario {
        info: ScenarioInfo::new("@login", case_id, name),
        username: username.to_string(),
        password: password.to_string(),
        expected_error: INVALID_CREDENTIALS.to_string(),
    }
}

/// Rejected-credential cases of the login suite.
pub fn negative_login_scenarios() -> Vec<LoginScenario> {
    let longest = "a".repeat(100);
    vec![
        negative_login("TC002", "Login with invalid username", "InvalidUser", "admin123"),
        negative_login("TC003", "Login with invalid password", "Admin", "wrongpassword"),
        negative_login(
            "TC008",
            "Login with SQL injection attempt",
            "' OR '1'='1",
            "' OR '1'='1",
        ),
        negative_login(
            "TC009",
            "Login with XSS attempt",
            r#"<script>alert("XSS")</script>"#,
            "admin123",
        ),
        negative_login(
            "TC010",
            "Login with special characters in username",
            "Admin@#$%",
            "admin123",
        ),
        negative_login(
            "TC011",
            "Login with maximum length credentials",
            &longest,
            &longest,
        ),
        negative_login("TC012", "Login with minimum length credentials", "A", "a"),
        negative_login(
            "TC013",
            "Login with spaces in credentials",
            " Admin ",
            " admin123 ",
        ),
    ]
}

fn search(case_id: &str, name: &str, value: &str, expected_menu: Option<&str>) -> SearchScenario {
    SearchScenario {
        info: ScenarioInfo::new("@search", case_id, name),
        search_field: "Search".to_string(),
        value: value.to_string(),
        expect_results: expected_menu.is_some(),
        expected_menu: expected_menu.map(str::to_string),
    }
}

/// Sidebar filter cases of the search suite.
pub fn search_scenarios() -> Vec<SearchScenario> {
    vec![
        search("TC001", "Search for Admin menu", "Admin", Some("Admin")),
        search("TC002", "Search for PIM menu", "PIM", Some("PIM")),
        search("TC003", "Search for non-existent menu", "NonExistentMenu", None),
        search("TC004", "Search with partial menu name", "Adm", Some("Admin")),
        search(
            "TC005",
            "Search with case-insensitive menu name",
            "admin",
            Some("Admin"),
        ),
        search("TC008", "Search with special characters", "!@#$%^&*()", None),
        search(
            "TC010",
            "Search with multiple menu items",
            "Admin PIM Leave",
            None,
        ),
    ]
}
