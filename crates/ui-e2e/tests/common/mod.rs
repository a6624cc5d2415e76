// Shared helpers for the integration suites
//
// Each test binary compiles this module separately; not every binary uses
// every helper.
#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;
use ui_e2e::Settings;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once per binary. Filter with RUST_LOG.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Settings pointing both sites at a local server.
///
/// The OrangeHRM replica lives at the server root, the novel site under `/novel/`.
pub fn local_settings(server_url: &str) -> Settings {
    init_tracing();
    Settings::default()
        .with_base_url(server_url)
        .and_then(|s| s.with_novel_site_url(&format!("{}/novel/", server_url)))
        .expect("test server URL is valid")
        .with_action_timeout(Duration::from_secs(5))
}
