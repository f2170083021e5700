//! Common test utilities and shared setup

pub mod builders;

pub use builders::SceneBuilder;

use std::sync::Once;

// Global INIT for all tests - ensures logger is initialized only once across all tests
static INIT: Once = Once::new();

/// Shared test setup function that can be used across all test files
/// This should be called at the beginning of each test to ensure proper logging setup
#[allow(dead_code)]
pub fn setup(log_level: &str) {
    INIT.call_once(|| {
        let level = log_level.parse().unwrap_or(log::LevelFilter::Info);
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(level)
            .try_init();
    });
}
