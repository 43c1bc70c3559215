pub mod config;
pub mod db;
pub mod logging;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
