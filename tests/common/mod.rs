
// Re-export
pub use assertions::{assert_session_valid, assert_snapshot_matches, assert_summary_valid};

pub use helpers::*;

pub use test_app::{RecordedEvents, TestApp, TestAppBuilder};
