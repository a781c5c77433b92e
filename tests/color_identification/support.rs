#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/fixtures.rs"]
pub mod fixtures;

pub use fixtures::{ANONYMOUS_USER_ID, IDENTITY_TOKEN, color_secret, test_config, valid_claim};
pub use harness::create_endpoint_harness;
