#[path = "support/fixtures.rs"]
pub mod fixtures;

pub use fixtures::{condominium_parts, create_command, registered_condominium, update_command};
pub use harness::create_harness;
