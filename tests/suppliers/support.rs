#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/fixtures.rs"]
pub mod fixtures;

pub use fixtures::{create_command, registered_supplier, supplier_parts, update_command};
pub use harness::create_harness;
