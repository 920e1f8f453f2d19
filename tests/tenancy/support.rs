#[path = "support/fakes.rs"]
pub mod fakes;
