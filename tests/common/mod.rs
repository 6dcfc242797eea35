//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use test_helpers::{assert_final_state_close, relative_error, solve_default};
