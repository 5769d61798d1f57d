//! Common utilities for integration tests
#![allow(dead_code)]

pub mod mock_fields;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_fields::{ConstantField, LinearField};
pub use test_helpers::{
    assert_fixed_cells_exact,
    max_error,
    run,
    scenario,
};
