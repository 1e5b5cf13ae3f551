mod assertions;
mod fixtures;

// Re-export
pub use assertions::{
    assert_boundary_closed, assert_monotonic_decreasing, assert_monotonic_increasing,
    assert_profile_valid,
};

pub use fixtures::*;
