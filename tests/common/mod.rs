mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_cg_within_bounds, assert_position_eq};
pub use fixtures::*;
