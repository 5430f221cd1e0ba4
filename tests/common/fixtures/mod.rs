mod components;
mod data;

// Re-export test fixtures
pub use components::*;
pub use data::*;
