pub mod errors;
pub mod math;

pub use errors::*;
pub use math::*;
