//! Physical constants and typed astronomical quantities.

pub mod constants;
pub mod length;
pub mod mass;
pub mod time;


pub use length::Length;
pub use mass::Mass;
pub use time::Time;
