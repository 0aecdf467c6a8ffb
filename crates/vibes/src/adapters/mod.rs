//! Adapters
//!
//! Concrete implementations of the ports.

mod json_source;
mod random;

pub use json_source::*;
pub use random::*;
