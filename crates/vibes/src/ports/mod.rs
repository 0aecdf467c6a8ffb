//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the store
//! interacts with its collaborators (randomness, data loading).
//!
//! Implementations of these traits live in `adapters`.

mod profile_source;
mod random;

// Re-exports
pub use profile_source::*;
pub use random::*;
