//! Value Objects
//!
//! Immutable types identified by their value rather than by identity.

mod component_id;
mod config_warning;
mod hash;

pub use component_id::ComponentId;
pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
