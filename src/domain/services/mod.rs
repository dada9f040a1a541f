//! Domain Services
//!
//! Pure source analysis used by the classifier:
//! - `directive` - structural `"use client"` detection
//! - `exports` - exported name extraction

pub mod directive;
pub mod exports;
mod scan;

pub use directive::{directive_prologue, has_client_directive, CLIENT_DIRECTIVE};
pub use exports::exported_names;
