//! Bundler Implementations

mod command;

pub use command::{CommandBundler, ENTRY_PLACEHOLDER, OUTPUT_PLACEHOLDER};
