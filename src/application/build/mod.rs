//! Build Module
//!
//! Orchestrates a build pass for gxr.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`BuildOptions`)
//! - `result` - Result types (`BuildResult`, `TargetReport`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use gxr::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(BuildOptions::from_config(&config), bundler, repository);
//! let result = use_case.run(&NoopEventSink);
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::{BuildResult, TargetReport};
pub use use_case::{BuildUseCase, STAGING_PREFIX};
