//! Domain Layer
//!
//! Pure build logic for client component bundling, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ClientComponent, BuildTarget, BuildManifest)
//! - `value_objects/` - Immutable value types (ComponentId, ContentHash)
//! - `services/` - Source analysis (directive detection, export extraction)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Bundling and persistence go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
