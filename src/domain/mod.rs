//! Domain Layer
//!
//! Pure split logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Artifact definitions and the runtime flags they embed
//! - `value_objects/` - Immutable value types (ArtifactKind, ContentHash)
//! - `services/` - Text-region patching and the split planner
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
