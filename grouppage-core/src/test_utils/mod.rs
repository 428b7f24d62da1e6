//! Test utilities for the group page
//!
//! Builders, fixture functions, collaborator doubles and assertions shared
//! by unit and integration tests.

pub mod assertions;
pub mod doubles;
pub mod fixtures;

pub use assertions::*;
pub use doubles::*;
pub use fixtures::*;
