// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for scenic.
//!
//! This module contains pure logic with no I/O. Filesystem access happens
//! through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Names and plans are never mutated after creation
//! - **Pure renderers**: Templates are `fn(&ComponentNameSet) -> String`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod templates;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    ComponentKind, ComponentNameSet, NameDeriver, PlannedFile, RenderContext, ScaffoldPlan,
};
pub use error::DomainError;
pub use templates::{SOURCE_EXTENSION, TEMPLATES, TemplateSpec, template_for};
pub use value_objects::{BaseName, PackageName};
