//! scenic Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the scenic
//! scene scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         scenic-cli (scaffold-scene)     │
//! │     (Collects the name, prints result)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  SceneService = Planner + Executor      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Filesystem, NamePrompt)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     scenic-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (BaseName, NameDeriver, TEMPLATES,     │
//! │   ScaffoldPlan)                         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scenic_core::prelude::*;
//!
//! let service = SceneService::new(Box::new(filesystem));
//! let artifacts = service.scaffold("Login", "./app/src/main/java")?;
//! assert_eq!(artifacts.handles().len(), 6);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldExecutor, ScaffoldPlanner, SceneArtifacts, SceneService,
        ports::{
            ArtifactHandle, DirectoryHandle, EntryKind, FileHandle, Filesystem, FsFailure,
            FsFailureKind, FsResult, NamePrompt,
        },
    };
    pub use crate::domain::{
        BaseName, ComponentKind, ComponentNameSet, NameDeriver, PackageName, PlannedFile,
        ScaffoldPlan, TEMPLATES, TemplateSpec,
    };
    pub use crate::error::{ErrorCategory, SceneError, SceneResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
