//! Application services - orchestrate use cases.
//!
//! Planner and executor are usable on their own; `SceneService` composes
//! them into the "scaffold a scene" use case.

pub mod executor;
pub mod planner;
pub mod scene_service;

pub use executor::{ScaffoldExecutor, SceneArtifacts};
pub use planner::ScaffoldPlanner;
pub use scene_service::SceneService;
