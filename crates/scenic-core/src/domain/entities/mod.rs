//! Domain entities and the scaffold plan.

pub mod names;
pub mod plan;
pub mod render_context;

pub use names::{ComponentKind, ComponentNameSet, NameDeriver};
pub use plan::{PlannedFile, ScaffoldPlan};
pub use render_context::RenderContext;
