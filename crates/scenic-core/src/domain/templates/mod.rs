//! The scene template set.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  TEMPLATES (static registry, creation order)                 │
//! │  ├── Activity      → instantiates Fragment, layout key       │
//! │  ├── Fragment      → implements View, holds Presenter,       │
//! │  │                   renders VM                               │
//! │  ├── Presenter     → attaches View, emits VM                 │
//! │  ├── ViewModel     → self-contained AutoValue state          │
//! │  └── ViewContract  → render(VM) + intent()                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each entry is data: a kind, a logical name and a plain `fn` renderer.
//! Adding a template means adding a module and one registry row.

mod activity;
mod fragment;
mod presenter;
mod view_contract;
mod view_model;

use crate::domain::entities::names::{ComponentKind, ComponentNameSet};

/// Extension of every generated source file.
pub const SOURCE_EXTENSION: &str = "java";

/// A pure renderer: derived names in, source text out.
pub type RenderFn = fn(&ComponentNameSet) -> String;

/// Static descriptor of one template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub kind: ComponentKind,
    pub logical_name: &'static str,
    pub render: RenderFn,
}

impl TemplateSpec {
    /// Type name this template declares.
    pub fn type_name<'a>(&self, names: &'a ComponentNameSet) -> &'a str {
        names.name_of(self.kind)
    }

    /// `<TypeName>.java`
    pub fn file_name(&self, names: &ComponentNameSet) -> String {
        format!("{}.{}", self.type_name(names), SOURCE_EXTENSION)
    }

    pub fn render(&self, names: &ComponentNameSet) -> String {
        (self.render)(names)
    }
}

/// Registry of all templates, in creation order.
pub static TEMPLATES: [TemplateSpec; 5] = [
    TemplateSpec {
        kind: ComponentKind::Activity,
        logical_name: "Activity",
        render: activity::render,
    },
    TemplateSpec {
        kind: ComponentKind::Fragment,
        logical_name: "Fragment",
        render: fragment::render,
    },
    TemplateSpec {
        kind: ComponentKind::Presenter,
        logical_name: "Presenter",
        render: presenter::render,
    },
    TemplateSpec {
        kind: ComponentKind::ViewModel,
        logical_name: "ViewModel",
        render: view_model::render,
    },
    TemplateSpec {
        kind: ComponentKind::ViewContract,
        logical_name: "ViewContract",
        render: view_contract::render,
    },
];

/// Look up the template for a role.
pub fn template_for(kind: ComponentKind) -> &'static TemplateSpec {
    // TEMPLATES is indexed in ComponentKind::ALL order.
    &TEMPLATES[kind as usize]
}
