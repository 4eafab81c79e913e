//! Component name derivation.
//!
//! A scene is five coupled types whose names all come from one base name
//! plus a fixed suffix. The suffix table is the single place that decides
//! the naming policy; renderers only ever see the derived [`ComponentNameSet`].

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::BaseName;

/// The five roles of a scene, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Activity,
    Fragment,
    Presenter,
    ViewModel,
    ViewContract,
}

impl ComponentKind {
    /// Creation order. Also the order of every plan and artifact list.
    pub const ALL: [ComponentKind; 5] = [
        Self::Activity,
        Self::Fragment,
        Self::Presenter,
        Self::ViewModel,
        Self::ViewContract,
    ];

    /// Suffix appended to the base name to form the type name.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Activity => "Activity",
            Self::Fragment => "Fragment",
            Self::Presenter => "Presenter",
            Self::ViewModel => "VM",
            Self::ViewContract => "View",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Fragment => "fragment",
            Self::Presenter => "presenter",
            Self::ViewModel => "view_model",
            Self::ViewContract => "view_contract",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every name a scene needs, derived once from a [`BaseName`].
///
/// Immutable after derivation. Two derivations from the same base are
/// structurally equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentNameSet {
    base: String,
    directory: String,
    activity: String,
    fragment: String,
    presenter: String,
    view_model: String,
    view_contract: String,
}

impl ComponentNameSet {
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `lowercase(base)`: the scene directory and the layout resource key.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn presenter(&self) -> &str {
        &self.presenter
    }

    pub fn view_model(&self) -> &str {
        &self.view_model
    }

    pub fn view_contract(&self) -> &str {
        &self.view_contract
    }

    /// Type name for a given role.
    pub fn name_of(&self, kind: ComponentKind) -> &str {
        match kind {
            ComponentKind::Activity => &self.activity,
            ComponentKind::Fragment => &self.fragment,
            ComponentKind::Presenter => &self.presenter,
            ComponentKind::ViewModel => &self.view_model,
            ComponentKind::ViewContract => &self.view_contract,
        }
    }

    /// All five type names in creation order.
    pub fn component_names(&self) -> [&str; 5] {
        ComponentKind::ALL.map(|kind| self.name_of(kind))
    }
}

/// Pure base name → component names derivation.
pub struct NameDeriver;

impl NameDeriver {
    /// Derive the full name set. Total: a `BaseName` is already valid.
    pub fn derive(base: &BaseName) -> ComponentNameSet {
        let suffixed = |kind: ComponentKind| format!("{}{}", base.as_str(), kind.suffix());

        ComponentNameSet {
            base: base.as_str().to_string(),
            directory: base.to_directory_name(),
            activity: suffixed(ComponentKind::Activity),
            fragment: suffixed(ComponentKind::Fragment),
            presenter: suffixed(ComponentKind::Presenter),
            view_model: suffixed(ComponentKind::ViewModel),
            view_contract: suffixed(ComponentKind::ViewContract),
        }
    }
}
