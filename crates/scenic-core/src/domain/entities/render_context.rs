use std::collections::BTreeMap;

use crate::domain::entities::names::ComponentNameSet;

/// Context for template rendering.
///
/// A **Value Object** holding the placeholder table for one scene. Built from
/// an already-derived [`ComponentNameSet`]; templates never compute names.
///
/// ## Built-in Variables
///
/// | Variable | Example (base `Login`) |
/// |----------|------------------------|
/// | `BASE` | "Login" |
/// | `DIRECTORY` | "login" |
/// | `ACTIVITY` | "LoginActivity" |
/// | `FRAGMENT` | "LoginFragment" |
/// | `PRESENTER` | "LoginPresenter" |
/// | `VIEW_MODEL` | "LoginVM" |
/// | `VIEW_CONTRACT` | "LoginView" |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    // BTreeMap keeps substitution order stable between runs.
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(names: &ComponentNameSet) -> Self {
        let variables = BTreeMap::from([
            ("BASE", names.base().to_string()),
            ("DIRECTORY", names.directory().to_string()),
            ("ACTIVITY", names.activity().to_string()),
            ("FRAGMENT", names.fragment().to_string()),
            ("PRESENTER", names.presenter().to_string()),
            ("VIEW_MODEL", names.view_model().to_string()),
            ("VIEW_CONTRACT", names.view_contract().to_string()),
        ]);

        Self { variables }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `AutoValue_{{VIEW_MODEL}}` → placeholder glued to text is replaced
    /// - values are identifiers, so a substituted value can never introduce
    ///   a new placeholder
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
