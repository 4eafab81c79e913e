//! Non-interactive name prompt.

use scenic_core::{application::ports::NamePrompt, error::SceneResult};

/// A [`NamePrompt`] with a predetermined answer.
///
/// `None` behaves like a dismissed dialog.
#[derive(Debug, Clone, Default)]
pub struct FixedNamePrompt {
    answer: Option<String>,
}

impl FixedNamePrompt {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }

    pub fn dismissed() -> Self {
        Self { answer: None }
    }
}

impl NamePrompt for FixedNamePrompt {
    fn prompt(&self) -> SceneResult<Option<String>> {
        Ok(self.answer.clone())
    }
}
