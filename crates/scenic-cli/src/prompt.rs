//! Interactive scene-name prompt backed by `dialoguer`.

use std::io;

use dialoguer::{Input, theme::ColorfulTheme};
use scenic_core::{application::ApplicationError, application::ports::NamePrompt, error::SceneResult};

/// Asks for the scene name on the terminal.
///
/// An empty answer or Ctrl-C counts as cancellation.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl NamePrompt for TerminalPrompt {
    fn prompt(&self) -> SceneResult<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt("Scene name")
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(name) => {
                let name = name.trim();
                Ok((!name.is_empty()).then(|| name.to_string()))
            }
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(ApplicationError::PromptFailed {
                reason: e.to_string(),
            }
            .into()),
        }
    }
}
