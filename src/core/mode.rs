//! # Interaction Modes
//!
//! How a submitted line is interpreted depends on the current `Mode`.
//! Buffers live inside the variants that use them, so leaving a mode drops
//! its in-progress data.
//!
//! ```text
//!             new_thought            save              <title>
//!   Command ─────────────▶ ComposingNew ─────▶ AwaitingNewTitle ───▶ Command
//!      │
//!      │ delete_thought          <id>
//!      ├──────────────▶ AwaitingDeleteId ───────────────────────────▶ Command
//!      │
//!      │ edit_thought           <id>              save             <title>
//!      └──────────────▶ AwaitingEditId ───▶ ComposingEdit ───▶ AwaitingEditTitle ───▶ Command
//! ```

use crate::core::thought::Thought;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Command,
    ComposingNew {
        /// Creation timestamp captured when the entry was started.
        started_at: String,
        lines: Vec<String>,
    },
    AwaitingNewTitle {
        started_at: String,
        lines: Vec<String>,
    },
    AwaitingDeleteId,
    AwaitingEditId,
    ComposingEdit {
        original: Thought,
        lines: Vec<String>,
    },
    AwaitingEditTitle {
        original: Thought,
        lines: Vec<String>,
    },
}

impl Mode {
    /// Prompt shown before the input cursor. Always ends with a space.
    pub fn prompt(&self, user_name: &str) -> String {
        match self {
            Mode::Command => format!("[{user_name}]@BACKTHINKER:~$ "),
            Mode::ComposingNew { .. } => format!("[{user_name}]@BACKTHINKER:~/new_thought $ "),
            Mode::AwaitingNewTitle { .. } => "GIVE NAME TO YOUR THOUGHT: ".to_string(),
            Mode::AwaitingDeleteId => "ENTER ID OF THOUGHT TO DELETE: ".to_string(),
            Mode::AwaitingEditId => "ENTER ID OF THOUGHT TO EDIT: ".to_string(),
            Mode::ComposingEdit { original, .. } => {
                format!("[{user_name}]@BACKTHINKER:~/edit_thought (ID: {}) $ ", original.id)
            }
            Mode::AwaitingEditTitle { original, .. } => {
                format!("NEW TITLE (OR PRESS ENTER TO KEEP \"{}\"): ", original.title)
            }
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Command => "command",
            Mode::ComposingNew { .. } => "composing_new",
            Mode::AwaitingNewTitle { .. } => "awaiting_new_title",
            Mode::AwaitingDeleteId => "awaiting_delete_id",
            Mode::AwaitingEditId => "awaiting_edit_id",
            Mode::ComposingEdit { .. } => "composing_edit",
            Mode::AwaitingEditTitle { .. } => "awaiting_edit_title",
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Mode::Command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::thought::ThoughtId;

    fn original() -> Thought {
        Thought {
            id: ThoughtId(3),
            title: "Dreams".to_string(),
            timestamp: "[2024-01-01 00:00:00 +00:00]".to_string(),
            content: Vec::new(),
            last_modified: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_prompts() {
        assert_eq!(Mode::Command.prompt("Memo"), "[Memo]@BACKTHINKER:~$ ");
        assert_eq!(
            Mode::ComposingNew { started_at: String::new(), lines: Vec::new() }.prompt("Memo"),
            "[Memo]@BACKTHINKER:~/new_thought $ "
        );
        assert_eq!(
            Mode::AwaitingNewTitle { started_at: String::new(), lines: Vec::new() }.prompt("Memo"),
            "GIVE NAME TO YOUR THOUGHT: "
        );
        assert_eq!(Mode::AwaitingDeleteId.prompt("Memo"), "ENTER ID OF THOUGHT TO DELETE: ");
        assert_eq!(Mode::AwaitingEditId.prompt("Memo"), "ENTER ID OF THOUGHT TO EDIT: ");
        assert_eq!(
            Mode::ComposingEdit { original: original(), lines: Vec::new() }.prompt("Memo"),
            "[Memo]@BACKTHINKER:~/edit_thought (ID: 3) $ "
        );
        assert_eq!(
            Mode::AwaitingEditTitle { original: original(), lines: Vec::new() }.prompt("Memo"),
            "NEW TITLE (OR PRESS ENTER TO KEEP \"Dreams\"): "
        );
    }

    #[test]
    fn test_every_prompt_ends_with_space() {
        let modes = [
            Mode::Command,
            Mode::ComposingNew { started_at: String::new(), lines: Vec::new() },
            Mode::AwaitingNewTitle { started_at: String::new(), lines: Vec::new() },
            Mode::AwaitingDeleteId,
            Mode::AwaitingEditId,
            Mode::ComposingEdit { original: original(), lines: Vec::new() },
            Mode::AwaitingEditTitle { original: original(), lines: Vec::new() },
        ];
        for mode in modes {
            assert!(mode.prompt("x").ends_with(' '), "{}", mode.label());
        }
    }

    #[test]
    fn test_default_is_command() {
        assert!(Mode::default().is_command());
    }
}
