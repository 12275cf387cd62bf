//! # Commands
//!
//! Parsing of lines submitted in command mode. The first whitespace-separated
//! token selects the command (case-insensitive); the rest are arguments with
//! their case preserved, so `UPDATE_NAME Ada Lovelace` keeps the capitals.

/// One row of the help table.
pub struct CommandHelp {
    pub name: &'static str,
    pub description: &'static str,
}

pub const COMMANDS_HEADER: &str = "   AVAILABLE COMMANDS:";

pub const COMMAND_TABLE: &[CommandHelp] = &[
    CommandHelp { name: "NEW_THOUGHT", description: "Create a new journal entry" },
    CommandHelp { name: "LIST_THOUGHTS", description: "List all saved thoughts" },
    CommandHelp { name: "VIEW_THOUGHT", description: "View a specific thought by ID" },
    CommandHelp { name: "EDIT_THOUGHT", description: "Modify a previous entry by ID" },
    CommandHelp { name: "DELETE_THOUGHT", description: "Remove an existing entry by ID" },
    CommandHelp { name: "SAVE", description: "Save current entry (in new/edit mode)" },
    CommandHelp { name: "FORGET_THOUGHTS", description: "Clear current unsaved entry/screen" },
    CommandHelp { name: "UPDATE_NAME", description: "Change your user name" },
    CommandHelp { name: "THEME_COLOR", description: "Customize journal colors" },
    CommandHelp { name: "HELP_ZENITH", description: "Display all commands" },
];

/// `NAME              | description`
pub fn help_rows() -> impl Iterator<Item = String> {
    COMMAND_TABLE
        .iter()
        .map(|c| format!("{:<18}| {}", c.name, c.description))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Date,
    NewThought,
    Save,
    UpdateName(Option<String>),
    ThemeColor(Option<String>),
    ListThoughts,
    DeleteThought,
    EditThought,
    ViewThought(Option<String>),
    ForgetThoughts,
    Unknown(String),
}

impl Command {
    /// Parse a trimmed line. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();
        let token = parts.next()?.to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match token.as_str() {
            "help_zenith" => Command::Help,
            "date" => Command::Date,
            "new_thought" => Command::NewThought,
            "save" => Command::Save,
            "update_name" => {
                Command::UpdateName((!args.is_empty()).then(|| args.join(" ")))
            }
            "theme_color" => {
                Command::ThemeColor(args.first().map(|a| a.to_lowercase()))
            }
            "list_thoughts" => Command::ListThoughts,
            "delete_thought" => Command::DeleteThought,
            "edit_thought" => Command::EditThought,
            "view_thought" => Command::ViewThought(args.first().map(|a| a.to_string())),
            "forget_thoughts" => Command::ForgetThoughts,
            _ => Command::Unknown(line.to_string()),
        };
        Some(command)
    }
}

/// True when a composition line is the `save` keyword.
pub fn is_save(line: &str) -> bool {
    line.eq_ignore_ascii_case("save")
}
