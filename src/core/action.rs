//! # Actions
//!
//! Everything that can happen in Zenith becomes an `Action`.
//! User presses Enter? That's `Action::Submit(line)`.
//! The store answers? That's `Action::StoreCompleted(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Storage round trips are split in two: the submitting action records a
//! `PendingOp` and returns `Effect::Store(request)`; the matching
//! `StoreCompleted` consumes the pending op and renders the outcome. Input
//! is refused while an op is pending.

use log::{debug, error, info, warn};

use crate::core::clock::{entry_timestamp, iso_timestamp};
use crate::core::command::{COMMANDS_HEADER, Command, help_rows, is_save};
use crate::core::error::{JournalError, StoreError};
use crate::core::mode::Mode;
use crate::core::state::{App, PendingOp, StoreStatus};
use crate::core::store::{StoreReply, StoreRequest};
use crate::core::theme;
use crate::core::thought::{NewThought, Thought, ThoughtId, title_or_default};

const APP_TITLE: &str = "[ *ZENITH JOURNAL* ]";
const INSPIRATIONAL_MESSAGES: &[&str] = &[
    "   UNLEASH YOUR THOUGHTS.",
    "   EVERY ENTRY IS A NEW BEGINNING.",
    "   WHAT WILL YOU CREATE TODAY?",
];
const SEPARATOR: &str = "...";

#[derive(Debug)]
pub enum Action {
    /// Draw the welcome screen. Sent once when the UI comes up.
    Start,
    /// A line from the input box (untrimmed).
    Submit(String),
    /// Abandon the entry being composed and go back to command mode.
    Cancel,
    /// The background open of the store finished.
    StoreOpened(Result<(), StoreError>),
    /// Reply to the last `Effect::Store`.
    StoreCompleted(Result<StoreReply, StoreError>),
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Run this request against the store and answer with `StoreCompleted`.
    Store(StoreRequest),
    /// Persist `App::preferences()`.
    SavePreferences,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => {
            show_welcome(app);
            Effect::None
        }
        Action::Submit(raw) => {
            if let Some(op) = &app.pending {
                warn!("Input refused while {:?} is pending", op);
                return Effect::None;
            }
            app.status_message.clear();
            submit_line(app, raw.trim())
        }
        Action::Cancel => {
            if app.is_busy() || app.mode.is_command() {
                return Effect::None;
            }
            info!("Discarding entry in mode {}", app.mode.label());
            app.mode = Mode::Command;
            show_welcome(app);
            app.console.info("ZNTH_INFO: Entry discarded.");
            Effect::None
        }
        Action::StoreOpened(Ok(())) => {
            info!("Thought store ready");
            app.store_status = StoreStatus::Ready;
            Effect::None
        }
        Action::StoreOpened(Err(e)) => {
            error!("Thought store failed to open: {}", e);
            app.store_status = StoreStatus::Failed;
            app.console.error("ZNTH_ERROR: DB init error.");
            Effect::None
        }
        Action::StoreCompleted(result) => {
            let Some(op) = app.pending.take() else {
                warn!("Store reply with nothing pending: {:?}", result);
                return Effect::None;
            };
            app.status_message.clear();
            complete(app, op, result);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// The mode transition function. Every mode handles every line.
fn submit_line(app: &mut App, line: &str) -> Effect {
    debug!("Submit in mode {}: {:?}", app.mode.label(), line);

    match std::mem::take(&mut app.mode) {
        Mode::Command => run_command(app, line),

        Mode::ComposingNew { started_at, mut lines } => {
            if is_save(line) {
                app.mode = Mode::AwaitingNewTitle { started_at, lines };
            } else {
                app.console.echo(line);
                lines.push(line.to_string());
                app.mode = Mode::ComposingNew { started_at, lines };
            }
            Effect::None
        }

        Mode::AwaitingNewTitle { started_at, lines } => {
            let title = title_or_default(line);
            let now = (app.clock)();
            let thought = NewThought {
                title: title.clone(),
                timestamp: started_at,
                content: lines,
                last_modified: iso_timestamp(&now),
            };
            request(app, PendingOp::SaveNew { title }, StoreRequest::Create(thought))
        }

        Mode::AwaitingDeleteId => match line.parse::<ThoughtId>() {
            Ok(id) => request(app, PendingOp::Delete(id), StoreRequest::Delete(id)),
            Err(_) => {
                report(app, JournalError::Parse);
                app.mode = Mode::AwaitingDeleteId;
                Effect::None
            }
        },

        Mode::AwaitingEditId => match line.parse::<ThoughtId>() {
            Ok(id) => request(app, PendingOp::LoadForEdit(id), StoreRequest::Get(id)),
            Err(_) => {
                report(app, JournalError::Parse);
                app.mode = Mode::AwaitingEditId;
                Effect::None
            }
        },

        Mode::ComposingEdit { original, mut lines } => {
            if is_save(line) {
                app.mode = Mode::AwaitingEditTitle { original, lines };
            } else {
                app.console.echo(line);
                lines.push(line.to_string());
                app.mode = Mode::ComposingEdit { original, lines };
            }
            Effect::None
        }

        Mode::AwaitingEditTitle { original, lines } => {
            let now = (app.clock)();
            let revised = original.revised(line, lines, iso_timestamp(&now));
            let op = PendingOp::SaveEdit {
                id: revised.id,
                title: revised.title.clone(),
            };
            request(app, op, StoreRequest::Update(revised))
        }
    }
}

fn run_command(app: &mut App, line: &str) -> Effect {
    let Some(command) = Command::parse(line) else {
        return Effect::None;
    };
    let echoed = format!("{}{}", app.prompt(), line);
    app.console.echo(echoed);

    match command {
        Command::Help => {
            app.console.print(" ");
            print_command_table(app);
            Effect::None
        }
        Command::Date => {
            let now = (app.clock)();
            app.console.print(entry_timestamp(&now));
            Effect::None
        }
        Command::NewThought => {
            let started_at = entry_timestamp(&(app.clock)());
            app.console.clear();
            app.console.print(format!("New entry started at: {started_at}"));
            app.console.print("---");
            app.mode = Mode::ComposingNew {
                started_at,
                lines: Vec::new(),
            };
            Effect::None
        }
        Command::Save => {
            app.console.info("ZNTH_INFO: Use SAVE within new/edit modes.");
            Effect::None
        }
        Command::UpdateName(Some(name)) => {
            info!("User name changed to {:?}", name);
            app.console.print(format!("Username updated to: {name}"));
            app.user_name = name;
            Effect::SavePreferences
        }
        Command::UpdateName(None) => {
            report(app, JournalError::Usage("UPDATE_NAME [new_username]"));
            Effect::None
        }
        Command::ThemeColor(Some(name)) => match theme::find(&name) {
            Some(selected) => {
                info!("Theme changed to {}", selected.name);
                app.theme = selected;
                app.console.print(format!("Theme set to: {name}"));
                Effect::SavePreferences
            }
            None => {
                report(app, JournalError::ThemeNotFound(name));
                app.console.print(format!("Available: {}", theme::names()));
                Effect::None
            }
        },
        Command::ThemeColor(None) => {
            report(app, JournalError::Usage("THEME_COLOR [theme_name]"));
            app.console.print(format!("Current theme: {}.", app.theme.name));
            app.console.print(format!("Available themes: {}", theme::names()));
            Effect::None
        }
        Command::ListThoughts => request(app, PendingOp::List, StoreRequest::List),
        Command::DeleteThought => {
            app.mode = Mode::AwaitingDeleteId;
            Effect::None
        }
        Command::EditThought => {
            app.mode = Mode::AwaitingEditId;
            Effect::None
        }
        Command::ViewThought(None) => {
            report(app, JournalError::Usage("VIEW_THOUGHT [ID]"));
            app.console.print("Hint: Use 'LIST_THOUGHTS' to find ID.");
            Effect::None
        }
        Command::ViewThought(Some(arg)) => match arg.parse::<ThoughtId>() {
            Ok(id) => request(app, PendingOp::View(id), StoreRequest::Get(id)),
            Err(_) => {
                report(app, JournalError::ParseViewId);
                Effect::None
            }
        },
        Command::ForgetThoughts => {
            show_welcome(app);
            Effect::None
        }
        Command::Unknown(raw) => {
            report(app, JournalError::UnknownCommand(raw));
            Effect::None
        }
    }
}

/// Mark `op` as pending and hand the request to the caller.
fn request(app: &mut App, op: PendingOp, request: StoreRequest) -> Effect {
    debug!("Requesting {:?}", op);
    app.pending = Some(op);
    app.status_message = "Working...".to_string();
    Effect::Store(request)
}

/// Render the outcome of a finished store call. The mode is `Command` on
/// entry; only a successful edit lookup leaves it.
fn complete(app: &mut App, op: PendingOp, result: Result<StoreReply, StoreError>) {
    match (op, result) {
        (PendingOp::SaveNew { title }, Ok(StoreReply::Created(id))) => {
            info!("Saved thought {} {:?}", id, title);
            show_welcome(app);
            app.console.print(format!("THOUGHT SAVED: \"{title}\" (ID: {id})"));
            app.console.print("---");
        }
        (PendingOp::SaveNew { .. }, Err(e)) => {
            show_welcome(app);
            report(app, JournalError::from_store("save", e));
        }

        (PendingOp::LoadForEdit(_), Ok(StoreReply::Fetched(Some(original)))) => {
            begin_edit(app, original);
        }
        (PendingOp::LoadForEdit(id), Ok(StoreReply::Fetched(None))) => {
            report(app, JournalError::NotFound(id));
        }
        (PendingOp::LoadForEdit(_), Err(e)) => {
            report(app, JournalError::from_store("fetch thought", e));
        }

        (PendingOp::SaveEdit { id, title }, Ok(StoreReply::Updated)) => {
            info!("Updated thought {} {:?}", id, title);
            show_welcome(app);
            app.console.print(format!("THOUGHT ID: {id} UPDATED. New Title: \"{title}\""));
            app.console.print("---");
        }
        (PendingOp::SaveEdit { .. }, Err(e)) => {
            show_welcome(app);
            report(app, JournalError::from_store("update thought", e));
        }

        (PendingOp::Delete(id), Ok(StoreReply::Deleted)) => {
            info!("Deleted thought {}", id);
            show_welcome(app);
            app.console.print(format!("THOUGHT ID: {id} DELETED."));
        }
        (PendingOp::Delete(_), Err(e)) => {
            show_welcome(app);
            report(app, JournalError::from_store("delete", e));
        }

        (PendingOp::View(_), Ok(StoreReply::Fetched(Some(thought)))) => {
            show_thought(app, &thought);
        }
        (PendingOp::View(id), Ok(StoreReply::Fetched(None))) => {
            report(app, JournalError::NotFound(id));
        }
        (PendingOp::View(_), Err(e)) => {
            report(app, JournalError::from_store("fetch thought", e));
        }

        (PendingOp::List, Ok(StoreReply::Listed(thoughts))) => {
            show_list(app, &thoughts);
        }
        (PendingOp::List, Err(e)) => {
            report(app, JournalError::from_store("retrieve thoughts", e));
        }

        (op, Ok(reply)) => {
            error!("Store reply {:?} does not match pending {:?}", reply, op);
            app.mode = Mode::Command;
        }
    }
}

fn report(app: &mut App, err: JournalError) {
    debug!("Reporting error: {}", err);
    app.console.error(err.line());
}

fn print_command_table(app: &mut App) {
    app.console.print(COMMANDS_HEADER);
    for row in help_rows() {
        app.console.print(row);
    }
    app.console.print(" ");
}

fn show_welcome(app: &mut App) {
    let now = (app.clock)();
    app.console.clear();
    app.console
        .print(format!(">>> WELCOME, BACKTHINKER? {} <<<", app.user_name));
    app.console.print(APP_TITLE);
    app.console.print(" ");
    for msg in INSPIRATIONAL_MESSAGES {
        app.console.print(*msg);
    }
    app.console.print(SEPARATOR);
    app.console.print(entry_timestamp(&now));
    app.console.print(" ");
    print_command_table(app);
}

fn begin_edit(app: &mut App, original: Thought) {
    app.console.clear();
    app.console.print(format!(
        "Editing Thought ID: {} - \"{}\"",
        original.id, original.title
    ));
    app.console
        .print(format!("Original content (created {}):", original.timestamp));
    if original.content.is_empty() {
        app.console.print("(No previous content)");
    } else {
        for line in &original.content {
            app.console.print(line.as_str());
        }
    }
    app.console.print("--- Enter new content below ---");
    app.mode = Mode::ComposingEdit {
        original,
        lines: Vec::new(),
    };
}

fn show_thought(app: &mut App, thought: &Thought) {
    app.console.clear();
    app.console
        .print(format!("--- Viewing Thought ID: {} ---", thought.id));
    app.console.print(format!("Title: {}", thought.title));
    app.console.print(format!("Created: {}", thought.timestamp));
    app.console
        .print(format!("Last Modified: {}", thought.last_modified));
    app.console.print("--- Content ---");
    if thought.content.is_empty() {
        app.console.print("(This thought has no content)");
    } else {
        for line in &thought.content {
            app.console.print(line.as_str());
        }
    }
    app.console.print("------------------------------");
}

fn show_list(app: &mut App, thoughts: &[Thought]) {
    app.console.rule();
    app.console.print("--- Your Saved Thoughts ---");
    if thoughts.is_empty() {
        app.console.print("No thoughts saved yet.");
    } else {
        for t in thoughts {
            app.console.print(format!(
                "ID: {} | \"{}\" | Created: {}",
                t.id, t.title, t.timestamp
            ));
        }
    }
    app.console.print("-------------------------");
    app.console
        .print("Hint: Use 'VIEW_THOUGHT [ID]' to see full content.");
    app.console.rule();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::LineKind;
    use crate::core::store::{JsonThoughtStore, ThoughtStore};
    use crate::test_support::{drive, sample_thought, test_app};

    fn submit(app: &mut App, line: &str) -> Effect {
        update(app, Action::Submit(line.to_string()))
    }

    #[test]
    fn test_start_shows_welcome() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        assert_eq!(app.console.texts()[0], ">>> WELCOME, BACKTHINKER? Memo <<<");
        assert!(app.console.contains("[ *ZENITH JOURNAL* ]"));
        assert!(app.console.contains("   AVAILABLE COMMANDS:"));
        assert!(app.console.contains("HELP_ZENITH       | Display all commands"));
    }

    #[test]
    fn test_blank_command_line_is_ignored() {
        let mut app = test_app();
        assert_eq!(submit(&mut app, "   "), Effect::None);
        assert!(app.console.lines().is_empty());
        assert!(app.mode.is_command());
    }

    #[test]
    fn test_command_is_echoed_with_prompt() {
        let mut app = test_app();
        submit(&mut app, "  date ");
        assert_eq!(app.console.lines()[0].kind, LineKind::Echo);
        assert_eq!(app.console.texts()[0], "[Memo]@BACKTHINKER:~$ date");
        assert!(app.console.texts()[1].starts_with('['));
    }

    #[test]
    fn test_date_prints_clock_reading() {
        let mut app = test_app();
        submit(&mut app, "DATE");
        assert!(app.console.texts()[1].starts_with("[2030-01-02 03:04:05 "));
    }

    #[test]
    fn test_help_prints_every_command() {
        let mut app = test_app();
        submit(&mut app, "help_zenith");
        let texts = app.console.texts();
        assert_eq!(texts[2], COMMANDS_HEADER);
        assert_eq!(texts.len(), 3 + help_rows().count() + 1);
        assert!(app.mode.is_command());
    }

    #[test]
    fn test_submit_clears_stale_status() {
        let mut app = test_app();
        app.status_message = "Preferences not saved: read-only".to_string();
        submit(&mut app, "date");
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_unknown_command_reports_raw_input() {
        let mut app = test_app();
        submit(&mut app, "Fly Away");
        assert_eq!(
            app.console.texts().last().copied(),
            Some("ZNTH_ERROR: Command not found: Fly Away")
        );
        assert!(app.mode.is_command());
    }

    #[test]
    fn test_save_outside_entry_is_hint() {
        let mut app = test_app();
        assert_eq!(submit(&mut app, "SAVE"), Effect::None);
        assert!(app.console.contains("ZNTH_INFO: Use SAVE within new/edit modes."));
    }

    #[test]
    fn test_new_thought_flow_emits_create() {
        let mut app = test_app();
        submit(&mut app, "new_thought");
        assert!(matches!(app.mode, Mode::ComposingNew { .. }));
        assert!(app.console.texts()[0].starts_with("New entry started at: ["));

        submit(&mut app, "first line");
        submit(&mut app, "");
        submit(&mut app, "third line");
        submit(&mut app, "Save");
        assert!(matches!(app.mode, Mode::AwaitingNewTitle { .. }));
        assert_eq!(app.prompt(), "GIVE NAME TO YOUR THOUGHT: ");

        let effect = submit(&mut app, "");
        let Effect::Store(StoreRequest::Create(thought)) = effect else {
            panic!("expected create request, got {:?}", effect);
        };
        assert_eq!(thought.title, "Untitled Thought");
        assert_eq!(thought.content, vec!["first line", "", "third line"]);
        assert!(thought.timestamp.starts_with('['));
        assert!(app.is_busy());
    }

    #[test]
    fn test_input_refused_while_pending() {
        let mut app = test_app();
        submit(&mut app, "list_thoughts");
        assert!(app.is_busy());

        let before = app.console.lines().len();
        assert_eq!(submit(&mut app, "date"), Effect::None);
        assert_eq!(app.console.lines().len(), before);
    }

    #[test]
    fn test_save_success_returns_to_command_with_welcome() {
        let mut app = test_app();
        submit(&mut app, "new_thought");
        submit(&mut app, "save");
        submit(&mut app, "Plans");

        update(&mut app, Action::StoreCompleted(Ok(StoreReply::Created(ThoughtId(4)))));
        assert!(app.mode.is_command());
        assert!(!app.is_busy());
        assert_eq!(app.console.texts()[0], ">>> WELCOME, BACKTHINKER? Memo <<<");
        assert!(app.console.contains("THOUGHT SAVED: \"Plans\" (ID: 4)"));
    }

    #[test]
    fn test_save_before_store_ready_resets_to_command() {
        let mut app = test_app();
        submit(&mut app, "new_thought");
        submit(&mut app, "save");
        submit(&mut app, "t");

        update(&mut app, Action::StoreCompleted(Err(StoreError::NotReady)));
        assert!(app.mode.is_command());
        assert!(!app.is_busy());
        assert_eq!(
            app.console.texts().last().copied(),
            Some("ZNTH_ERROR: DB not ready.")
        );
    }

    #[test]
    fn test_delete_id_parse_error_stays() {
        let mut app = test_app();
        submit(&mut app, "delete_thought");
        assert_eq!(app.mode, Mode::AwaitingDeleteId);

        assert_eq!(submit(&mut app, "abc"), Effect::None);
        assert_eq!(app.mode, Mode::AwaitingDeleteId);
        assert!(app.console.contains("ZNTH_ERROR: Invalid ID."));

        let effect = submit(&mut app, "7");
        assert_eq!(effect, Effect::Store(StoreRequest::Delete(ThoughtId(7))));
    }

    #[test]
    fn test_delete_success_message() {
        let mut app = test_app();
        submit(&mut app, "delete_thought");
        submit(&mut app, "7");
        update(&mut app, Action::StoreCompleted(Ok(StoreReply::Deleted)));
        assert!(app.console.contains("THOUGHT ID: 7 DELETED."));
        assert!(app.mode.is_command());
    }

    #[test]
    fn test_edit_id_not_found_returns_to_command() {
        let mut app = test_app();
        submit(&mut app, "edit_thought");
        assert_eq!(submit(&mut app, "x"), Effect::None);
        assert_eq!(app.mode, Mode::AwaitingEditId);

        assert_eq!(submit(&mut app, "9"), Effect::Store(StoreRequest::Get(ThoughtId(9))));
        update(&mut app, Action::StoreCompleted(Ok(StoreReply::Fetched(None))));
        assert!(app.mode.is_command());
        assert_eq!(
            app.console.texts().last().copied(),
            Some("ZNTH_ERROR: Thought ID: 9 not found.")
        );
    }

    #[test]
    fn test_edit_flow_keeps_title_on_blank_input() {
        let mut app = test_app();
        let original = sample_thought(2, "Dreams", &["old"]);
        submit(&mut app, "edit_thought");
        submit(&mut app, "2");
        update(
            &mut app,
            Action::StoreCompleted(Ok(StoreReply::Fetched(Some(original.clone())))),
        );
        assert!(matches!(app.mode, Mode::ComposingEdit { .. }));
        assert!(app.console.contains("Editing Thought ID: 2 - \"Dreams\""));
        assert!(app.console.contains("old"));
        assert_eq!(app.prompt(), "[Memo]@BACKTHINKER:~/edit_thought (ID: 2) $ ");

        submit(&mut app, "new");
        submit(&mut app, "SAVE");
        assert_eq!(app.prompt(), "NEW TITLE (OR PRESS ENTER TO KEEP \"Dreams\"): ");

        let Effect::Store(StoreRequest::Update(revised)) = submit(&mut app, "") else {
            panic!("expected update request");
        };
        assert_eq!(revised.id, original.id);
        assert_eq!(revised.title, "Dreams");
        assert_eq!(revised.timestamp, original.timestamp);
        assert_eq!(revised.content, vec!["new"]);
        assert_ne!(revised.last_modified, original.last_modified);

        update(&mut app, Action::StoreCompleted(Ok(StoreReply::Updated)));
        assert!(app.console.contains("THOUGHT ID: 2 UPDATED. New Title: \"Dreams\""));
    }

    #[test]
    fn test_update_name_requires_args() {
        let mut app = test_app();
        assert_eq!(submit(&mut app, "update_name"), Effect::None);
        assert!(app.console.contains("ZNTH_USAGE: UPDATE_NAME [new_username]"));
    }

    #[test]
    fn test_update_name_changes_prompt_and_persists() {
        let mut app = test_app();
        assert_eq!(submit(&mut app, "UPDATE_NAME Ada Lovelace"), Effect::SavePreferences);
        assert_eq!(app.prompt(), "[Ada Lovelace]@BACKTHINKER:~$ ");
        assert!(app.console.contains("Username updated to: Ada Lovelace"));
        assert_eq!(app.preferences().user_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_unknown_theme_lists_available() {
        let mut app = test_app();
        assert_eq!(submit(&mut app, "THEME_COLOR neon"), Effect::None);
        let texts = app.console.texts();
        let n = texts.len();
        assert_eq!(texts[n - 2], "ZNTH_ERROR: Theme \"neon\" not found.");
        assert_eq!(
            texts[n - 1],
            "Available: classic_green, amber_retro, blue_glow, light_mode"
        );
        assert_eq!(app.theme.name, "classic_green");
    }

    #[test]
    fn test_known_theme_applies() {
        let mut app = test_app();
        assert_eq!(submit(&mut app, "theme_color AMBER_RETRO"), Effect::SavePreferences);
        assert_eq!(app.theme.name, "amber_retro");
        assert!(app.console.contains("Theme set to: amber_retro"));
    }

    #[test]
    fn test_theme_without_args_shows_current() {
        let mut app = test_app();
        submit(&mut app, "theme_color");
        assert!(app.console.contains("ZNTH_USAGE: THEME_COLOR [theme_name]"));
        assert!(app.console.contains("Current theme: classic_green."));
        assert!(app.console.contains("Available themes: classic_green"));
    }

    #[test]
    fn test_view_thought_argument_errors() {
        let mut app = test_app();
        submit(&mut app, "view_thought");
        assert!(app.console.contains("ZNTH_USAGE: VIEW_THOUGHT [ID]"));
        assert!(app.console.contains("Hint: Use 'LIST_THOUGHTS' to find ID."));

        submit(&mut app, "view_thought seven");
        assert!(app.console.contains("ZNTH_ERROR: Invalid ID for VIEW_THOUGHT."));
        assert!(!app.is_busy());
    }

    #[test]
    fn test_view_thought_renders_record() {
        let mut app = test_app();
        submit(&mut app, "view_thought 1");
        let thought = sample_thought(1, "Walk", &[]);
        update(&mut app, Action::StoreCompleted(Ok(StoreReply::Fetched(Some(thought)))));
        let texts = app.console.texts();
        assert_eq!(texts[0], "--- Viewing Thought ID: 1 ---");
        assert_eq!(texts[1], "Title: Walk");
        assert!(texts.contains(&"(This thought has no content)"));
    }

    #[test]
    fn test_empty_list_prints_no_thoughts_only() {
        let mut app = test_app();
        submit(&mut app, "list_thoughts");
        update(&mut app, Action::StoreCompleted(Ok(StoreReply::Listed(Vec::new()))));
        assert!(app.console.contains("No thoughts saved yet."));
        assert!(!app.console.texts().iter().any(|t| t.starts_with("ID: ")));
    }

    #[test]
    fn test_list_rows() {
        let mut app = test_app();
        submit(&mut app, "list_thoughts");
        let listed = vec![sample_thought(1, "a", &[]), sample_thought(3, "b", &[])];
        update(&mut app, Action::StoreCompleted(Ok(StoreReply::Listed(listed))));
        let rows: Vec<&str> = app
            .console
            .texts()
            .into_iter()
            .filter(|t| t.starts_with("ID: "))
            .collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("ID: 1 | \"a\" | Created: ["));
        assert!(rows[1].starts_with("ID: 3 | \"b\""));
    }

    #[test]
    fn test_cancel_discards_entry() {
        let mut app = test_app();
        submit(&mut app, "new_thought");
        submit(&mut app, "draft");
        update(&mut app, Action::Cancel);
        assert!(app.mode.is_command());
        assert!(app.console.contains("ZNTH_INFO: Entry discarded."));
    }

    #[test]
    fn test_cancel_in_command_mode_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::Cancel);
        assert!(app.console.lines().is_empty());
    }

    #[test]
    fn test_store_open_failure_is_reported() {
        let mut app = test_app();
        update(&mut app, Action::StoreOpened(Err(StoreError::Corrupt("bad".to_string()))));
        assert_eq!(app.store_status, StoreStatus::Failed);
        assert!(app.console.contains("ZNTH_ERROR: DB init error."));
    }

    #[test]
    fn test_unexpected_reply_is_ignored() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::StoreCompleted(Ok(StoreReply::Deleted))),
            Effect::None
        );
        assert!(app.console.lines().is_empty());
    }

    #[test]
    fn test_forget_thoughts_redraws_welcome() {
        let mut app = test_app();
        submit(&mut app, "date");
        submit(&mut app, "forget_thoughts");
        assert_eq!(app.console.texts()[0], ">>> WELCOME, BACKTHINKER? Memo <<<");
    }

    #[tokio::test]
    async fn test_edit_before_store_ready_reports_not_ready() {
        let mut app = test_app();
        drive(&mut app, None, "edit_thought").await;
        drive(&mut app, None, "1").await;
        assert!(app.mode.is_command());
        assert_eq!(
            app.console.texts().last().copied(),
            Some("ZNTH_ERROR: DB not ready.")
        );
    }

    #[tokio::test]
    async fn test_full_new_thought_against_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonThoughtStore::open(dir.path()).await.unwrap();
        let store: Option<&dyn ThoughtStore> = Some(store.as_ref());
        let mut app = test_app();

        for line in ["new_thought", "one", "two", "save", "Pair"] {
            drive(&mut app, store, line).await;
        }
        assert!(app.console.contains("THOUGHT SAVED: \"Pair\" (ID: 1)"));

        drive(&mut app, store, "view_thought 1").await;
        let texts = app.console.texts();
        assert_eq!(texts[1], "Title: Pair");
        assert!(texts.contains(&"one"));
        assert!(texts.contains(&"two"));
    }
}
