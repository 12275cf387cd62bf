//! # Application State
//!
//! Core session state for Zenith. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── mode: Mode                   // how the next line is interpreted
//! ├── console: Console             // scrollback shown to the user
//! ├── user_name: String            // shown in prompts and the welcome banner
//! ├── theme: &'static Theme        // active colours
//! ├── pending: Option<PendingOp>   // storage call in flight (input disabled)
//! ├── store_status: StoreStatus    // opening / ready / failed
//! ├── status_message: String       // status bar text
//! └── clock: Clock                 // time source for timestamps
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::clock::{self, Clock};
use crate::core::config::ResolvedConfig;
use crate::core::console::Console;
use crate::core::mode::Mode;
use crate::core::prefs::Preferences;
use crate::core::theme::{self, Theme};
use crate::core::thought::ThoughtId;

/// The storage call the reducer is waiting on, and what to do with its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOp {
    SaveNew { title: String },
    LoadForEdit(ThoughtId),
    SaveEdit { id: ThoughtId, title: String },
    Delete(ThoughtId),
    View(ThoughtId),
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Opening,
    Ready,
    Failed,
}

impl StoreStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StoreStatus::Opening => "db: opening",
            StoreStatus::Ready => "db: ready",
            StoreStatus::Failed => "db: unavailable",
        }
    }
}

pub struct App {
    pub mode: Mode,
    pub console: Console,
    pub user_name: String,
    pub theme: &'static Theme,
    /// Set while a storage call is in flight. Submissions are refused meanwhile.
    pub pending: Option<PendingOp>,
    pub store_status: StoreStatus,
    pub status_message: String,
    pub clock: Clock,
}

impl App {
    pub fn new(user_name: String, theme_name: &str, clock: Clock) -> Self {
        Self {
            mode: Mode::Command,
            console: Console::new(),
            user_name,
            theme: theme::find_or_default(theme_name),
            pending: None,
            store_status: StoreStatus::Opening,
            status_message: String::new(),
            clock,
        }
    }

    /// Build from the resolved config; persisted preferences win over it.
    pub fn from_config(config: &ResolvedConfig, prefs: &Preferences) -> Self {
        let user_name = prefs
            .user_name
            .clone()
            .unwrap_or_else(|| config.user_name.clone());
        let theme_name = prefs.theme_name.as_deref().unwrap_or(&config.theme);
        Self::new(user_name, theme_name, clock::system_clock())
    }

    pub fn prompt(&self) -> String {
        self.mode.prompt(&self.user_name)
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Snapshot of the settings that outlive the session.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            user_name: Some(self.user_name.clone()),
            theme_name: Some(self.theme.name.to_string()),
        }
    }
}
