//! # Core Application Logic
//!
//! This module contains Zenith's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session data) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   Store    │
//!          │  Adapter   │                │ (tokio fs) │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`mode`]: The interaction modes and their prompts
//! - [`command`]: Command-line parsing and the help table
//! - [`store`]: Async storage adapter for thoughts

pub mod action;
pub mod clock;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod mode;
pub mod prefs;
pub mod state;
pub mod store;
pub mod theme;
pub mod thought;
