//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms between polls and only
//! redraws after input, a resize or a background reply.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call. The caret colour follows the theme through OSC 12.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::style::Print;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::error::StoreError;
use crate::core::prefs;
use crate::core::state::App;
use crate::core::store::{JsonThoughtStore, StoreRequest, ThoughtStore, execute};
use crate::core::theme::Theme;
use crate::tui::component::EventHandler;
use crate::tui::components::{ConsoleViewState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub console_view: ConsoleViewState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            console_view: ConsoleViewState::new(),
            input_box: InputBox::new(),
        }
    }

    /// Copy the props the input box shows from the core state.
    pub fn sync_props(&mut self, app: &App) {
        self.input_box.prompt = app.prompt();
        self.input_box.dimmed = app.is_busy();
        self.input_box.style = ui::input_style(app.theme);
    }
}

/// Messages from background tasks to the event loop.
enum Background {
    Action(Action),
    StoreOpened(Result<Arc<JsonThoughtStore>, StoreError>),
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Print("\x1b]112\x07"), // Reset caret colour
            Hide
        );
    }
}

/// OSC 12: set the terminal caret colour.
fn caret_colour_sequence(theme: &Theme) -> String {
    format!("\x1b]12;{}\x07", theme.text.hex())
}

fn apply_caret_colour(theme: &Theme) {
    let mut out = stdout();
    if let Err(e) = execute!(out, Print(caret_colour_sequence(theme))) {
        warn!("Failed to set caret colour: {}", e);
    }
    let _ = out.flush();
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let data_dir = config.data_dir.clone();
    let preferences = prefs::load(&data_dir);
    let mut app = App::from_config(&config, &preferences);
    let mut tui = TuiState::new();
    info!(
        "Starting journal for {} (theme {}, data dir {})",
        app.user_name,
        app.theme.name,
        data_dir.display()
    );

    // Channel for results from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_store_open(data_dir.clone(), tx.clone());
    let mut store: Option<Arc<JsonThoughtStore>> = None;

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let mut caret_theme = app.theme.name;
    apply_caret_colour(app.theme);

    update(&mut app, Action::Start);
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        tui.sync_props(&app);

        if caret_theme != app.theme.name {
            caret_theme = app.theme.name;
            apply_caret_colour(app.theme);
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        break 'main;
                    }
                }
                TuiEvent::Escape => {
                    let effect = update(&mut app, Action::Cancel);
                    if handle_effect(&mut app, effect, store.clone(), &data_dir, &tx) {
                        break 'main;
                    }
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.console_view.handle_event(&event);
                }
                // End re-pins the console and moves the input cursor
                TuiEvent::CursorEnd => {
                    tui.console_view.handle_event(&event);
                    tui.input_box.handle_event(&event);
                }
                // Keep the typed line in the box until the store answers
                TuiEvent::Submit if app.is_busy() => {}
                _ => {
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event) {
                        // New output should be visible even if the user had scrolled up
                        tui.console_view.stick_to_bottom = true;
                        let effect = update(&mut app, Action::Submit(text));
                        if handle_effect(&mut app, effect, store.clone(), &data_dir, &tx) {
                            break 'main;
                        }
                        // The reducer may have switched modes; refresh the prompt now
                        tui.sync_props(&app);
                    }
                }
            }
        }

        // Handle background task results
        while let Ok(message) = rx.try_recv() {
            needs_redraw = true;
            let action = match message {
                Background::StoreOpened(result) => {
                    let outcome = result.map(|opened| {
                        store = Some(opened);
                    });
                    Action::StoreOpened(outcome)
                }
                Background::Action(action) => action,
            };
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(&mut app, effect, store.clone(), &data_dir, &tx) {
                break 'main;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Carry out an effect. Returns true when the app should quit.
fn handle_effect(
    app: &mut App,
    effect: Effect,
    store: Option<Arc<JsonThoughtStore>>,
    data_dir: &std::path::Path,
    tx: &mpsc::Sender<Background>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Store(request) => {
            spawn_store_request(store, request, tx.clone());
            false
        }
        Effect::SavePreferences => {
            if let Err(e) = prefs::save(data_dir, &app.preferences()) {
                warn!("Failed to save preferences: {}", e);
                app.status_message = format!("Preferences not saved: {}", e);
            } else {
                app.status_message.clear();
            }
            false
        }
    }
}

fn spawn_store_open(data_dir: PathBuf, tx: mpsc::Sender<Background>) {
    info!("Opening thought store in {}", data_dir.display());
    tokio::spawn(async move {
        let result = JsonThoughtStore::open(&data_dir).await;
        if tx.send(Background::StoreOpened(result)).is_err() {
            warn!("Failed to send store open result: receiver dropped");
        }
    });
}

fn spawn_store_request(
    store: Option<Arc<JsonThoughtStore>>,
    request: StoreRequest,
    tx: mpsc::Sender<Background>,
) {
    debug!("Spawning store request: {:?}", request);
    tokio::spawn(async move {
        let store_ref = store.as_deref().map(|s| s as &dyn ThoughtStore);
        let result = execute(store_ref, request).await;
        if tx
            .send(Background::Action(Action::StoreCompleted(result)))
            .is_err()
        {
            warn!("Failed to send store reply: receiver dropped");
        }
    });
}
