//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Local, TimeZone};

use crate::core::action::{Action, Effect, update};
use crate::core::clock::Clock;
use crate::core::state::App;
use crate::core::store::{ThoughtStore, execute};
use crate::core::thought::{Thought, ThoughtId};

/// A clock that starts at 2030-01-02 03:04:05 local time and advances one
/// second per reading, so consecutive timestamps always differ.
pub fn ticking_clock() -> Clock {
    let ticks = Arc::new(AtomicI64::new(0));
    Arc::new(move || {
        let n = ticks.fetch_add(1, Ordering::SeqCst);
        let base = Local
            .with_ymd_and_hms(2030, 1, 2, 3, 4, 5)
            .earliest()
            .unwrap_or_else(Local::now);
        base + chrono::Duration::seconds(n)
    })
}

/// Creates a test App named "Memo" with the default theme and a ticking clock.
pub fn test_app() -> App {
    App::new("Memo".to_string(), "classic_green", ticking_clock())
}

pub fn sample_thought(id: u64, title: &str, content: &[&str]) -> Thought {
    Thought {
        id: ThoughtId(id),
        title: title.to_string(),
        timestamp: "[2024-05-01 10:00:00 +00:00]".to_string(),
        content: content.iter().map(|l| l.to_string()).collect(),
        last_modified: "2024-05-01T10:00:00.000Z".to_string(),
    }
}

/// Submit a line and run any resulting store request to completion,
/// the way the event loop would.
pub async fn drive(app: &mut App, store: Option<&dyn ThoughtStore>, line: &str) -> Effect {
    let mut effect = update(app, Action::Submit(line.to_string()));
    while let Effect::Store(request) = effect {
        let result = execute(store, request).await;
        effect = update(app, Action::StoreCompleted(result));
    }
    effect
}
