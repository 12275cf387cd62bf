//! # TitleBar Component
//!
//! Top status bar showing journal state and notifications.
//!
//! ## Responsibilities
//!
//! - Display the active theme and storage status
//! - Display the current interaction mode
//! - Display transient status messages (e.g. "Working...")
//! - Show "↓ More" when there is console output below the scroll position
//!
//! TitleBar is purely presentational. Every field is a prop set by the
//! parent each frame, so it has no internal state to keep in sync.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub theme_name: String,
    /// Storage readiness, e.g. "db: ready"
    pub store_label: String,
    /// Short mode name, e.g. "command" or "composing_new"
    pub mode_label: String,
    pub status_message: String,
    pub has_unseen_content: bool,
    pub style: Style,
}

impl TitleBar {
    pub fn new(
        theme_name: String,
        store_label: String,
        mode_label: String,
        status_message: String,
        has_unseen_content: bool,
    ) -> Self {
        Self {
            theme_name,
            store_label,
            mode_label,
            status_message,
            has_unseen_content,
            style: Style::default(),
        }
    }

    pub fn title_text(&self) -> String {
        let mut parts = vec![
            "ZENITH JOURNAL".to_string(),
            self.theme_name.clone(),
            self.store_label.clone(),
            self.mode_label.clone(),
        ];
        if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        if self.has_unseen_content {
            parts.push("↓ More".to_string());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.title_text(), self.style.add_modifier(Modifier::REVERSED));
        frame.render_widget(span, area);
    }
}
