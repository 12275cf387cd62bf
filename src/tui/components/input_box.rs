//! # InputBox Component
//!
//! The single-line command input, drawn as `<prompt><buffer>` like a shell.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter), including empty lines
//! - Scroll horizontally so the cursor stays visible
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. The prompt, the colours and the
//! `dimmed` flag are props synced from `App` every frame. While dimmed (a
//! storage call is in flight) no cursor is drawn and the parent withholds
//! `Submit` events, so typed text is kept until the store answers.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Top + bottom borders consumed vertically
pub const INPUT_HEIGHT: u16 = 3;
/// Left + right borders consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 2;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the line (Enter pressed). May be empty.
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Prompt text shown before the buffer (Prop)
    pub prompt: String,
    /// Input is disabled while a store call is pending (Prop)
    pub dimmed: bool,
    /// Colours from the active theme (Prop)
    pub style: Style,
    /// Cursor position as byte offset in buffer
    cursor: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            prompt: String::new(),
            dimmed: false,
            style: Style::default(),
            cursor: 0,
        }
    }

    /// Display column of the cursor, counting the prompt.
    fn cursor_column(&self) -> u16 {
        let width = self.prompt.width() + self.buffer[..self.cursor].width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Horizontal scroll that keeps the cursor inside `inner_width` columns.
    fn scroll_offset(&self, inner_width: u16) -> u16 {
        if inner_width == 0 {
            return 0;
        }
        self.cursor_column().saturating_sub(inner_width - 1)
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let offset = self.scroll_offset(inner_width);

        let text_style = if self.dimmed {
            self.style.add_modifier(Modifier::DIM)
        } else {
            self.style
        };
        let line = Line::from(vec![
            Span::styled(self.prompt.as_str(), text_style.add_modifier(Modifier::BOLD)),
            Span::styled(self.buffer.as_str(), text_style),
        ]);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(text_style)
            .style(self.style);

        let input = Paragraph::new(line)
            .block(block)
            .style(self.style)
            .scroll((0, offset));
        frame.render_widget(input, area);

        if !self.dimmed {
            let x = area.x + 1 + self.cursor_column().saturating_sub(offset);
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let flattened = text.replace(['\r', '\n'], " ");
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}
