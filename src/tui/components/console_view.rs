//! # ConsoleView Component
//!
//! Scrollable view of the journal's console output.
//!
//! ## Responsibilities
//!
//! - Display the console lines with per-kind styling
//! - Wrap long lines to the viewport width
//! - Manage scrolling and bottom-pinning
//! - Cache wrapped line heights between frames
//!
//! ## Architecture
//!
//! `ConsoleView` is a transient component (created each frame) that wraps
//! `&'a mut ConsoleViewState` (persistent state) and the `Console` (props).
//!
//! The console is append-only between clears, so cached heights stay valid
//! until the width changes or the console generation moves on.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::console::{Console, ConsoleLine, LineKind};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Layout and scroll state for the console view.
/// Must be persisted in the parent TuiState.
pub struct ConsoleViewState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for ConsoleViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true,
            viewport_height: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        self.layout.total_height().saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// True when the user has scrolled up and output exists below the viewport.
    pub fn has_unseen_content(&self) -> bool {
        !self.stick_to_bottom && self.scroll_state.offset().y < self.max_offset()
    }
}

/// Scrollable console component.
/// Created fresh each frame with references to state and data.
pub struct ConsoleView<'a> {
    pub state: &'a mut ConsoleViewState,
    pub console: &'a Console,
    /// Base colours from the active theme
    pub style: Style,
}

impl<'a> ConsoleView<'a> {
    pub fn new(state: &'a mut ConsoleViewState, console: &'a Console, style: Style) -> Self {
        Self {
            state,
            console,
            style,
        }
    }

    fn line_style(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Output | LineKind::Rule => self.style,
            LineKind::Echo => self.style.add_modifier(Modifier::BOLD),
            LineKind::Info => self.style.add_modifier(Modifier::ITALIC),
            LineKind::Error => self.style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }
}

/// Wrap one console line to `width` columns. Blank lines still take a row.
pub fn wrap_line(line: &ConsoleLine, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    if line.kind == LineKind::Rule {
        return vec!["─".repeat(width)];
    }
    if line.text.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(&line.text, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

fn line_height(line: &ConsoleLine, width: u16) -> u16 {
    u16::try_from(wrap_line(line, width).len()).unwrap_or(u16::MAX)
}

impl<'a> Component for ConsoleView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let lines = self.console.lines();

        // A cleared console is a new screen: follow it from the bottom again
        if self.state.layout.generation != self.console.generation() {
            self.state.stick_to_bottom = true;
        }

        // 1. Update layout cache
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(lines.len(), content_width, self.console.generation());
        layout.heights.truncate(reusable);
        for line in lines.iter().skip(layout.heights.len()) {
            layout.heights.push(line_height(line, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(lines.len(), content_width, self.console.generation());

        let total_height = self.state.layout.total_height();

        // 2. Pin or clamp the offset before choosing which lines to draw
        self.state.viewport_height = area.height;
        if self.state.stick_to_bottom {
            let bottom = self.state.max_offset();
            self.state.scroll_state.set_offset(Position { x: 0, y: bottom });
        } else {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible lines into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(Block::new().style(self.style), scroll_view.area());

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let line = &lines[i];
            let height = self.state.layout.heights[i];
            let rows: Vec<Line> = wrap_line(line, content_width)
                .into_iter()
                .map(Line::from)
                .collect();
            let paragraph = Paragraph::new(rows).style(self.line_style(line.kind));
            scroll_view.render_widget(paragraph, Rect::new(0, y_offset, content_width, height));
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Scrolling lives on the state because `ConsoleView` is rebuilt every frame.
impl EventHandler for ConsoleViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::CursorEnd => {
                self.stick_to_bottom = true;
                let bottom = self.max_offset();
                self.scroll_state.set_offset(Position { x: 0, y: bottom });
            }
            _ => {}
        }
        None
    }
}

/// Cached wrapped-line heights
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    line_count: usize,
    content_width: u16,
    generation: u64,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            line_count: 0,
            content_width: 0,
            generation: 0,
        }
    }

    pub fn reusable_count(&self, line_count: usize, content_width: u16, generation: u64) -> usize {
        if self.content_width != content_width || self.generation != generation {
            return 0;
        }
        // Fewer lines than cached without a generation bump should not happen
        if line_count < self.line_count {
            return 0;
        }
        self.heights.len().min(line_count)
    }

    pub fn update_metadata(&mut self, line_count: usize, content_width: u16, generation: u64) {
        self.line_count = line_count;
        self.content_width = content_width;
        self.generation = generation;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}
