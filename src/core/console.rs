//! # Console Scrollback
//!
//! The append-only text surface the journal writes to. The reducer pushes
//! lines here; the TUI only reads them.
//!
//! Lines are never edited in place. The whole buffer is cleared at a few
//! well-defined points (welcome screen, entering composition, viewing a
//! thought) and `generation` is bumped so renderers can drop layout caches.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Regular program output.
    Output,
    /// The user's own submission, echoed back.
    Echo,
    /// `ZNTH_INFO` hints.
    Info,
    /// `ZNTH_ERROR` / `ZNTH_USAGE` lines.
    Error,
    /// Horizontal separator, drawn across the full width.
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Console {
    lines: Vec<ConsoleLine>,
    generation: u64,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&mut self, text: impl Into<String>) {
        self.push(LineKind::Output, text);
    }

    pub fn echo(&mut self, text: impl Into<String>) {
        self.push(LineKind::Echo, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(LineKind::Info, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(LineKind::Error, text);
    }

    pub fn rule(&mut self) {
        self.push(LineKind::Rule, String::new());
    }

    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(ConsoleLine {
            kind,
            text: text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.generation += 1;
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    /// Bumped on every `clear()`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Plain text of every line, handy in tests.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }
}
