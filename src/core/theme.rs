//! Colour themes for the console.
//!
//! Colours are plain RGB triples so `core` stays free of terminal types;
//! the TUI converts them when drawing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB`, the form terminals accept in OSC colour sequences.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    /// Foreground and caret colour.
    pub text: Rgb,
    /// `None` means the input box inherits the background.
    pub input_background: Option<Rgb>,
}

pub const DEFAULT_THEME: &str = "classic_green";

pub const THEMES: &[Theme] = &[
    Theme {
        name: "classic_green",
        background: Rgb(0x00, 0x00, 0x00),
        text: Rgb(0x00, 0xFF, 0x00),
        input_background: None,
    },
    Theme {
        name: "amber_retro",
        background: Rgb(0x2E, 0x17, 0x00),
        text: Rgb(0xFF, 0xB0, 0x00),
        input_background: None,
    },
    Theme {
        name: "blue_glow",
        background: Rgb(0x05, 0x0A, 0x17),
        text: Rgb(0x00, 0xBF, 0xFF),
        input_background: None,
    },
    Theme {
        name: "light_mode",
        background: Rgb(0xF0, 0xF0, 0xF0),
        text: Rgb(0x22, 0x22, 0x22),
        input_background: Some(Rgb(0xE0, 0xE0, 0xE0)),
    },
];

/// Exact, already-lowercased lookup.
pub fn find(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

/// Theme keys joined for display, in declaration order.
pub fn names() -> String {
    THEMES.iter().map(|t| t.name).collect::<Vec<_>>().join(", ")
}

/// Lookup that falls back to the default theme for unknown names.
pub fn find_or_default(name: &str) -> &'static Theme {
    find(name).unwrap_or(&THEMES[0])
}
