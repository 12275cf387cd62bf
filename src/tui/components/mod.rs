//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing theme, storage and mode
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Prompted single-line input
//! - `ConsoleView`: Scrollable console output with layout caching
//!
//! Each component file holds its state types, event types, rendering,
//! event handling and tests. Components receive external data as props
//! rather than reaching into `App` directly.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── console_view.rs  (Scrollable console)
//! └── input_box.rs     (Prompted input line)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod console_view;
pub mod input_box;
pub use console_view::{ConsoleView, ConsoleViewState};
pub use input_box::{InputBox, InputEvent};
