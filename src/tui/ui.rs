use crate::core::state::App;
use crate::core::theme::{Rgb, Theme};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{ConsoleView, TitleBar};

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Console colours for a theme.
pub fn base_style(theme: &Theme) -> Style {
    Style::default().fg(color(theme.text)).bg(color(theme.background))
}

/// Input box colours; falls back to the console background.
pub fn input_style(theme: &Theme) -> Style {
    let bg = theme.input_background.unwrap_or(theme.background);
    Style::default().fg(color(theme.text)).bg(color(bg))
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let base = base_style(app.theme);

    // Paint the whole screen first so gaps between widgets take the theme
    frame.render_widget(Block::new().style(base), frame.area());

    let layout = Layout::vertical([Length(1), Min(0), Length(INPUT_HEIGHT)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    // Console first: it decides whether there is unseen content
    ConsoleView::new(&mut tui.console_view, &app.console, base).render(frame, main_area);

    let mut title_bar = TitleBar::new(
        app.theme.name.to_string(),
        app.store_status.label().to_string(),
        app.mode.label().to_string(),
        app.status_message.clone(),
        tui.console_view.has_unseen_content(),
    );
    title_bar.style = base;
    title_bar.render(frame, title_area);

    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, w: u16, h: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        tui.sync_props(app);
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_welcome_screen_renders() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        let mut tui = TuiState::new();

        let terminal = draw(&app, &mut tui, 80, 40);
        let text = screen_text(&terminal);

        assert!(text.contains("ZENITH JOURNAL | classic_green"));
        assert!(text.contains("WELCOME, BACKTHINKER? Memo"));
        assert!(text.contains("[Memo]@BACKTHINKER:~$"));
    }

    #[test]
    fn test_theme_colours_applied() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::Submit("theme_color amber_retro".to_string()));
        let mut tui = TuiState::new();

        let terminal = draw(&app, &mut tui, 40, 10);
        let cell = &terminal.backend().buffer()[(0, 5)];
        assert_eq!(cell.bg, Color::Rgb(0x2E, 0x17, 0x00));
        assert_eq!(cell.fg, Color::Rgb(0xFF, 0xB0, 0x00));
    }

    #[test]
    fn test_light_mode_input_background() {
        let theme = crate::core::theme::find_or_default("light_mode");
        assert_eq!(input_style(theme).bg, Some(Color::Rgb(0xE0, 0xE0, 0xE0)));
        assert_eq!(base_style(theme).bg, Some(Color::Rgb(0xF0, 0xF0, 0xF0)));
    }

    #[test]
    fn test_busy_input_hides_cursor_prompt_kept() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::Submit("list_thoughts".to_string()));
        assert!(app.is_busy());
        let mut tui = TuiState::new();

        let terminal = draw(&app, &mut tui, 80, 24);
        assert!(tui.input_box.dimmed);
        assert!(screen_text(&terminal).contains("Working..."));
    }
}
