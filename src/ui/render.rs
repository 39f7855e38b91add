use crate::ui::app::{App, BannerKind, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{form_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PASSWORD_MASK: char = '•';

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.login().is_loading), header);
    frame.render_widget(Clear, body);
    frame.render_widget(Footer::new().widget(footer), footer);

    let regions = form_regions(body);
    render_field(
        frame,
        regions.email,
        " Email ",
        app.email_input().to_string(),
        app.focus() == Focus::Email,
    );
    render_field(
        frame,
        regions.password,
        " Password ",
        masked_password(app),
        app.focus() == Focus::Password,
    );
    render_button(frame, regions.button, app);
    render_banner(frame, regions.banner, app);
}

fn masked_password(app: &App) -> String {
    if app.password_visible() {
        app.password_input().to_string()
    } else {
        PASSWORD_MASK
            .to_string()
            .repeat(app.password_input().chars().count())
    }
}

fn render_field(frame: &mut Frame<'_>, area: Rect, title: &'static str, value: String, focused: bool) {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let cursor = if focused { "▏" } else { "" };
    let line = Line::from(vec![
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
        Span::styled(cursor, Style::default().fg(ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_button(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let line = if app.login().is_loading {
        let spinner = SPINNER_FRAMES[(app.spinner_tick() as usize) % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(
                "Logging in...",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        ])
    } else {
        let style = if app.focus() == Focus::Submit {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Line::from(Span::styled(" Log in ", style))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_banner(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(banner) = app.banner() else {
        return;
    };
    let color = match banner.kind {
        BannerKind::Error => STATUS_ERROR,
        BannerKind::Success => STATUS_OK,
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        banner.text.clone(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthResult, ErrorKind};
    use crate::ui::login::LoginState;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_fields_and_button() {
        let app = App::new(Duration::from_secs(3));
        let screen = render(&app);
        assert!(screen.contains("Email"));
        assert!(screen.contains("Password"));
        assert!(screen.contains("Log in"));
    }

    #[test]
    fn password_is_masked_until_toggled() {
        let mut app = App::new(Duration::from_secs(3));
        app.set_focus(Focus::Password);
        for ch in "s3cret".chars() {
            app.insert_char(ch);
        }
        let screen = render(&app);
        assert!(!screen.contains("s3cret"));
        assert!(screen.contains("••••••"));

        app.toggle_password_visibility();
        assert!(render(&app).contains("s3cret"));
    }

    #[test]
    fn loading_replaces_button_with_spinner() {
        let mut app = App::new(Duration::from_secs(3));
        app.on_login_changed(LoginState::pending());
        let screen = render(&app);
        assert!(screen.contains("Logging in..."));
        assert!(!screen.contains(" Log in "));
    }

    #[test]
    fn banner_shows_error_kind() {
        let mut app = App::new(Duration::from_secs(3));
        app.on_login_changed(LoginState::resolved(AuthResult::Failure(
            ErrorKind::WrongCredentials,
        )));
        assert!(render(&app).contains("WRONG_CREDENTIALS"));
    }
}
