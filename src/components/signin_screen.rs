// ABOUTME: Sign-in screen - centered email/password form (mocked auth)

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER,
};
use crate::app::state::SignInFocus;
use crate::app::AppState;

pub struct SignInScreenComponent;

impl SignInScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let dialog = centered_rect(50, 60, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Sign In ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(dialog);
        frame.render_widget(block, dialog);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(2), // Error line
                Constraint::Min(1),    // Hint
            ])
            .split(inner);

        self.render_field(
            frame,
            layout[0],
            "Email",
            &state.sign_in.email,
            state.sign_in.focus == SignInFocus::Email,
            false,
        );
        self.render_field(
            frame,
            layout[1],
            "Password",
            &state.sign_in.password,
            state.sign_in.focus == SignInFocus::Password,
            true,
        );

        if let Some(ref error) = state.sign_in.error {
            let error_line = Paragraph::new(Line::from(Span::styled(
                format!("✗ {error}"),
                Style::default().fg(ERROR_RED),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(error_line, layout[2]);
        }

        let hint = Paragraph::new(Line::from(Span::styled(
            "Any email and password will do for now",
            Style::default().fg(MUTED_GRAY),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, layout[3]);
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
        masked: bool,
    ) {
        let shown = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };

        let mut spans = vec![Span::styled(shown, Style::default().fg(SOFT_WHITE))];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(SELECTION_GREEN)));
        }

        let border_color = if focused { SELECTION_GREEN } else { SUBDUED_BORDER };
        let field = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {label} ")),
        );
        frame.render_widget(field, area);
    }
}

impl Default for SignInScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
