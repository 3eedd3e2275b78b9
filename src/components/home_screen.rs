// ABOUTME: Home screen - landing view with tagline and quick actions

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
};
use crate::app::AppState;

pub struct HomeScreenComponent;

impl HomeScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(7), // Banner
                Constraint::Length(3), // Tagline
                Constraint::Min(8),    // Actions
                Constraint::Length(1), // Session line
            ])
            .split(area);

        let banner = vec![
            r"  _     _       _ _     _   ",
            r" | |__ (_)_____| (_)___| |_ ",
            r" | '_ \| |_  / | | / __| __|",
            r" | |_) | |/ /| | | \__ \ |_ ",
            r" |_.__/|_/___|_|_|_|___/\__|",
        ];
        let banner_lines: Vec<Line> = banner
            .iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(GOLD))))
            .collect();
        frame.render_widget(
            Paragraph::new(banner_lines).alignment(Alignment::Center),
            layout[0],
        );

        let tagline = Paragraph::new(Line::from(vec![
            Span::styled("Discover Nigerian businesses. ", Style::default().fg(SOFT_WHITE)),
            Span::styled(
                "Get your own listed in minutes.",
                Style::default().fg(CORNFLOWER_BLUE),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(tagline, layout[1]);

        let count = state.directory.len();
        let actions = vec![
            ("b", format!("Browse the directory ({count} businesses)")),
            ("n", "List your business (4 quick steps)".to_string()),
            ("d", "Owner dashboard".to_string()),
            ("s", "Sign in".to_string()),
        ];

        let action_lines: Vec<Line> = actions
            .iter()
            .map(|(key, label)| {
                Line::from(vec![
                    Span::styled(
                        format!("  [{key}] "),
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(label.clone(), Style::default().fg(SOFT_WHITE)),
                ])
            })
            .collect();

        let actions_widget = Paragraph::new(action_lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORNFLOWER_BLUE))
                .style(Style::default().bg(PANEL_BG))
                .title(" Get Started ")
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(actions_widget, layout[2]);

        let session_line = match state.session.current_user() {
            Some(user) => Line::from(vec![
                Span::styled("● ", Style::default().fg(SELECTION_GREEN)),
                Span::styled(
                    format!("Signed in as {}", user.email),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]),
            None => Line::from(Span::styled(
                "Not signed in",
                Style::default().fg(MUTED_GRAY),
            )),
        };
        frame.render_widget(
            Paragraph::new(session_line).alignment(Alignment::Center),
            layout[3],
        );
    }
}

impl Default for HomeScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
