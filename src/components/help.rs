// ABOUTME: Help overlay listing keyboard shortcuts per screen

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use super::theme::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 80, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let sections: &[(&str, &[(&str, &str)])] = &[
            (
                "Everywhere",
                &[("q / Esc", "back or quit"), ("?", "toggle this help")],
            ),
            (
                "Home",
                &[
                    ("b", "browse the directory"),
                    ("n", "start a new listing"),
                    ("d", "owner dashboard"),
                    ("s", "sign in"),
                ],
            ),
            (
                "Browse",
                &[
                    ("type", "search as you type"),
                    ("↑ ↓", "move through results"),
                    ("Enter", "open business detail"),
                    ("Tab", "cycle category filter"),
                    ("Ctrl+V", "verified-only toggle"),
                    ("Ctrl+U", "clear search and filters"),
                ],
            ),
            (
                "Listing wizard",
                &[
                    ("Tab / ↑ ↓", "move between fields"),
                    ("← →", "change picker options"),
                    ("Space", "toggle tags and files"),
                    ("Enter", "continue (submit on step 3)"),
                    ("Ctrl+B", "previous step"),
                    ("Ctrl+S", "skip verification"),
                    ("Alt+1..3", "jump to a step"),
                ],
            ),
        ];

        let mut lines = vec![];
        for (section, entries) in sections {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {section}"),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )));
            for (keys, action) in *entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {keys:<12}"), Style::default().fg(SOFT_WHITE)),
                    Span::styled(*action, Style::default().fg(MUTED_GRAY)),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
