// ABOUTME: Detail screen - full record for a single business

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
};
use crate::app::AppState;

pub struct DetailScreenComponent;

impl DetailScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let Some(business) = state.detail_business() else {
            let missing = Paragraph::new(Line::from(Span::styled(
                "Business not found",
                Style::default().fg(MUTED_GRAY),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(missing, area);
            return;
        };

        let mut title_spans = vec![Span::styled(
            format!(" {} ", business.name),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )];
        if business.verified {
            title_spans.push(Span::styled(
                "✓ Verified ",
                Style::default().fg(SELECTION_GREEN),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(Line::from(title_spans));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Category  ", Style::default().fg(MUTED_GRAY)),
                Span::styled(business.category.label(), Style::default().fg(CORNFLOWER_BLUE)),
            ]),
            Line::from(vec![
                Span::styled("  Location  ", Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    format!("{}, {}", business.location, business.city),
                    Style::default().fg(SOFT_WHITE),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Rating    ", Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    format!("★ {:.1}", business.rating),
                    Style::default().fg(GOLD),
                ),
                Span::styled(
                    format!("  from {} reviews", business.review_count),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", Style::default()),
                Span::styled(business.description.clone(), Style::default().fg(SOFT_WHITE)),
            ]),
        ];

        let detail = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(detail, inner);
    }
}

impl Default for DetailScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
