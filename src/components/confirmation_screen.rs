// ABOUTME: Confirmation screen - celebratory summary after a submitted listing
// Everything shown here is decoded from the handoff query string, so the
// screen only ever sees what actually crossed the wizard boundary

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    WARNING_ORANGE,
};
use crate::app::AppState;

pub struct ConfirmationScreenComponent;

impl ConfirmationScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let Some(payload) = state.confirmation_payload() else {
            return;
        };

        let dialog = centered_rect(70, 80, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SELECTION_GREEN))
            .style(Style::default().bg(PANEL_BG))
            .title(" 🎉 Listing Submitted ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(dialog);
        frame.render_widget(block, dialog);

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", Style::default()),
                Span::styled(
                    payload.business_name.clone(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" is on its way to the directory!", Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(""),
        ];

        if let Some(category) = payload.category {
            lines.push(Line::from(vec![
                Span::styled("  Category   ", Style::default().fg(MUTED_GRAY)),
                Span::styled(category.label(), Style::default().fg(CORNFLOWER_BLUE)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("  WhatsApp   ", Style::default().fg(MUTED_GRAY)),
            Span::styled(payload.whatsapp_number.clone(), Style::default().fg(SOFT_WHITE)),
        ]));

        if !payload.vibe_tags.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("  Vibes      ", Style::default().fg(MUTED_GRAY)),
                Span::styled(payload.vibe_tags.join("  "), Style::default().fg(GOLD)),
            ]));
        }

        lines.push(Line::from(""));
        let status_line = if payload.verification_skipped {
            Line::from(vec![
                Span::styled("  ⚠ ", Style::default().fg(WARNING_ORANGE)),
                Span::styled(
                    "Listed as unverified. Add your documents any time to get the badge.",
                    Style::default().fg(WARNING_ORANGE),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(SELECTION_GREEN)),
                Span::styled(
                    "Verification documents received. Review usually takes 2-3 days.",
                    Style::default().fg(SELECTION_GREEN),
                ),
            ])
        };
        lines.push(status_line);

        let mut extras = vec![];
        if payload.has_photos {
            extras.push("photos");
        }
        if payload.has_id_document {
            extras.push("ID document");
        }
        if !extras.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("  Attached   ", Style::default().fg(MUTED_GRAY)),
                Span::styled(extras.join(", "), Style::default().fg(SOFT_WHITE)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press Enter to continue",
            Style::default().fg(MUTED_GRAY),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for ConfirmationScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
