// ABOUTME: Browse screen - search input, filters and result list

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER,
};
use crate::app::AppState;

pub struct BrowseScreenComponent;

impl BrowseScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Length(1), // Active filters
                Constraint::Min(5),    // Results
            ])
            .split(area);

        self.render_search_input(frame, layout[0], state);
        self.render_filter_line(frame, layout[1], state);
        self.render_results(frame, layout[2], state);
    }

    fn render_search_input(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let input_line = Line::from(vec![
            Span::styled(&state.browse.input, Style::default().fg(SOFT_WHITE)),
            Span::styled("█", Style::default().fg(SELECTION_GREEN)),
        ]);

        let input = Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORNFLOWER_BLUE))
                .style(Style::default().bg(PANEL_BG))
                .title(" 🔎 Search businesses ")
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(input, area);
    }

    fn render_filter_line(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let category_label = state
            .browse
            .category_filter
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| "All categories".to_string());

        let mut spans = vec![
            Span::styled(" Category: ", Style::default().fg(MUTED_GRAY)),
            Span::styled(category_label, Style::default().fg(CORNFLOWER_BLUE)),
            Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)),
        ];
        if state.browse.verified_only {
            spans.push(Span::styled("✓ Verified only", Style::default().fg(SELECTION_GREEN)));
        } else {
            spans.push(Span::styled("All businesses", Style::default().fg(MUTED_GRAY)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = format!(" Results ({}) ", state.browse.results.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(title)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        if state.browse.results.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No businesses match your search",
                    Style::default().fg(MUTED_GRAY),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let show_badges = state.config.ui_preferences.show_verified_badges;
        let show_ratings = state.config.ui_preferences.show_ratings;

        let items: Vec<ListItem> = state
            .browse
            .results
            .iter()
            .map(|business| {
                let mut spans = vec![
                    Span::styled(business.name.clone(), Style::default().fg(SOFT_WHITE)),
                    Span::styled(
                        format!("  {}", business.category.label()),
                        Style::default().fg(CORNFLOWER_BLUE),
                    ),
                    Span::styled(
                        format!("  {}", business.city),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ];
                if show_ratings {
                    spans.push(Span::styled(
                        format!("  ★ {:.1} ({})", business.rating, business.review_count),
                        Style::default().fg(GOLD),
                    ));
                }
                if show_badges && business.verified {
                    spans.push(Span::styled("  ✓", Style::default().fg(SELECTION_GREEN)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(SUBDUED_BORDER)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(state.browse.selected);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Default for BrowseScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
