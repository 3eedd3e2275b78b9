// ABOUTME: Owner dashboard screen - tabbed analytics, gallery, documents
// and settings, all backed by mocked dashboard state

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};

use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER, WARNING_ORANGE,
};
use crate::app::state::DashboardTab;
use crate::app::AppState;
use crate::models::DraftStatus;

pub struct DashboardScreenComponent;

impl DashboardScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Greeting
                Constraint::Length(3), // Tabs
                Constraint::Min(6),    // Tab content
            ])
            .split(area);

        self.render_greeting(frame, layout[0], state);
        self.render_tabs(frame, layout[1], state);

        match state.dashboard.tab {
            DashboardTab::Analytics => self.render_analytics(frame, layout[2], state),
            DashboardTab::Gallery => self.render_gallery(frame, layout[2], state),
            DashboardTab::Documents => self.render_documents(frame, layout[2], state),
            DashboardTab::Settings => self.render_settings(frame, layout[2], state),
        }
    }

    fn render_greeting(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let email = state
            .session
            .current_user()
            .map(|u| u.email.clone())
            .unwrap_or_default();
        let greeting = Paragraph::new(Line::from(vec![
            Span::styled(" Welcome back, ", Style::default().fg(SOFT_WHITE)),
            Span::styled(email, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        ]));
        frame.render_widget(greeting, area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = DashboardTab::all()
            .iter()
            .map(|tab| Line::from(tab.title()))
            .collect();
        let selected = DashboardTab::all()
            .iter()
            .position(|t| *t == state.dashboard.tab)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(MUTED_GRAY))
            .highlight_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .divider(Span::styled("│", Style::default().fg(SUBDUED_BORDER)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(CORNFLOWER_BLUE))
                    .style(Style::default().bg(PANEL_BG)),
            );
        frame.render_widget(tabs, area);
    }

    fn render_analytics(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = self.content_block("Profile Views");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let max_views = state
            .dashboard
            .analytics
            .iter()
            .map(|w| w.profile_views)
            .max()
            .unwrap_or(1)
            .max(1);

        let mut lines = vec![Line::from("")];
        for week in &state.dashboard.analytics {
            let bar_width = (week.profile_views * 30 / max_views) as usize;
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", week.week), Style::default().fg(MUTED_GRAY)),
                Span::styled("█".repeat(bar_width.max(1)), Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(
                    format!(" {} views", week.profile_views),
                    Style::default().fg(SOFT_WHITE),
                ),
                Span::styled(
                    format!(
                        "  ({} in search, {} contacts)",
                        week.search_appearances, week.contact_clicks
                    ),
                    Style::default().fg(SELECTION_GREEN),
                ),
            ]));
        }
        lines.push(Line::from(""));

        if !state.drafts.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Recent submissions",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )));
            for draft in &state.drafts {
                let (status_style, indicator) = match draft.status {
                    DraftStatus::PendingReview => {
                        (Style::default().fg(SELECTION_GREEN), draft.status.indicator())
                    }
                    DraftStatus::Unverified => {
                        (Style::default().fg(WARNING_ORANGE), draft.status.indicator())
                    }
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {indicator} "), status_style),
                    Span::styled(draft.business_name.clone(), Style::default().fg(SOFT_WHITE)),
                    Span::styled(
                        format!("  {}", draft.status.label()),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_gallery(&self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let block = self.content_block("Gallery");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Your photos appear here once your listing is live.",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  ▢ interior   ▢ exterior   ▢ team",
                Style::default().fg(SUBDUED_BORDER),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_documents(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = self.content_block("Verification Documents");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let any_pending = state
            .drafts
            .iter()
            .any(|d| d.status == DraftStatus::PendingReview);

        let status_line = if any_pending {
            Line::from(vec![
                Span::styled("  ● ", Style::default().fg(SELECTION_GREEN)),
                Span::styled(
                    "Documents under review (usually 2-3 days)",
                    Style::default().fg(SOFT_WHITE),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled("  ⚠ ", Style::default().fg(WARNING_ORANGE)),
                Span::styled(
                    "No verification documents on file",
                    Style::default().fg(SOFT_WHITE),
                ),
            ])
        };

        let lines = vec![
            Line::from(""),
            status_line,
            Line::from(""),
            Line::from(Span::styled(
                "  Accepted: CAC certificate, National ID, Driver's License,",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(Span::styled(
                "  International Passport, Voter's Card",
                Style::default().fg(MUTED_GRAY),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_settings(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = self.content_block("Settings");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let settings = [
            ("Notifications", state.dashboard.notifications_enabled),
            ("Listing visible", state.dashboard.listing_visible),
        ];

        let mut lines = vec![Line::from("")];
        for (idx, (label, enabled)) in settings.iter().enumerate() {
            let focused = state.dashboard.selected_setting == idx;
            let marker = if *enabled { "[on] " } else { "[off]" };
            let marker_style = if *enabled {
                Style::default().fg(SELECTION_GREEN)
            } else {
                Style::default().fg(MUTED_GRAY)
            };
            let label_style = if focused {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_WHITE)
            };
            lines.push(Line::from(vec![
                Span::styled(if focused { "  ▶ " } else { "    " }, label_style),
                Span::styled(marker, marker_style),
                Span::styled(format!(" {label}"), label_style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn content_block(&self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {title} "))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }
}

impl Default for DashboardScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
