// ABOUTME: Main layout component - dispatches rendering per view and overlays

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::{GOLD, MUTED_GRAY, PANEL_BG, SUBDUED_BORDER};
use super::{
    BrowseScreenComponent, ConfirmationScreenComponent, DashboardScreenComponent,
    DetailScreenComponent, HelpComponent, HomeScreenComponent, SignInScreenComponent,
    WizardScreenComponent,
};
use crate::app::{AppState, View};

pub struct LayoutComponent {
    home_screen: HomeScreenComponent,
    browse_screen: BrowseScreenComponent,
    detail_screen: DetailScreenComponent,
    signin_screen: SignInScreenComponent,
    wizard_screen: WizardScreenComponent,
    confirmation_screen: ConfirmationScreenComponent,
    dashboard_screen: DashboardScreenComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            home_screen: HomeScreenComponent::new(),
            browse_screen: BrowseScreenComponent::new(),
            detail_screen: DetailScreenComponent::new(),
            signin_screen: SignInScreenComponent::new(),
            wizard_screen: WizardScreenComponent::new(),
            confirmation_screen: ConfirmationScreenComponent::new(),
            dashboard_screen: DashboardScreenComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Screen content
                Constraint::Length(3), // Bottom menu bar
            ])
            .split(frame.size());

        match state.current_view {
            View::Home => self.home_screen.render(frame, layout[0], state),
            View::Browse => self.browse_screen.render(frame, layout[0], state),
            View::Detail => self.detail_screen.render(frame, layout[0], state),
            View::SignIn => self.signin_screen.render(frame, layout[0], state),
            View::Wizard => self.wizard_screen.render(frame, layout[0], state),
            View::Confirmation => self.confirmation_screen.render(frame, layout[0], state),
            View::Dashboard => self.dashboard_screen.render(frame, layout[0], state),
        }

        self.render_menu_bar(frame, layout[1], state);

        // Help overlay on top of everything
        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let spans = match state.current_view {
            View::Home => vec![
                hot("b"),
                desc("rowse "),
                hot("n"),
                desc("ew listing "),
                hot("d"),
                desc("ashboard "),
                hot("s"),
                desc("ign in "),
                sep(),
                hot("?"),
                desc(" help "),
                hot("q"),
                desc("uit"),
            ],
            View::Browse => vec![
                desc("type to search "),
                sep(),
                hot("↑↓"),
                desc(" select "),
                hot("Enter"),
                desc(" open "),
                hot("Tab"),
                desc(" category "),
                hot("^V"),
                desc(" verified "),
                sep(),
                hot("Esc"),
                desc(" home"),
            ],
            View::Detail => vec![hot("Esc"), desc(" back to results")],
            View::SignIn => vec![
                hot("Tab"),
                desc(" switch field "),
                hot("Enter"),
                desc(" continue "),
                sep(),
                hot("Esc"),
                desc(" cancel"),
            ],
            View::Wizard => vec![
                hot("Tab"),
                desc(" next field "),
                hot("←→"),
                desc(" options "),
                hot("Enter"),
                desc(" continue "),
                hot("^B"),
                desc(" back "),
                sep(),
                hot("Esc"),
                desc(" cancel"),
            ],
            View::Confirmation => vec![hot("Enter"), desc(" continue")],
            View::Dashboard => vec![
                hot("Tab"),
                desc(" switch tab "),
                hot("↑↓"),
                desc(" settings "),
                hot("Space"),
                desc(" toggle "),
                hot("n"),
                desc("ew listing "),
                hot("o"),
                desc(" sign out "),
                sep(),
                hot("Esc"),
                desc(" home"),
            ],
        };

        let menu = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .style(Style::default().bg(PANEL_BG)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn hot(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
}

fn desc(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(MUTED_GRAY))
}

fn sep() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(SUBDUED_BORDER))
}

/// Centered rectangle helper used by overlay screens
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
