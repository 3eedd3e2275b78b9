// ABOUTME: Listing wizard screen - step progress, fields and inline errors
// Renders whichever step the controller is on; focus and picker indices come
// from the UI-side wizard state, values and errors from the controller

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER, WARNING_ORANGE,
};
use crate::app::state::VIBE_TAG_CATALOG;
use crate::app::AppState;
use crate::wizard::{FieldName, FileSlot, WizardController, WizardStep};

pub struct WizardScreenComponent;

impl WizardScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let Some(wizard) = state.wizard.as_ref() else {
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(10),   // Step content
                Constraint::Length(2), // Step hint
            ])
            .split(area);

        self.render_header(frame, layout[0], wizard);

        let submitting = state.wizard.as_ref().is_some_and(|w| w.is_submitting())
            || state.pending_async_action.is_some();
        if submitting {
            self.render_submitting(frame, layout[1]);
            return;
        }

        match wizard.step() {
            WizardStep::Identity => self.render_identity(frame, layout[1], state, wizard),
            WizardStep::Vibes => self.render_vibes(frame, layout[1], state, wizard),
            WizardStep::Verification => self.render_verification(frame, layout[1], state, wizard),
            WizardStep::Done => {}
        }

        self.render_step_hint(frame, layout[2], wizard.step());
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, wizard: &WizardController) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let step = wizard.step();
        let title = Paragraph::new(Line::from(vec![
            Span::styled("🏪 ", Style::default()),
            Span::styled(
                "List Your Business",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ·  Step {} of {}", step.number(), WizardStep::total()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], step);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, current: WizardStep) {
        let steps = WizardStep::all();
        let current_idx = current.number() - 1;

        let mut spans = vec![Span::styled("  ", Style::default())];
        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));
            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_identity(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        wizard: &WizardController,
    ) {
        let block = self.step_block(wizard.step());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Business name + error
                Constraint::Length(4), // Category + error
                Constraint::Length(4), // WhatsApp + error
                Constraint::Min(0),
            ])
            .split(inner);

        let focused = state.wizard_ui.control;
        self.render_text_field(
            frame,
            layout[0],
            "Business Name",
            &wizard.fields.business_name,
            focused == 0,
            wizard.fields.errors.get(FieldName::BusinessName),
        );
        let category_label = wizard
            .fields
            .category
            .map(|c| c.label())
            .unwrap_or("Select a category");
        self.render_picker(
            frame,
            layout[1],
            "Category",
            category_label,
            wizard.fields.category.is_some(),
            focused == 1,
            wizard.fields.errors.get(FieldName::Category),
        );
        self.render_text_field(
            frame,
            layout[2],
            "WhatsApp Number",
            &wizard.fields.whatsapp_number,
            focused == 2,
            wizard.fields.errors.get(FieldName::WhatsappNumber),
        );
    }

    fn render_vibes(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        wizard: &WizardController,
    ) {
        let block = self.step_block(wizard.step());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let tag_rows = VIBE_TAG_CATALOG.len() as u16;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),        // Tag hint
                Constraint::Length(tag_rows), // Tags
                Constraint::Length(1),        // Spacer
                Constraint::Length(3),        // Photo slots
                Constraint::Min(0),
            ])
            .split(inner);

        let selected_count = wizard.fields.vibe_tags.len();
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Pick the vibes that fit ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                format!("({selected_count} selected, first 3 shown on your listing)"),
                Style::default().fg(CORNFLOWER_BLUE),
            ),
        ]));
        frame.render_widget(hint, layout[0]);

        let focused = state.wizard_ui.control;
        let tag_lines: Vec<Line> = VIBE_TAG_CATALOG
            .iter()
            .enumerate()
            .map(|(idx, tag)| {
                let selected = wizard.fields.vibe_tags.iter().any(|t| t == tag);
                let marker = if selected { "[✓]" } else { "[ ]" };
                let marker_style = if selected {
                    Style::default().fg(SELECTION_GREEN)
                } else {
                    Style::default().fg(MUTED_GRAY)
                };
                let tag_style = if focused == idx {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                Line::from(vec![
                    Span::styled(if focused == idx { "▶ " } else { "  " }, tag_style),
                    Span::styled(marker, marker_style),
                    Span::styled(" ", Style::default()),
                    Span::styled(*tag, tag_style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(tag_lines), layout[1]);

        let photo_slots = [
            (FileSlot::InteriorPhoto, "Interior photo"),
            (FileSlot::ExteriorPhoto, "Exterior photo"),
            (FileSlot::ProfessionalPhoto, "Professional shot"),
        ];
        let slot_lines: Vec<Line> = photo_slots
            .iter()
            .enumerate()
            .map(|(idx, (slot, label))| {
                let control_idx = VIBE_TAG_CATALOG.len() + idx;
                self.file_slot_line(wizard, *slot, label, focused == control_idx)
            })
            .collect();
        frame.render_widget(Paragraph::new(slot_lines), layout[3]);
    }

    fn render_verification(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        wizard: &WizardController,
    ) {
        let block = self.step_block(wizard.step());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Optional note
                Constraint::Length(4), // CAC number
                Constraint::Length(4), // Document type picker
                Constraint::Length(2), // Document slot
                Constraint::Min(0),
            ])
            .split(inner);

        let note = Paragraph::new(Line::from(vec![
            Span::styled("Everything here is optional. ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                "Verified listings get a badge and rank higher.",
                Style::default().fg(WARNING_ORANGE),
            ),
        ]));
        frame.render_widget(note, layout[0]);

        let focused = state.wizard_ui.control;
        self.render_text_field(
            frame,
            layout[1],
            "CAC Registration Number",
            &wizard.fields.cac_number,
            focused == 0,
            wizard.fields.errors.get(FieldName::CacNumber),
        );
        let doc_label = wizard
            .fields
            .id_document_type
            .map(|d| d.label())
            .unwrap_or("Choose a document type");
        self.render_picker(
            frame,
            layout[2],
            "ID Document Type",
            doc_label,
            wizard.fields.id_document_type.is_some(),
            focused == 1,
            wizard.fields.errors.get(FieldName::IdDocumentType),
        );
        let slot_line =
            self.file_slot_line(wizard, FileSlot::IdDocument, "ID document", focused == 2);
        frame.render_widget(Paragraph::new(vec![slot_line]), layout[3]);
    }

    fn render_submitting(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let spinner = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "⏳ Submitting your listing...",
                Style::default().fg(GOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "This only takes a moment",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(spinner, inner);
    }

    fn render_step_hint(&self, frame: &mut Frame, area: Rect, step: WizardStep) {
        let hint = match step {
            WizardStep::Identity => "Enter continues when the required fields are filled",
            WizardStep::Vibes => "Space toggles a tag or photo · Enter continues",
            WizardStep::Verification => "Enter submits · Ctrl+S to skip for now",
            WizardStep::Done => "",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(MUTED_GRAY),
            )))
            .alignment(Alignment::Center),
            area,
        );
    }

    fn step_block(&self, step: WizardStep) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.title()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    fn render_text_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
        error: Option<&str>,
    ) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(SOFT_WHITE))];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(SELECTION_GREEN)));
        }

        let border_color = if error.is_some() {
            ERROR_RED
        } else if focused {
            SELECTION_GREEN
        } else {
            SUBDUED_BORDER
        };

        let field = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {label} ")),
        );
        frame.render_widget(field, layout[0]);

        if let Some(message) = error {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("  ✗ {message}"),
                    Style::default().fg(ERROR_RED),
                ))),
                layout[1],
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_picker(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        has_value: bool,
        focused: bool,
        error: Option<&str>,
    ) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let value_style = if has_value {
            Style::default().fg(SOFT_WHITE)
        } else {
            Style::default().fg(MUTED_GRAY)
        };
        let arrow_style = if focused {
            Style::default().fg(GOLD)
        } else {
            Style::default().fg(SUBDUED_BORDER)
        };
        let line = Line::from(vec![
            Span::styled("◀ ", arrow_style),
            Span::styled(value.to_string(), value_style),
            Span::styled(" ▶", arrow_style),
        ]);

        let border_color = if error.is_some() {
            ERROR_RED
        } else if focused {
            SELECTION_GREEN
        } else {
            SUBDUED_BORDER
        };

        let picker = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {label} ")),
        );
        frame.render_widget(picker, layout[0]);

        if let Some(message) = error {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("  ✗ {message}"),
                    Style::default().fg(ERROR_RED),
                ))),
                layout[1],
            );
        }
    }

    fn file_slot_line(
        &self,
        wizard: &WizardController,
        slot: FileSlot,
        label: &str,
        focused: bool,
    ) -> Line<'static> {
        let attached = wizard.fields.file(slot);
        let (marker, marker_style) = match attached {
            Some(_) => ("[✓]", Style::default().fg(SELECTION_GREEN)),
            None => ("[ ]", Style::default().fg(MUTED_GRAY)),
        };
        let label_style = if focused {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        let detail = match attached {
            Some(path) => format!("  {}", path.display()),
            None => "  attach".to_string(),
        };
        Line::from(vec![
            Span::styled(if focused { "▶ " } else { "  " }, label_style),
            Span::styled(marker, marker_style),
            Span::styled(" ", Style::default()),
            Span::styled(label.to_string(), label_style),
            Span::styled(detail, Style::default().fg(MUTED_GRAY)),
        ])
    }
}

impl Default for WizardScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}

// Sanity check: control indices rendered here must agree with the event
// handler's traversal order.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::{wizard_controls, WizardControl};

    #[test]
    fn test_identity_render_indices_match_controls() {
        let controls = wizard_controls(WizardStep::Identity);
        assert_eq!(controls.len(), 3);
        assert_eq!(controls[0], WizardControl::Text(FieldName::BusinessName));
    }

    #[test]
    fn test_vibes_photo_slots_follow_tags() {
        let controls = wizard_controls(WizardStep::Vibes);
        assert_eq!(
            controls[VIBE_TAG_CATALOG.len()],
            WizardControl::File(FileSlot::InteriorPhoto)
        );
        assert_eq!(controls.len(), VIBE_TAG_CATALOG.len() + 3);
    }
}
