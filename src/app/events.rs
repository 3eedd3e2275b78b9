// ABOUTME: Event handling system for keyboard input and app actions

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::state::{AppState, AsyncAction, SignInFocus, View, VIBE_TAG_CATALOG};
use crate::models::Category;
use crate::wizard::{FieldName, FileSlot, IdDocumentType, WizardStep};

/// High-level actions produced from raw key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    GoHome,
    OpenBrowse,
    OpenDashboard,
    OpenSignIn,
    StartWizard,
    // Browse events
    BrowseInputChar(char),
    BrowseBackspace,
    BrowseClear,
    BrowseNextResult,
    BrowsePrevResult,
    BrowseOpenDetail,
    BrowseCycleCategory,
    BrowseToggleVerified,
    // Detail events
    DetailBack,
    // Sign-in events
    SignInInputChar(char),
    SignInBackspace,
    SignInSwitchField,
    SignInSubmit,
    SignInCancel,
    // Wizard events
    WizardInputChar(char),
    WizardBackspace,
    WizardFocusNext,
    WizardFocusPrev,
    WizardOptionNext,
    WizardOptionPrev,
    WizardToggle,
    WizardNext,
    WizardBack,
    WizardJump(WizardStep),
    WizardSkipVerification,
    WizardSubmit,
    WizardCancel,
    // Confirmation events
    ConfirmationDismiss,
    // Dashboard events
    DashboardNextTab,
    DashboardPrevTab,
    DashboardSettingNext,
    DashboardToggleSetting,
    SignOut,
}

/// Kinds of wizard controls, used to route Enter/Space/typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardControl {
    /// Free-text input bound to a field
    Text(FieldName),
    /// Picker cycled with Left/Right (category, document type)
    Picker(FieldName),
    /// Toggled with Space/Enter (vibe tag by catalog index)
    Tag(usize),
    /// File slot toggled with Space/Enter (mocked attach/remove)
    File(FileSlot),
}

/// Controls of a wizard step in declaration order. This order defines both
/// Tab traversal and error-focus targeting.
pub fn wizard_controls(step: WizardStep) -> Vec<WizardControl> {
    match step {
        WizardStep::Identity => vec![
            WizardControl::Text(FieldName::BusinessName),
            WizardControl::Picker(FieldName::Category),
            WizardControl::Text(FieldName::WhatsappNumber),
        ],
        WizardStep::Vibes => {
            let mut controls: Vec<WizardControl> =
                (0..VIBE_TAG_CATALOG.len()).map(WizardControl::Tag).collect();
            controls.push(WizardControl::File(FileSlot::InteriorPhoto));
            controls.push(WizardControl::File(FileSlot::ExteriorPhoto));
            controls.push(WizardControl::File(FileSlot::ProfessionalPhoto));
            controls
        }
        WizardStep::Verification => vec![
            WizardControl::Text(FieldName::CacNumber),
            WizardControl::Picker(FieldName::IdDocumentType),
            WizardControl::File(FileSlot::IdDocument),
        ],
        WizardStep::Done => vec![],
    }
}

/// Control index that corresponds to a validation-failed field, so a
/// blocked transition can move focus to the first invalid control
pub fn control_index_for_field(step: WizardStep, field: FieldName) -> Option<usize> {
    wizard_controls(step).iter().position(|c| match c {
        WizardControl::Text(f) | WizardControl::Picker(f) => *f == field,
        WizardControl::File(slot) => slot.field() == field,
        WizardControl::Tag(_) => field == FieldName::VibeTags,
    })
}

pub struct EventHandler;

impl EventHandler {
    /// Map a raw key event to an app event given the current view
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                    Some(AppEvent::ToggleHelp)
                }
                _ => None,
            };
        }

        match state.current_view {
            View::Home => Self::handle_home_keys(key_event),
            View::Browse => Self::handle_browse_keys(key_event),
            View::Detail => Self::handle_detail_keys(key_event),
            View::SignIn => Self::handle_sign_in_keys(key_event),
            View::Wizard => Self::handle_wizard_keys(key_event, state),
            View::Confirmation => Self::handle_confirmation_keys(key_event),
            View::Dashboard => Self::handle_dashboard_keys(key_event),
        }
    }

    fn handle_home_keys(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('b') | KeyCode::Char('/') => Some(AppEvent::OpenBrowse),
            KeyCode::Char('n') => Some(AppEvent::StartWizard),
            KeyCode::Char('d') => Some(AppEvent::OpenDashboard),
            KeyCode::Char('s') => Some(AppEvent::OpenSignIn),
            KeyCode::Char('o') => Some(AppEvent::SignOut),
            _ => None,
        }
    }

    fn handle_browse_keys(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc => Some(AppEvent::GoHome),
            KeyCode::Up => Some(AppEvent::BrowsePrevResult),
            KeyCode::Down => Some(AppEvent::BrowseNextResult),
            KeyCode::Enter => Some(AppEvent::BrowseOpenDetail),
            KeyCode::Tab => Some(AppEvent::BrowseCycleCategory),
            KeyCode::Backspace => Some(AppEvent::BrowseBackspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::BrowseClear)
            }
            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::BrowseToggleVerified)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::BrowseInputChar(c))
            }
            _ => None,
        }
    }

    fn handle_detail_keys(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(AppEvent::DetailBack),
            _ => None,
        }
    }

    fn handle_sign_in_keys(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc => Some(AppEvent::SignInCancel),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => Some(AppEvent::SignInSwitchField),
            KeyCode::Enter => Some(AppEvent::SignInSubmit),
            KeyCode::Backspace => Some(AppEvent::SignInBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::SignInInputChar(c))
            }
            _ => None,
        }
    }

    fn handle_wizard_keys(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Controls are disabled while the simulated submission is pending
        if state.pending_async_action.is_some()
            || state.wizard.as_ref().is_some_and(|w| w.is_submitting())
        {
            return None;
        }

        let step = state.wizard.as_ref()?.step();
        let controls = wizard_controls(step);
        let focused = controls.get(state.wizard_ui.control).copied();

        // Step jumps via Alt+number
        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('1') => Some(AppEvent::WizardJump(WizardStep::Identity)),
                KeyCode::Char('2') => Some(AppEvent::WizardJump(WizardStep::Vibes)),
                KeyCode::Char('3') => Some(AppEvent::WizardJump(WizardStep::Verification)),
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // "Skip for Now" on the verification step
                KeyCode::Char('s') if step == WizardStep::Verification => {
                    Some(AppEvent::WizardSkipVerification)
                }
                KeyCode::Char('b') => Some(AppEvent::WizardBack),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(AppEvent::WizardCancel),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::WizardFocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::WizardFocusPrev),
            KeyCode::Left => match focused {
                Some(WizardControl::Picker(_)) => Some(AppEvent::WizardOptionPrev),
                _ => Some(AppEvent::WizardBack),
            },
            KeyCode::Right => match focused {
                Some(WizardControl::Picker(_)) => Some(AppEvent::WizardOptionNext),
                _ => None,
            },
            KeyCode::Char(' ') => match focused {
                Some(WizardControl::Tag(_) | WizardControl::File(_)) => {
                    Some(AppEvent::WizardToggle)
                }
                Some(WizardControl::Text(_)) => Some(AppEvent::WizardInputChar(' ')),
                _ => None,
            },
            KeyCode::Enter => match focused {
                Some(WizardControl::Tag(_) | WizardControl::File(_)) => {
                    Some(AppEvent::WizardToggle)
                }
                // The main Continue on the verification step is the submit
                _ if step == WizardStep::Verification => Some(AppEvent::WizardSubmit),
                _ => Some(AppEvent::WizardNext),
            },
            KeyCode::Backspace => match focused {
                Some(WizardControl::Text(_)) => Some(AppEvent::WizardBackspace),
                _ => None,
            },
            KeyCode::Char(c) => match focused {
                Some(WizardControl::Text(_)) => Some(AppEvent::WizardInputChar(c)),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_confirmation_keys(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                Some(AppEvent::ConfirmationDismiss)
            }
            _ => None,
        }
    }

    fn handle_dashboard_keys(key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Esc => Some(AppEvent::GoHome),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Tab | KeyCode::Right => Some(AppEvent::DashboardNextTab),
            KeyCode::BackTab | KeyCode::Left => Some(AppEvent::DashboardPrevTab),
            KeyCode::Down | KeyCode::Up => Some(AppEvent::DashboardSettingNext),
            KeyCode::Char(' ') | KeyCode::Enter => Some(AppEvent::DashboardToggleSetting),
            KeyCode::Char('n') => Some(AppEvent::StartWizard),
            KeyCode::Char('o') => Some(AppEvent::SignOut),
            _ => None,
        }
    }

    /// Apply an app event to the state
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, "processing app event");
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::GoHome => state.go_to(View::Home),
            AppEvent::OpenBrowse => state.go_to(View::Browse),
            AppEvent::OpenDashboard => state.go_to(View::Dashboard),
            AppEvent::OpenSignIn => state.go_to(View::SignIn),
            AppEvent::StartWizard => state.go_to(View::Wizard),

            // Browse
            AppEvent::BrowseInputChar(c) => {
                state.browse.input.push(c);
                state.refresh_browse();
            }
            AppEvent::BrowseBackspace => {
                state.browse.input.pop();
                state.refresh_browse();
            }
            AppEvent::BrowseClear => {
                state.browse.input.clear();
                state.browse.category_filter = None;
                state.browse.verified_only = false;
                state.refresh_browse();
            }
            AppEvent::BrowseNextResult => state.browse.next_result(),
            AppEvent::BrowsePrevResult => state.browse.previous_result(),
            AppEvent::BrowseOpenDetail => state.open_selected_detail(),
            AppEvent::BrowseCycleCategory => state.cycle_category_filter(),
            AppEvent::BrowseToggleVerified => {
                state.browse.verified_only = !state.browse.verified_only;
                state.refresh_browse();
            }

            // Detail
            AppEvent::DetailBack => {
                state.detail_business_id = None;
                state.go_to(View::Browse);
            }

            // Sign-in
            AppEvent::SignInInputChar(c) => match state.sign_in.focus {
                SignInFocus::Email => state.sign_in.email.push(c),
                SignInFocus::Password => state.sign_in.password.push(c),
            },
            AppEvent::SignInBackspace => {
                match state.sign_in.focus {
                    SignInFocus::Email => state.sign_in.email.pop(),
                    SignInFocus::Password => state.sign_in.password.pop(),
                };
            }
            AppEvent::SignInSwitchField => {
                state.sign_in.focus = match state.sign_in.focus {
                    SignInFocus::Email => SignInFocus::Password,
                    SignInFocus::Password => SignInFocus::Email,
                };
            }
            AppEvent::SignInSubmit => match state.sign_in.focus {
                // Enter on the email field moves on rather than submitting
                SignInFocus::Email => state.sign_in.focus = SignInFocus::Password,
                SignInFocus::Password => state.submit_sign_in(),
            },
            AppEvent::SignInCancel => {
                state.post_auth_view = None;
                state.go_to(View::Home);
            }

            // Wizard
            AppEvent::WizardInputChar(c) => Self::wizard_input_char(state, c),
            AppEvent::WizardBackspace => Self::wizard_backspace(state),
            AppEvent::WizardFocusNext => Self::wizard_move_focus(state, 1),
            AppEvent::WizardFocusPrev => Self::wizard_move_focus(state, -1),
            AppEvent::WizardOptionNext => Self::wizard_cycle_option(state, 1),
            AppEvent::WizardOptionPrev => Self::wizard_cycle_option(state, -1),
            AppEvent::WizardToggle => Self::wizard_toggle(state),
            AppEvent::WizardNext => {
                if let Some(wizard) = state.wizard.as_mut() {
                    let transition = wizard.next();
                    Self::apply_and_focus(state, transition);
                }
            }
            AppEvent::WizardBack => {
                if let Some(wizard) = state.wizard.as_mut() {
                    let transition = wizard.back();
                    Self::apply_and_focus(state, transition);
                }
            }
            AppEvent::WizardJump(target) => {
                if let Some(wizard) = state.wizard.as_mut() {
                    let transition = wizard.jump_to(target);
                    Self::apply_and_focus(state, transition);
                }
            }
            AppEvent::WizardSkipVerification => {
                if let Some(wizard) = state.wizard.as_mut() {
                    let transition = wizard.skip_verification();
                    Self::apply_and_focus(state, transition);
                }
            }
            AppEvent::WizardSubmit => {
                // The actual (simulated) submission runs in App::tick
                state.pending_async_action = Some(AsyncAction::SubmitListing);
            }
            AppEvent::WizardCancel => state.cancel_wizard(),

            // Confirmation
            AppEvent::ConfirmationDismiss => state.dismiss_confirmation(),

            // Dashboard
            AppEvent::DashboardNextTab => {
                state.dashboard.tab = state.dashboard.tab.next();
            }
            AppEvent::DashboardPrevTab => {
                state.dashboard.tab = state.dashboard.tab.previous();
            }
            AppEvent::DashboardSettingNext => {
                state.dashboard.selected_setting = (state.dashboard.selected_setting + 1) % 2;
            }
            AppEvent::DashboardToggleSetting => match state.dashboard.selected_setting {
                0 => {
                    state.dashboard.notifications_enabled =
                        !state.dashboard.notifications_enabled;
                }
                _ => state.dashboard.listing_visible = !state.dashboard.listing_visible,
            },
            AppEvent::SignOut => state.sign_out(),
        }
    }

    fn apply_and_focus(state: &mut AppState, transition: crate::wizard::Transition) {
        state.apply_wizard_transition(transition);
        // Move focus to the first invalid control after a block
        if let (Some(field), Some(wizard)) = (state.wizard_ui.focus_field, state.wizard.as_ref()) {
            if let Some(index) = control_index_for_field(wizard.step(), field) {
                state.wizard_ui.control = index;
            }
        }
    }

    fn focused_control(state: &AppState) -> Option<WizardControl> {
        let step = state.wizard.as_ref()?.step();
        wizard_controls(step).get(state.wizard_ui.control).copied()
    }

    fn wizard_input_char(state: &mut AppState, c: char) {
        let Some(WizardControl::Text(field)) = Self::focused_control(state) else {
            return;
        };
        let Some(wizard) = state.wizard.as_mut() else {
            return;
        };
        match field {
            FieldName::BusinessName => {
                let mut value = wizard.fields.business_name.clone();
                value.push(c);
                wizard.fields.set_business_name(value);
            }
            FieldName::WhatsappNumber => {
                let mut value = wizard.fields.whatsapp_number.clone();
                value.push(c);
                wizard.fields.set_whatsapp_number(value);
            }
            FieldName::CacNumber => {
                let mut value = wizard.fields.cac_number.clone();
                value.push(c);
                wizard.fields.set_cac_number(value);
            }
            _ => {}
        }
    }

    fn wizard_backspace(state: &mut AppState) {
        let Some(WizardControl::Text(field)) = Self::focused_control(state) else {
            return;
        };
        let Some(wizard) = state.wizard.as_mut() else {
            return;
        };
        match field {
            FieldName::BusinessName => {
                let mut value = wizard.fields.business_name.clone();
                value.pop();
                wizard.fields.set_business_name(value);
            }
            FieldName::WhatsappNumber => {
                let mut value = wizard.fields.whatsapp_number.clone();
                value.pop();
                wizard.fields.set_whatsapp_number(value);
            }
            FieldName::CacNumber => {
                let mut value = wizard.fields.cac_number.clone();
                value.pop();
                wizard.fields.set_cac_number(value);
            }
            _ => {}
        }
    }

    fn wizard_move_focus(state: &mut AppState, delta: isize) {
        let Some(wizard) = state.wizard.as_ref() else {
            return;
        };
        let count = wizard_controls(wizard.step()).len();
        if count == 0 {
            return;
        }
        let current = state.wizard_ui.control as isize;
        let next = (current + delta).rem_euclid(count as isize);
        state.wizard_ui.control = next as usize;
    }

    fn wizard_cycle_option(state: &mut AppState, delta: isize) {
        let Some(WizardControl::Picker(field)) = Self::focused_control(state) else {
            return;
        };
        let Some(wizard) = state.wizard.as_mut() else {
            return;
        };
        match field {
            FieldName::Category => {
                let all = Category::all();
                let current = state.wizard_ui.category_index as isize;
                let next = (current + delta).rem_euclid(all.len() as isize) as usize;
                state.wizard_ui.category_index = next;
                wizard.fields.set_category(Some(all[next]));
            }
            FieldName::IdDocumentType => {
                let all = IdDocumentType::all();
                let current = state.wizard_ui.doc_type_index as isize;
                let next = (current + delta).rem_euclid(all.len() as isize) as usize;
                state.wizard_ui.doc_type_index = next;
                wizard.fields.set_id_document_type(Some(all[next]));
            }
            _ => {}
        }
    }

    /// Toggle the focused tag or file slot. File picking is mocked: the
    /// slot is filled with a placeholder path, mirroring the stubbed
    /// upload flow (no real file dialogs, no bytes read).
    fn wizard_toggle(state: &mut AppState) {
        let Some(control) = Self::focused_control(state) else {
            return;
        };
        let Some(wizard) = state.wizard.as_mut() else {
            return;
        };
        match control {
            WizardControl::Tag(index) => {
                if let Some(tag) = VIBE_TAG_CATALOG.get(index) {
                    wizard.fields.toggle_vibe_tag(tag);
                }
            }
            WizardControl::File(slot) => {
                if wizard.fields.file(slot).is_some() {
                    wizard.fields.set_file(slot, None);
                } else {
                    let name = match slot {
                        FileSlot::InteriorPhoto => "interior.jpg",
                        FileSlot::ExteriorPhoto => "exterior.jpg",
                        FileSlot::ProfessionalPhoto => "professional.jpg",
                        FileSlot::IdDocument => "id-document.pdf",
                    };
                    wizard.fields.set_file(slot, Some(name.into()));
                }
            }
            WizardControl::Text(_) | WizardControl::Picker(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Credentials;

    fn wizard_state() -> AppState {
        let mut state = AppState::mocked().unwrap();
        state
            .session
            .sign_in(&Credentials {
                email: "ada@example.ng".to_string(),
                password: "pw".to_string(),
            })
            .unwrap();
        state.go_to(View::Wizard);
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_identity_controls_follow_declaration_order() {
        let controls = wizard_controls(WizardStep::Identity);
        assert_eq!(controls[0], WizardControl::Text(FieldName::BusinessName));
        assert_eq!(controls[1], WizardControl::Picker(FieldName::Category));
        assert_eq!(controls[2], WizardControl::Text(FieldName::WhatsappNumber));
    }

    #[test]
    fn test_control_index_for_field() {
        assert_eq!(
            control_index_for_field(WizardStep::Identity, FieldName::WhatsappNumber),
            Some(2)
        );
        assert_eq!(
            control_index_for_field(WizardStep::Identity, FieldName::CacNumber),
            None
        );
    }

    #[test]
    fn test_typing_fills_focused_text_field() {
        let mut state = wizard_state();
        for c in "Ada".chars() {
            EventHandler::process_event(AppEvent::WizardInputChar(c), &mut state);
        }
        assert_eq!(state.wizard.as_ref().unwrap().fields.business_name, "Ada");
    }

    #[test]
    fn test_blocked_next_focuses_first_invalid_control() {
        let mut state = wizard_state();
        // Focus somewhere else first
        EventHandler::process_event(AppEvent::WizardFocusNext, &mut state);
        EventHandler::process_event(AppEvent::WizardFocusNext, &mut state);

        EventHandler::process_event(AppEvent::WizardNext, &mut state);

        assert_eq!(state.wizard_ui.control, 0); // businessName comes first
        assert_eq!(state.wizard_ui.focus_field, Some(FieldName::BusinessName));
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut state = wizard_state();
        EventHandler::process_event(AppEvent::WizardFocusPrev, &mut state);
        assert_eq!(state.wizard_ui.control, 2);
        EventHandler::process_event(AppEvent::WizardFocusNext, &mut state);
        assert_eq!(state.wizard_ui.control, 0);
    }

    #[test]
    fn test_category_picker_cycles_and_sets_field() {
        let mut state = wizard_state();
        // Move focus to the category picker
        EventHandler::process_event(AppEvent::WizardFocusNext, &mut state);

        EventHandler::process_event(AppEvent::WizardOptionNext, &mut state);
        let selected = state.wizard.as_ref().unwrap().fields.category;
        assert_eq!(selected, Some(Category::all()[1]));
    }

    #[test]
    fn test_tag_toggle_through_events() {
        let mut state = wizard_state();
        {
            let wizard = state.wizard.as_mut().unwrap();
            wizard.fields.set_business_name("Ada's Kitchen");
            wizard.fields.set_category(Some(Category::FoodAndCatering));
            wizard.fields.set_whatsapp_number("0801 111 2222");
        }
        EventHandler::process_event(AppEvent::WizardNext, &mut state);
        assert_eq!(state.wizard.as_ref().unwrap().step(), WizardStep::Vibes);

        EventHandler::process_event(AppEvent::WizardToggle, &mut state);
        assert_eq!(
            state.wizard.as_ref().unwrap().fields.vibe_tags,
            vec![VIBE_TAG_CATALOG[0]]
        );
    }

    #[test]
    fn test_submit_queues_async_action() {
        let mut state = wizard_state();
        EventHandler::process_event(AppEvent::WizardSubmit, &mut state);
        assert_eq!(state.pending_async_action, Some(AsyncAction::SubmitListing));
    }

    #[test]
    fn test_keys_ignored_while_submit_pending() {
        let mut state = wizard_state();
        state.pending_async_action = Some(AsyncAction::SubmitListing);

        let event = EventHandler::handle_key_event(key(KeyCode::Enter), &state);
        assert!(event.is_none());
    }

    #[test]
    fn test_enter_on_verification_step_means_submit() {
        let mut state = wizard_state();
        {
            let wizard = state.wizard.as_mut().unwrap();
            wizard.fields.set_business_name("Ada's Kitchen");
            wizard.fields.set_category(Some(Category::FoodAndCatering));
            wizard.fields.set_whatsapp_number("0801 111 2222");
            wizard.jump_to(WizardStep::Verification);
        }

        let event = EventHandler::handle_key_event(key(KeyCode::Enter), &state);
        assert_eq!(event, Some(AppEvent::WizardSubmit));
    }

    #[test]
    fn test_escape_cancels_wizard() {
        let mut state = wizard_state();
        let event = EventHandler::handle_key_event(key(KeyCode::Esc), &state).unwrap();
        EventHandler::process_event(event, &mut state);

        assert!(state.wizard.is_none());
        assert_eq!(state.current_view, View::Home);
    }

    #[test]
    fn test_browse_typing_updates_results() {
        let mut state = AppState::mocked().unwrap();
        state.go_to(View::Browse);
        for c in "buka".chars() {
            EventHandler::process_event(AppEvent::BrowseInputChar(c), &mut state);
        }
        assert_eq!(state.browse.results.len(), 1);
        assert_eq!(state.browse.results[0].name, "Mama Nkechi Buka");
    }

    #[test]
    fn test_sign_in_enter_moves_then_submits() {
        let mut state = AppState::mocked().unwrap();
        state.go_to(View::SignIn);
        for c in "ada@example.ng".chars() {
            EventHandler::process_event(AppEvent::SignInInputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::SignInSubmit, &mut state);
        assert_eq!(state.sign_in.focus, SignInFocus::Password);

        for c in "pw".chars() {
            EventHandler::process_event(AppEvent::SignInInputChar(c), &mut state);
        }
        EventHandler::process_event(AppEvent::SignInSubmit, &mut state);
        assert_eq!(state.current_view, View::Dashboard);
    }
}
