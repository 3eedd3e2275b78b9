// ABOUTME: Full user journeys driven through raw key events - guard redirect,
// sign-in, wizard to confirmation, browse to detail

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use bizlist::app::state::VIBE_TAG_CATALOG;
use bizlist::app::{App, AppState, EventHandler, View};
use bizlist::session::Credentials;

fn press(state: &mut AppState, code: KeyCode) {
    press_with(state, code, KeyModifiers::NONE);
}

fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
    if let Some(event) = EventHandler::handle_key_event(KeyEvent::new(code, modifiers), state) {
        EventHandler::process_event(event, state);
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

fn signed_in_state() -> AppState {
    let mut state = AppState::mocked().unwrap();
    state
        .session
        .sign_in(&Credentials {
            email: "ada@example.ng".to_string(),
            password: "pw".to_string(),
        })
        .unwrap();
    state
}

#[test]
fn test_guard_redirects_then_returns_after_sign_in() {
    let mut state = AppState::mocked().unwrap();

    // 'n' on the home screen starts the wizard, but it needs a session
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.current_view, View::SignIn);
    assert_eq!(state.post_auth_view, Some(View::Wizard));

    type_text(&mut state, "ada@example.ng");
    press(&mut state, KeyCode::Enter); // move to password
    type_text(&mut state, "secret");
    press(&mut state, KeyCode::Enter); // submit

    assert_eq!(state.current_view, View::Wizard);
    assert!(state.wizard.is_some());
}

#[tokio::test]
async fn test_full_listing_journey_ends_on_dashboard() {
    let mut state = signed_in_state();
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.current_view, View::Wizard);

    // Step 1: name, category (picker cycled with Right), WhatsApp number
    type_text(&mut state, "Ada's Kitchen & Grill");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "0801 234 5678");
    press(&mut state, KeyCode::Enter);

    // Step 2: toggle the first vibe tag, then jump ahead
    press(&mut state, KeyCode::Char(' '));
    press_with(&mut state, KeyCode::Char('3'), KeyModifiers::ALT);

    // Step 3: Enter submits; the simulated delay is queued as an async action
    press(&mut state, KeyCode::Enter);
    let mut app = App { state };
    assert!(app.state.pending_async_action.is_some());

    // Run the submission without the simulated delay
    app.state.pending_async_action = None;
    if let Some(wizard) = app.state.wizard.as_mut() {
        let transition = wizard.submit_with_delay(Duration::ZERO).await;
        app.state.apply_wizard_transition(transition);
    }

    assert_eq!(app.state.current_view, View::Confirmation);
    let payload = app.state.confirmation_payload().unwrap();
    assert_eq!(payload.business_name, "Ada's Kitchen & Grill");
    assert_eq!(payload.vibe_tags, vec![VIBE_TAG_CATALOG[0]]);
    assert!(!payload.verification_skipped);
    assert!(!payload.has_id_document);

    // Dismissing the confirmation lands on the dashboard with a new draft
    press(&mut app.state, KeyCode::Enter);
    assert_eq!(app.state.current_view, View::Dashboard);
    assert_eq!(app.state.drafts.len(), 1);
}

#[test]
fn test_blocked_step_shows_errors_and_keeps_view() {
    let mut state = signed_in_state();
    press(&mut state, KeyCode::Char('n'));

    // Continue with everything empty
    press(&mut state, KeyCode::Enter);

    let wizard = state.wizard.as_ref().unwrap();
    assert_eq!(wizard.step(), bizlist::wizard::WizardStep::Identity);
    assert_eq!(wizard.fields.errors.len(), 3);
    assert_eq!(state.current_view, View::Wizard);
    // Focus jumped to the first invalid control
    assert_eq!(state.wizard_ui.control, 0);
}

#[test]
fn test_cancel_discards_the_wizard() {
    let mut state = signed_in_state();
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "Half-finished");

    press(&mut state, KeyCode::Esc);

    assert!(state.wizard.is_none());
    assert_eq!(state.current_view, View::Home);

    // Starting again gets a fresh form
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.wizard.as_ref().unwrap().fields.business_name, "");
}

#[test]
fn test_browse_to_detail_and_back() {
    let mut state = AppState::mocked().unwrap();

    press(&mut state, KeyCode::Char('b'));
    assert_eq!(state.current_view, View::Browse);

    type_text(&mut state, "buka");
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_view, View::Detail);
    assert_eq!(state.detail_business().unwrap().name, "Mama Nkechi Buka");

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.current_view, View::Browse);
    assert_eq!(state.browse.input, "buka");
}

#[test]
fn test_sign_out_from_dashboard_goes_home() {
    let mut state = signed_in_state();
    press(&mut state, KeyCode::Char('d'));
    assert_eq!(state.current_view, View::Dashboard);

    press(&mut state, KeyCode::Char('o'));

    assert!(!state.session.is_authenticated());
    assert_eq!(state.current_view, View::Home);
}
