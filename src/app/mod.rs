// ABOUTME: Application module - state, events and the async action pump

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{AppState, AsyncAction, View};

use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::info;

use crate::config::AppConfig;
use crate::directory::DirectoryStore;
use crate::session::FileSessionStore;

/// Top-level application: owns the state and runs queued async actions
/// between input events
pub struct App {
    pub state: AppState,
}

impl App {
    /// Wire up the real dependencies: loaded config, the configured (or
    /// embedded) dataset, and the file-backed session store
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        let directory = match config.directory.dataset_path {
            Some(ref path) => DirectoryStore::load_from_file(path)?,
            None => DirectoryStore::load_embedded()?,
        };
        let session = Box::new(FileSessionStore::open_default()?);
        Ok(Self {
            state: AppState::new(config, directory, session),
        })
    }

    /// Translate and apply one key event
    pub fn on_key(&mut self, key_event: KeyEvent) {
        if let Some(event) = EventHandler::handle_key_event(key_event, &self.state) {
            EventHandler::process_event(event, &mut self.state);
        }
    }

    /// Run any queued async action. Called from the main loop after input
    /// handling; the simulated submission delay happens here so the UI can
    /// show a spinner while it runs.
    pub async fn tick(&mut self) {
        let Some(action) = self.state.pending_async_action.take() else {
            return;
        };
        match action {
            AsyncAction::SubmitListing => {
                if let Some(wizard) = self.state.wizard.as_mut() {
                    let transition = wizard.submit().await;
                    info!(?transition, "listing submission finished");
                    self.state.apply_wizard_transition(transition);
                }
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::session::Credentials;
    use crate::wizard::WizardStep;
    use std::time::Duration;

    fn ready_app() -> App {
        let state = AppState::mocked().unwrap();
        let mut app = App { state };
        app.state
            .session
            .sign_in(&Credentials {
                email: "ada@example.ng".to_string(),
                password: "pw".to_string(),
            })
            .unwrap();
        app.state.go_to(View::Wizard);
        {
            let wizard = app.state.wizard.as_mut().unwrap();
            wizard.fields.set_business_name("Ada's Kitchen");
            wizard.fields.set_category(Some(Category::FoodAndCatering));
            wizard.fields.set_whatsapp_number("0801 111 2222");
            wizard.jump_to(WizardStep::Verification);
        }
        app
    }

    #[tokio::test]
    async fn test_tick_without_pending_action_is_a_noop() {
        let mut app = ready_app();
        app.tick().await;
        assert_eq!(app.state.current_view, View::Wizard);
    }

    #[tokio::test]
    async fn test_queued_submission_lands_on_confirmation() {
        let mut app = ready_app();
        // Make the simulated delay immediate for the test
        if let Some(wizard) = app.state.wizard.as_mut() {
            let transition = wizard.submit_with_delay(Duration::ZERO).await;
            app.state.apply_wizard_transition(transition);
        }

        assert_eq!(app.state.current_view, View::Confirmation);
        assert!(app.state.wizard.is_none());
        assert_eq!(app.state.drafts.len(), 1);
    }

    #[tokio::test]
    async fn test_tick_drains_the_pending_action() {
        let mut app = ready_app();
        app.state.pending_async_action = Some(AsyncAction::SubmitListing);
        app.tick().await;
        assert!(app.state.pending_async_action.is_none());
    }
}
