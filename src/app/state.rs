// ABOUTME: Application state management and view switching for the bizlist TUI

#![allow(dead_code)]

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::directory::{DirectoryStore, SearchFilter};
use crate::models::{Business, Category, ListingDraft};
use crate::session::{may_enter, Credentials, GuardedArea, MemorySessionStore, SessionStore};
use crate::wizard::{CompletionPayload, Transition, WizardController, WizardStep};

/// Catalog of vibe tags a listing can pick from. Selection order (not
/// catalog order) is what travels to the completion handoff.
pub const VIBE_TAG_CATALOG: &[&str] = &[
    "#OwambeReady",
    "#LateNight",
    "#BudgetFriendly",
    "#FamilyOwned",
    "#Delivery",
    "#LuxuryFeel",
    "#StudentFriendly",
    "#EcoFriendly",
    "#PetFriendly",
    "#OpenSundays",
];

/// Top-level views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Browse,
    Detail,
    SignIn,
    Wizard,
    Confirmation,
    Dashboard,
}

/// Async work queued by the event handler and executed by the app loop.
/// Only the simulated wizard submission exists today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    SubmitListing,
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Analytics,
    Gallery,
    Documents,
    Settings,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[Self::Analytics, Self::Gallery, Self::Documents, Self::Settings]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Gallery => "Gallery",
            Self::Documents => "Documents",
            Self::Settings => "Settings",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Analytics => Self::Gallery,
            Self::Gallery => Self::Documents,
            Self::Documents => Self::Settings,
            Self::Settings => Self::Analytics,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Analytics => Self::Settings,
            Self::Gallery => Self::Analytics,
            Self::Documents => Self::Gallery,
            Self::Settings => Self::Documents,
        }
    }
}

/// One mocked weekly analytics bucket
#[derive(Debug, Clone)]
pub struct WeeklyStats {
    pub week: &'static str,
    pub profile_views: u32,
    pub search_appearances: u32,
    pub contact_clicks: u32,
}

/// Dashboard state. Entirely client-side mocked; nothing here persists.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub tab: DashboardTab,
    pub analytics: Vec<WeeklyStats>,
    pub notifications_enabled: bool,
    pub listing_visible: bool,
    pub selected_setting: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tab: DashboardTab::Analytics,
            analytics: vec![
                WeeklyStats { week: "4 weeks ago", profile_views: 38, search_appearances: 112, contact_clicks: 9 },
                WeeklyStats { week: "3 weeks ago", profile_views: 52, search_appearances: 140, contact_clicks: 14 },
                WeeklyStats { week: "2 weeks ago", profile_views: 47, search_appearances: 133, contact_clicks: 11 },
                WeeklyStats { week: "last week", profile_views: 71, search_appearances: 168, contact_clicks: 19 },
            ],
            notifications_enabled: true,
            listing_visible: true,
            selected_setting: 0,
        }
    }
}

/// Browse view state: the search input plus the current result set
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub input: String,
    pub cursor: usize,
    pub category_filter: Option<Category>,
    pub verified_only: bool,
    pub results: Vec<Business>,
    pub selected: Option<usize>,
}

impl BrowseState {
    pub fn filter(&self) -> SearchFilter {
        SearchFilter {
            query: (!self.input.trim().is_empty()).then(|| self.input.trim().to_string()),
            category: self.category_filter,
            city: None,
            verified_only: self.verified_only,
            min_rating: None,
        }
    }

    pub fn selected_business(&self) -> Option<&Business> {
        self.selected.and_then(|i| self.results.get(i))
    }

    pub fn next_result(&mut self) {
        if self.results.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.results.len() => i + 1,
            _ => 0,
        });
    }

    pub fn previous_result(&mut self) {
        if self.results.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.results.len() - 1,
            Some(i) => i - 1,
        });
    }
}

/// Which sign-in input currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInFocus {
    Email,
    Password,
}

/// Sign-in view state (mocked flow)
#[derive(Debug, Clone)]
pub struct SignInState {
    pub email: String,
    pub password: String,
    pub focus: SignInFocus,
    pub error: Option<String>,
}

impl Default for SignInState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: SignInFocus::Email,
            error: None,
        }
    }
}

/// Per-step focus bookkeeping for the wizard view. Pure UI state; the
/// controller owns the actual field values.
#[derive(Debug, Clone, Default)]
pub struct WizardUiState {
    /// Index of the focused control on the current step
    pub control: usize,
    /// Highlighted entry in the category picker
    pub category_index: usize,
    /// Highlighted entry in the document-type picker
    pub doc_type_index: usize,
    /// Field that should be focused after a blocked transition
    pub focus_field: Option<crate::wizard::FieldName>,
}

/// Full application state
pub struct AppState {
    pub config: AppConfig,
    pub directory: DirectoryStore,
    pub session: Box<dyn SessionStore + Send>,

    pub current_view: View,
    pub should_quit: bool,
    pub help_visible: bool,
    pub status_message: Option<String>,

    pub browse: BrowseState,
    pub detail_business_id: Option<String>,
    pub sign_in: SignInState,
    /// View to enter once sign-in succeeds (route-guard redirect target)
    pub post_auth_view: Option<View>,

    /// Present only while a wizard run is active
    pub wizard: Option<WizardController>,
    pub wizard_ui: WizardUiState,
    /// Encoded completion handoff; the confirmation view decodes this and
    /// never sees wizard internals
    pub confirmation_query: Option<String>,

    pub dashboard: DashboardState,
    /// Drafts completed this run (in-memory only)
    pub drafts: Vec<ListingDraft>,

    pub pending_async_action: Option<AsyncAction>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        directory: DirectoryStore,
        session: Box<dyn SessionStore + Send>,
    ) -> Self {
        let mut state = Self {
            config,
            directory,
            session,
            current_view: View::Home,
            should_quit: false,
            help_visible: false,
            status_message: None,
            browse: BrowseState::default(),
            detail_business_id: None,
            sign_in: SignInState::default(),
            post_auth_view: None,
            wizard: None,
            wizard_ui: WizardUiState::default(),
            confirmation_query: None,
            dashboard: DashboardState::default(),
            drafts: Vec::new(),
            pending_async_action: None,
        };
        state.refresh_browse();
        state
    }

    /// State backed by the embedded dataset and an in-memory session store.
    /// Used by tests and ephemeral runs.
    pub fn mocked() -> anyhow::Result<Self> {
        Ok(Self::new(
            AppConfig::default(),
            DirectoryStore::load_embedded()?,
            Box::new(MemorySessionStore::new()),
        ))
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Switch views, honoring the route guard. Guarded views redirect to
    /// sign-in and remember where the user was headed.
    pub fn go_to(&mut self, view: View) {
        let area = match view {
            View::Wizard => Some(GuardedArea::Wizard),
            View::Dashboard => Some(GuardedArea::Dashboard),
            View::Browse => Some(GuardedArea::Browse),
            View::Detail => Some(GuardedArea::Detail),
            _ => None,
        };

        if let Some(area) = area {
            if !may_enter(area, self.session.as_ref()) {
                info!(?view, "route guard redirecting to sign-in");
                self.post_auth_view = Some(view);
                self.sign_in = SignInState::default();
                self.current_view = View::SignIn;
                return;
            }
        }

        if view == View::Wizard && self.wizard.is_none() {
            self.start_wizard();
        }

        self.current_view = view;
    }

    /// Begin a fresh wizard run. Any prior run's state is discarded.
    pub fn start_wizard(&mut self) {
        self.wizard = Some(WizardController::new());
        self.wizard_ui = WizardUiState::default();
        self.confirmation_query = None;
    }

    /// Abandon the wizard: state is discarded entirely, never persisted
    pub fn cancel_wizard(&mut self) {
        self.wizard = None;
        self.wizard_ui = WizardUiState::default();
        self.current_view = View::Home;
    }

    /// React to a controller transition: record the focus target on a block,
    /// or hand off to the confirmation view on completion.
    pub fn apply_wizard_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Blocked { first_invalid } => {
                self.wizard_ui.focus_field = Some(first_invalid);
            }
            Transition::Moved(step) => {
                self.wizard_ui.control = 0;
                self.wizard_ui.focus_field = None;
                if step == WizardStep::Done {
                    self.finish_wizard();
                }
            }
            Transition::Ignored => {}
        }
    }

    /// Serialize the handoff, record the draft, and show the confirmation
    fn finish_wizard(&mut self) {
        let Some(controller) = &self.wizard else {
            warn!("finish_wizard called without an active wizard");
            return;
        };
        let Some(payload) = controller.completion_payload() else {
            warn!("wizard not at terminal step; no payload");
            return;
        };

        if let Some(category) = payload.category {
            self.drafts.push(ListingDraft::new(
                payload.business_name.clone(),
                category,
                payload.whatsapp_number.clone(),
                payload.vibe_tags.clone(),
                payload.verification_skipped,
            ));
        }

        self.confirmation_query = Some(payload.encode());
        self.wizard = None;
        self.current_view = View::Confirmation;
        info!("wizard completed; confirmation handoff ready");
    }

    /// Decode the handoff for the confirmation view
    pub fn confirmation_payload(&self) -> Option<CompletionPayload> {
        self.confirmation_query
            .as_deref()
            .map(CompletionPayload::decode)
    }

    /// Leave the confirmation view; the handoff is dropped with it
    pub fn dismiss_confirmation(&mut self) {
        self.confirmation_query = None;
        let next = if self.session.is_authenticated() {
            View::Dashboard
        } else {
            View::Home
        };
        self.go_to(next);
    }

    /// Re-run the directory search with the current browse filter
    pub fn refresh_browse(&mut self) {
        let filter = self.browse.filter();
        let max = self.config.directory.max_results;
        self.browse.results = self
            .directory
            .search(&filter)
            .into_iter()
            .take(max)
            .cloned()
            .collect();

        self.browse.selected = if self.browse.results.is_empty() {
            None
        } else {
            // Keep the selection stable where possible
            Some(
                self.browse
                    .selected
                    .unwrap_or(0)
                    .min(self.browse.results.len() - 1),
            )
        };
    }

    /// Cycle the browse category filter: None -> each category -> None
    pub fn cycle_category_filter(&mut self) {
        let all = Category::all();
        self.browse.category_filter = match self.browse.category_filter {
            None => Some(all[0]),
            Some(current) => {
                let idx = all.iter().position(|c| *c == current).unwrap_or(0);
                all.get(idx + 1).copied()
            }
        };
        self.refresh_browse();
    }

    /// Open the detail view for the selected browse result
    pub fn open_selected_detail(&mut self) {
        if let Some(business) = self.browse.selected_business() {
            self.detail_business_id = Some(business.id.clone());
            self.current_view = View::Detail;
        }
    }

    pub fn detail_business(&self) -> Option<&Business> {
        self.detail_business_id
            .as_deref()
            .and_then(|id| self.directory.get(id))
    }

    /// Attempt the mocked sign-in with the current form contents
    pub fn submit_sign_in(&mut self) {
        let credentials = Credentials {
            email: self.sign_in.email.clone(),
            password: self.sign_in.password.clone(),
        };
        match self.session.sign_in(&credentials) {
            Ok(user) => {
                self.status_message = Some(format!("Signed in as {}", user.email));
                self.sign_in = SignInState::default();
                let target = self.post_auth_view.take().unwrap_or(View::Dashboard);
                self.go_to(target);
            }
            Err(e) => {
                self.sign_in.error = Some(e.to_string());
            }
        }
    }

    pub fn sign_out(&mut self) {
        if let Err(e) = self.session.sign_out() {
            warn!("sign-out failed: {e:#}");
        }
        self.status_message = Some("Signed out".to_string());
        self.current_view = View::Home;
    }
}
