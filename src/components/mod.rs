// ABOUTME: UI components module - screens and overlays for the directory TUI

pub mod browse_screen;
pub mod confirmation_screen;
pub mod dashboard_screen;
pub mod detail_screen;
pub mod help;
pub mod home_screen;
pub mod layout;
pub mod signin_screen;
pub mod theme;
pub mod wizard_screen;

pub use browse_screen::BrowseScreenComponent;
pub use confirmation_screen::ConfirmationScreenComponent;
pub use dashboard_screen::DashboardScreenComponent;
pub use detail_screen::DetailScreenComponent;
pub use help::HelpComponent;
pub use home_screen::HomeScreenComponent;
pub use layout::LayoutComponent;
pub use signin_screen::SignInScreenComponent;
pub use wizard_screen::WizardScreenComponent;
