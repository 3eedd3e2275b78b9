// ABOUTME: CLI argument parsing and command routing for bizlist
//
// Provides command-line interface for:
// - Searching the directory (search)
// - Inspecting a single business (show)
// - Managing the mocked session (signin, signout, whoami)
// - Launching the TUI (tui, default)

pub mod auth;
pub mod search;
pub mod show;
pub mod util;

use clap::{Parser, Subcommand, ValueEnum};

/// Nigerian business directory - browse listings and get yours online
#[derive(Parser)]
#[command(name = "bizlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Search the business directory
    Search(SearchArgs),

    /// Show a single business by id or name prefix
    Show(ShowArgs),

    /// Sign in (mocked: any non-empty email/password)
    Signin(SigninArgs),

    /// Sign out and forget the stored session
    Signout,

    /// Show the currently signed-in user
    Whoami,
}

/// Arguments for the search command
#[derive(clap::Args)]
pub struct SearchArgs {
    /// Free-text query matched against name, description and location
    pub query: Option<String>,

    /// Filter by category slug (e.g. food-and-catering)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by city (case-insensitive exact match)
    #[arg(long)]
    pub city: Option<String>,

    /// Only show verified businesses
    #[arg(long)]
    pub verified: bool,

    /// Minimum rating (0.0 - 5.0)
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum number of results
    #[arg(long, short, default_value = "20")]
    pub limit: usize,
}

/// Arguments for the show command
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Business id (e.g. biz-001) or name prefix
    pub business: String,
}

/// Arguments for the signin command
#[derive(clap::Args)]
pub struct SigninArgs {
    /// Email address
    #[arg(long, short)]
    pub email: String,

    /// Password (any non-empty value is accepted)
    #[arg(long, short)]
    pub password: String,
}
