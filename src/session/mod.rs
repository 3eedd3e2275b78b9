// ABOUTME: Mocked sign-in session store
// A trait seam over {is_authenticated, sign_in, sign_out} with a file-backed
// implementation persisting exactly three string keys, so a real backend can
// replace it without touching callers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Email and password are required")]
    EmptyCredentials,
}

/// Role granted by the mocked sign-in flow. Everyone who signs in is a
/// business owner; there is no real authorization.
pub const OWNER_ROLE: &str = "owner";

/// Credentials as entered on the sign-in screen
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The signed-in user as persisted: the three string keys the mocked flow
/// writes (flag, email, role) plus a timestamp for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    pub authenticated: bool,
    pub email: String,
    pub role: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Seam for the sign-in state. The wizard and dashboard only see this trait.
pub trait SessionStore {
    fn is_authenticated(&self) -> bool;

    /// Mocked: accepts any non-empty email/password pair
    fn sign_in(&mut self, credentials: &Credentials) -> Result<UserSession>;

    fn sign_out(&mut self) -> Result<()>;

    fn current_user(&self) -> Option<&UserSession>;
}

fn validate(credentials: &Credentials) -> Result<()> {
    if credentials.email.trim().is_empty() || credentials.password.trim().is_empty() {
        return Err(SessionError::EmptyCredentials.into());
    }
    Ok(())
}

fn make_session(credentials: &Credentials) -> UserSession {
    UserSession {
        authenticated: true,
        email: credentials.email.trim().to_string(),
        role: OWNER_ROLE.to_string(),
        signed_in_at: Utc::now(),
    }
}

/// File-backed store persisting the session under the user data directory
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    current: Option<UserSession>,
}

impl FileSessionStore {
    /// Default location: ~/.bizlist/session.json
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".bizlist").join("session.json"))
    }

    /// Open the store, loading any persisted session. A missing or
    /// unreadable file means signed out, never an error.
    pub fn open(path: PathBuf) -> Self {
        let current = Self::read_session(&path);
        Self { path, current }
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Self::default_path()?))
    }

    fn read_session(path: &Path) -> Option<UserSession> {
        let content = fs::read_to_string(path).ok()?;
        let session: UserSession = serde_json::from_str(&content).ok()?;
        session.authenticated.then_some(session)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        match &self.current {
            Some(session) => {
                let content = serde_json::to_string_pretty(session)?;
                fs::write(&self.path, content)
                    .with_context(|| format!("Failed to write {}", self.path.display()))?;
            }
            None => {
                if self.path.exists() {
                    fs::remove_file(&self.path)
                        .with_context(|| format!("Failed to remove {}", self.path.display()))?;
                }
            }
        }
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn is_authenticated(&self) -> bool {
        self.current.as_ref().is_some_and(|s| s.authenticated)
    }

    fn sign_in(&mut self, credentials: &Credentials) -> Result<UserSession> {
        validate(credentials)?;
        let session = make_session(credentials);
        info!(email = %session.email, "signed in (mocked)");
        self.current = Some(session.clone());
        self.persist()?;
        Ok(session)
    }

    fn sign_out(&mut self) -> Result<()> {
        info!("signed out");
        self.current = None;
        self.persist()
    }

    fn current_user(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: Option<UserSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn is_authenticated(&self) -> bool {
        self.current.as_ref().is_some_and(|s| s.authenticated)
    }

    fn sign_in(&mut self, credentials: &Credentials) -> Result<UserSession> {
        validate(credentials)?;
        let session = make_session(credentials);
        self.current = Some(session.clone());
        Ok(session)
    }

    fn sign_out(&mut self) -> Result<()> {
        self.current = None;
        Ok(())
    }

    fn current_user(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }
}

/// Views that require a signed-in session. The route guard is the single
/// place that decides; callers never inspect the session themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedArea {
    Browse,
    Detail,
    Wizard,
    Dashboard,
}

/// Answer "may this area be entered with the current session"
pub fn may_enter(area: GuardedArea, store: &dyn SessionStore) -> bool {
    match area {
        GuardedArea::Browse | GuardedArea::Detail => true,
        GuardedArea::Wizard | GuardedArea::Dashboard => store.is_authenticated(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_sign_in_accepts_any_non_empty_pair() {
        let mut store = MemorySessionStore::new();
        let session = store.sign_in(&creds("ada@example.ng", "whatever")).unwrap();

        assert!(store.is_authenticated());
        assert_eq!(session.role, OWNER_ROLE);
        assert_eq!(session.email, "ada@example.ng");
    }

    #[test]
    fn test_sign_in_rejects_empty_credentials() {
        let mut store = MemorySessionStore::new();
        assert!(store.sign_in(&creds("", "pw")).is_err());
        assert!(store.sign_in(&creds("a@b.c", "   ")).is_err());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let mut store = MemorySessionStore::new();
        store.sign_in(&creds("ada@example.ng", "pw")).unwrap();
        store.sign_out().unwrap();

        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileSessionStore::open(path.clone());
        store.sign_in(&creds("ada@example.ng", "pw")).unwrap();

        let reopened = FileSessionStore::open(path);
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.current_user().unwrap().email, "ada@example.ng");
    }

    #[test]
    fn test_file_store_sign_out_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileSessionStore::open(path.clone());
        store.sign_in(&creds("ada@example.ng", "pw")).unwrap();
        assert!(path.exists());

        store.sign_out().unwrap();
        assert!(!path.exists());

        let reopened = FileSessionStore::open(path);
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn test_missing_file_means_signed_out() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::open(dir.path().join("nope.json"));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_route_guard() {
        let mut store = MemorySessionStore::new();

        assert!(may_enter(GuardedArea::Browse, &store));
        assert!(may_enter(GuardedArea::Detail, &store));
        assert!(!may_enter(GuardedArea::Wizard, &store));
        assert!(!may_enter(GuardedArea::Dashboard, &store));

        store.sign_in(&creds("ada@example.ng", "pw")).unwrap();
        assert!(may_enter(GuardedArea::Wizard, &store));
        assert!(may_enter(GuardedArea::Dashboard, &store));
    }
}
