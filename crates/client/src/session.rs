//! Process-wide session accessor.
//!
//! The auth token lives in one of two slots: a persistent slot (backed by a
//! token file, survives restarts) and a session-scoped slot (process
//! lifetime only). Lookup prefers the persistent slot.
//!
//! A [`Session`] is installed once with [`Session::install`]. Front-ends
//! fetch it back with [`Session::current`] and inject it into
//! [`crate::ApiClient`]; nothing else reads tokens.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ClientConfig;

static GLOBAL: RwLock<Option<Session>> = RwLock::new(None);

/// Errors from session setup and the token file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a session is already installed")]
    AlreadyInstalled,

    #[error("token file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("token file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Which slot a token is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSlot {
    /// Survives restarts (token file).
    Persistent,
    /// Lives only as long as the process.
    Session,
}

#[derive(Default)]
struct Slots {
    persistent: Option<SecretString>,
    session: Option<SecretString>,
}

/// Shared handle to the two token slots.
#[derive(Clone, Default)]
pub struct Session {
    slots: Arc<RwLock<Slots>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Session")
            .field("persistent", &slots.persistent.as_ref().map(|_| "[REDACTED]"))
            .field("session", &slots.session.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Session {
    /// An empty, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session holding `token` in `slot`.
    #[must_use]
    pub fn with_token(slot: TokenSlot, token: impl Into<String>) -> Self {
        let session = Self::new();
        session.store(slot, SecretString::from(token.into()));
        session
    }

    /// Build a session from configuration: the token file fills the
    /// persistent slot, `SOCIETIES_SESSION_TOKEN` fills the session slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file exists but cannot be read or
    /// parsed.
    pub fn from_config(config: &ClientConfig) -> Result<Self, SessionError> {
        let session = Self::new();
        if let Some(token) = TokenFile::new(&config.token_file).load()? {
            session.store(TokenSlot::Persistent, token);
        }
        if let Some(token) = &config.session_token {
            session.store(TokenSlot::Session, token.clone());
        }
        Ok(session)
    }

    pub fn store(&self, slot: TokenSlot, token: SecretString) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        match slot {
            TokenSlot::Persistent => slots.persistent = Some(token),
            TokenSlot::Session => slots.session = Some(token),
        }
    }

    pub fn clear(&self, slot: TokenSlot) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        match slot {
            TokenSlot::Persistent => slots.persistent = None,
            TokenSlot::Session => slots.session = None,
        }
    }

    pub fn clear_all(&self) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        *slots = Slots::default();
    }

    /// The current token, persistent slot first.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.persistent.clone().or_else(|| slots.session.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Install `session` as the process-wide session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyInstalled`] if one is installed; call
    /// [`Session::teardown`] first.
    pub fn install(session: Self) -> Result<(), SessionError> {
        let mut global = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
        if global.is_some() {
            return Err(SessionError::AlreadyInstalled);
        }
        *global = Some(session);
        debug!("Session installed");
        Ok(())
    }

    /// The installed process-wide session, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        GLOBAL
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove the process-wide session and return it.
    pub fn teardown() -> Option<Self> {
        let session = GLOBAL
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if session.is_some() {
            debug!("Session torn down");
        }
        session
    }
}

#[derive(Serialize)]
struct StoredTokenRef<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct StoredToken {
    token: String,
}

/// JSON file backing the persistent token slot.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<SecretString>, SessionError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredToken = serde_json::from_str(&contents)?;
        Ok(Some(SecretString::from(stored.token)))
    }

    /// Write `token` to the file, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, token: &SecretString) -> Result<(), SessionError> {
        let contents = serde_json::to_string(&StoredTokenRef {
            token: token.expose_secret(),
        })?;
        std::fs::write(&self.path, contents)?;
        info!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    /// Delete the file. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn remove(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
