//! Process-wide authentication session
//!
//! [`AuthSession`] tracks whether a bearer credential is present. The
//! credential itself lives in a [`CredentialStore`] (a cookie jar on disk
//! in the CLI, memory in tests). Every mutation writes the store and the
//! flag under one write lock, so readers never observe them disagreeing.

pub mod cookie_jar;
pub mod memory;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::constants::ACCESS_TOKEN_COOKIE;
use crate::error::{AppError, AppResult};

pub use cookie_jar::CookieJar;
pub use memory::MemoryStore;

/// Named key/value secret storage
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    fn get(&self, name: &str) -> AppResult<Option<String>>;
    fn set(&self, name: &str, value: &str) -> AppResult<()>;
    fn remove(&self, name: &str) -> AppResult<()>;
}

#[derive(Debug)]
struct SessionInner {
    is_logged_in: bool,
}

/// Shared login state backed by persisted credential storage
#[derive(Clone)]
pub struct AuthSession {
    inner: Arc<RwLock<SessionInner>>,
    store: Arc<dyn CredentialStore>,
}

impl AuthSession {
    /// Read the persisted credential once and derive the login flag from it
    pub fn initialize(store: Arc<dyn CredentialStore>) -> AppResult<Self> {
        let is_logged_in = store.get(ACCESS_TOKEN_COOKIE)?.is_some();
        tracing::debug!(is_logged_in, "auth session initialized");

        Ok(Self {
            inner: Arc::new(RwLock::new(SessionInner { is_logged_in })),
            store,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().is_logged_in
    }

    /// Gate for credential-requiring screens; callers redirect to login on error
    pub fn require_login(&self) -> AppResult<()> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(AppError::LoginRequired)
        }
    }

    /// The stored bearer credential, if any
    pub fn token(&self) -> AppResult<Option<String>> {
        let _guard = self.read();
        self.store.get(ACCESS_TOKEN_COOKIE)
    }

    /// Persist `token` and mark the session logged in
    pub fn login(&self, token: &str) -> AppResult<()> {
        if token.is_empty() {
            return Err(AppError::Validation("received an empty access token".to_string()));
        }

        let mut inner = self.write();
        self.store.set(ACCESS_TOKEN_COOKIE, token)?;
        inner.is_logged_in = true;
        tracing::info!("logged in");
        Ok(())
    }

    /// Remove the persisted token and mark the session logged out
    pub fn logout(&self) -> AppResult<()> {
        let mut inner = self.write();
        self.store.remove(ACCESS_TOKEN_COOKIE)?;
        inner.is_logged_in = false;
        tracing::info!("logged out");
        Ok(())
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("is_logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}
