//! Application state management
//!
//! This module contains the shared client state that every CLI command
//! receives: configuration, the API client, the auth session and the clock.

use std::sync::Arc;

use crate::{
    api::{ApiClient, HostcodeApi},
    config::Config,
    error::AppResult,
    session::{AuthSession, CookieJar, CredentialStore},
    utils::{Clock, SystemClock},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Client configuration
    config: Config,

    /// REST client
    api: Arc<dyn HostcodeApi>,

    /// Login state backed by the cookie jar
    session: AuthSession,

    /// Wall clock used for phase classification and countdowns
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Build the HTTP client and restore the persisted session
    pub fn new(config: Config) -> AppResult<Self> {
        let api = Arc::new(ApiClient::new(&config.api)?);
        let store: Arc<dyn CredentialStore> = Arc::new(CookieJar::new(&config.session.cookie_jar));
        let session = AuthSession::initialize(store)?;

        tracing::debug!(
            api = %config.api.base_url,
            cookie_jar = %config.session.cookie_jar.display(),
            logged_in = session.is_logged_in(),
            "client state ready"
        );

        Ok(Self::from_parts(config, api, session, Arc::new(SystemClock)))
    }

    /// Assemble state from already-built parts
    pub fn from_parts(
        config: Config,
        api: Arc<dyn HostcodeApi>,
        session: AuthSession,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                session,
                clock,
            }),
        }
    }

    /// Get a reference to the API client
    pub fn api(&self) -> &dyn HostcodeApi {
        self.inner.api.as_ref()
    }

    /// Get a reference to the auth session
    pub fn session(&self) -> &AuthSession {
        &self.inner.session
    }

    /// Get a clone of the clock handle
    pub fn clock(&self) -> Arc<dyn Clock> {
        self.inner.clock.clone()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
