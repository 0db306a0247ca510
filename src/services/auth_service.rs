//! Authentication service

use crate::{
    api::{HostcodeApi, LoginRequest, SignupRequest},
    error::{AppError, AppResult},
    session::AuthSession,
    utils::validate_login,
};

/// Authentication service for business logic
pub struct AuthService;

impl AuthService {
    /// Exchange credentials for an access token and persist it
    pub async fn login(
        api: &dyn HostcodeApi,
        session: &AuthSession,
        username: &str,
        password: &str,
    ) -> AppResult<()> {
        validate_login(username, password).map_err(|m| AppError::Validation(m.to_string()))?;

        let token = api
            .login(LoginRequest {
                username: username.trim().to_string(),
                password: password.to_string(),
            })
            .await?;

        session.login(&token)?;
        tracing::info!(username = username.trim(), "user logged in");
        Ok(())
    }

    pub fn logout(session: &AuthSession) -> AppResult<()> {
        session.logout()
    }

    /// Validate the signup form and create the account
    pub async fn signup(api: &dyn HostcodeApi, request: SignupRequest) -> AppResult<String> {
        request.check()?;

        let username = request.username.clone();
        let message = api.signup(request).await?;
        tracing::info!(%username, "account created");
        Ok(message)
    }
}
