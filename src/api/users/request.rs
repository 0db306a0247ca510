//! User request DTOs

use serde::Serialize;
use validator::Validate;

use crate::constants::{MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use crate::error::{AppError, AppResult};
use crate::utils::validation::{validate_dob, validate_mobile};

/// `POST /user/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /user/register`
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = MIN_USERNAME_LENGTH, message = "Username must be at least 3 characters"))]
    pub username: String,

    #[validate(length(min = MIN_NAME_LENGTH, message = "Must be at least 2 characters"))]
    pub firstname: String,

    #[validate(length(min = MIN_NAME_LENGTH, message = "Must be at least 2 characters"))]
    pub lastname: String,

    /// `YYYY-MM-DD`
    #[validate(custom(function = validate_dob))]
    pub dob: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[serde(skip_serializing)]
    pub confirm_password: String,

    #[validate(custom(function = validate_mobile))]
    pub mobile: String,

    #[validate(email(message = "Enter a valid email"))]
    pub email: String,

    #[validate(length(min = MIN_NAME_LENGTH, message = "Must be at least 2 characters"))]
    pub organization: String,
}

impl SignupRequest {
    /// Field validation plus the password confirmation check
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        if self.password != self.confirm_password {
            return Err(AppError::Validation(
                "confirm_password: Passwords must match".to_string(),
            ));
        }
        Ok(())
    }
}
