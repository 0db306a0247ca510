//! Input validation utilities

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidationError;

use crate::constants::MOBILE_DIGITS;

static DOB_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

static MOBILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\d{{{MOBILE_DIGITS}}}$")).expect("valid mobile regex")
});

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Date of birth must be `YYYY-MM-DD` and a real calendar date
pub fn validate_dob(dob: &str) -> Result<(), ValidationError> {
    if !DOB_REGEX.is_match(dob) || NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
        return Err(invalid("dob", "Use YYYY-MM-DD format"));
    }
    Ok(())
}

/// Mobile numbers are exactly ten digits
pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if !MOBILE_REGEX.is_match(mobile) {
        return Err(invalid("mobile", "Enter a valid 10-digit number"));
    }
    Ok(())
}

/// Login form fields must be non-empty
pub fn validate_login(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("username or email is required");
    }
    if password.is_empty() {
        return Err("password is required");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dob() {
        assert!(validate_dob("1999-04-30").is_ok());
        assert!(validate_dob("1999-4-30").is_err());
        assert!(validate_dob("1999-02-30").is_err());
        assert!(validate_dob("30/04/1999").is_err());
    }

    #[test]
    fn test_validate_mobile() {
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("98765").is_err());
        assert!(validate_mobile("98765432101").is_err());
        assert!(validate_mobile("98765abcde").is_err());
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("alice", "secret").is_ok());
        assert_eq!(validate_login("  ", "secret"), Err("username or email is required"));
        assert_eq!(validate_login("alice", ""), Err("password is required"));
    }
}
