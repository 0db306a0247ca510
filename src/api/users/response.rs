//! User response DTOs

use serde::Deserialize;

/// `POST /user/login`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub hostcode_access_token: String,
}
