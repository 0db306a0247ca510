//! HOSTCODE REST API
//!
//! [`HostcodeApi`] is the seam between the services and the network.
//! [`ApiClient`] implements it over HTTP; tests substitute a mock.

pub mod client;
pub mod contests;
pub mod problems;
pub mod submissions;
pub mod users;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{
    Contest, ContestListing, Language, ProblemDetails, ProblemPage, Submission, SubmissionSummary,
};

pub use client::ApiClient;
pub use problems::request::SubmitRequest;
pub use users::request::{LoginRequest, SignupRequest};

/// `{ "message": ... }` body used for both acknowledgements and errors
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Every operation the client performs against the backend.
///
/// Credential-bearing calls take the token explicitly; `None` sends the
/// request without an `Authorization` header and leaves rejection to the
/// server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostcodeApi: Send + Sync {
    async fn list_contests(&self) -> AppResult<ContestListing>;

    async fn contest_details(&self, contest_id: i64) -> AppResult<Contest>;

    /// Returns the server's confirmation message
    async fn register_for_contest(&self, contest_id: i64, token: Option<String>) -> AppResult<String>;

    async fn list_problems(&self, page_num: u32, page_size: u32) -> AppResult<ProblemPage>;

    async fn problem_details(&self, problem_id: i64) -> AppResult<ProblemDetails>;

    async fn languages(&self) -> AppResult<Vec<Language>>;

    async fn submit_solution(&self, request: SubmitRequest, token: Option<String>) -> AppResult<()>;

    async fn my_submissions(
        &self,
        contest_id: i64,
        token: Option<String>,
    ) -> AppResult<Vec<SubmissionSummary>>;

    async fn submission(&self, submission_id: i64, token: Option<String>) -> AppResult<Submission>;

    /// Returns the access token
    async fn login(&self, request: LoginRequest) -> AppResult<String>;

    /// Returns the server's confirmation message
    async fn signup(&self, request: SignupRequest) -> AppResult<String>;
}
