//! HTTP implementation of [`HostcodeApi`]

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::contests::response::{ContestDetailsResponse, ContestsResponse};
use super::problems::response::{LanguagesResponse, ProblemResponse, ProblemsResponse};
use super::submissions::response::{SubmissionResponse, SubmissionsResponse};
use super::users::response::LoginResponse;
use super::{
    HostcodeApi, LoginRequest, MessageResponse, SignupRequest, SubmitRequest, contests, problems,
    submissions, users,
};
use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::models::{
    Contest, ContestListing, Language, ProblemDetails, ProblemPage, Submission, SubmissionSummary,
};

/// REST client for the HOSTCODE backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client; the configured timeout applies to every request
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("hostcode/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and return the raw body of a 2xx response
    async fn execute(&self, builder: RequestBuilder) -> AppResult<Vec<u8>> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, %path, "sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(%method, %path, error = %e, "request failed");
            AppError::from(e)
        })?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(%method, %path, status = status.as_u16(), bytes = body.len(), "response received");

        if status.is_success() {
            Ok(body)
        } else {
            Err(error_from_response(status, &body))
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let body = self.execute(builder).await?;
        serde_json::from_slice(&body)
            .map_err(|e| AppError::Unknown(format!("unexpected response body: {e}")))
    }
}

/// Turn a non-2xx response into an error, using the `{message}` body when present
pub(crate) fn error_from_response(status: StatusCode, body: &[u8]) -> AppError {
    match serde_json::from_slice::<MessageResponse>(body) {
        Ok(MessageResponse { message }) => AppError::Api {
            status: status.as_u16(),
            message,
        },
        Err(_) => AppError::Unknown(format!("HTTP {status} without a message body")),
    }
}

#[async_trait]
impl HostcodeApi for ApiClient {
    async fn list_contests(&self) -> AppResult<ContestListing> {
        let response: ContestsResponse = self
            .fetch(self.request(Method::GET, &contests::list_path(), None))
            .await?;
        Ok(response.into_listing())
    }

    async fn contest_details(&self, contest_id: i64) -> AppResult<Contest> {
        let response: ContestDetailsResponse = self
            .fetch(self.request(Method::GET, &contests::details_path(contest_id), None))
            .await?;
        Ok(response.contest_details)
    }

    async fn register_for_contest(&self, contest_id: i64, token: Option<String>) -> AppResult<String> {
        let builder = self
            .request(
                Method::POST,
                &contests::register_path(contest_id),
                token.as_deref(),
            )
            .json(&serde_json::json!({}));
        let response: MessageResponse = self.fetch(builder).await?;
        Ok(response.message)
    }

    async fn list_problems(&self, page_num: u32, page_size: u32) -> AppResult<ProblemPage> {
        let response: ProblemsResponse = self
            .fetch(self.request(Method::GET, &problems::page_path(page_num, page_size), None))
            .await?;
        Ok(response.into())
    }

    async fn problem_details(&self, problem_id: i64) -> AppResult<ProblemDetails> {
        let response: ProblemResponse = self
            .fetch(self.request(Method::GET, &problems::details_path(problem_id), None))
            .await?;
        Ok(response.problem)
    }

    async fn languages(&self) -> AppResult<Vec<Language>> {
        let response: LanguagesResponse = self
            .fetch(self.request(Method::GET, &problems::languages_path(), None))
            .await?;
        Ok(response.languages)
    }

    async fn submit_solution(&self, request: SubmitRequest, token: Option<String>) -> AppResult<()> {
        let builder = self
            .request(Method::POST, &problems::submit_path(), token.as_deref())
            .json(&request);
        self.execute(builder).await?;
        Ok(())
    }

    async fn my_submissions(
        &self,
        contest_id: i64,
        token: Option<String>,
    ) -> AppResult<Vec<SubmissionSummary>> {
        let response: SubmissionsResponse = self
            .fetch(self.request(
                Method::GET,
                &contests::my_submissions_path(contest_id),
                token.as_deref(),
            ))
            .await?;
        Ok(response.submissions)
    }

    async fn submission(&self, submission_id: i64, token: Option<String>) -> AppResult<Submission> {
        let response: SubmissionResponse = self
            .fetch(self.request(
                Method::GET,
                &submissions::details_path(submission_id),
                token.as_deref(),
            ))
            .await?;
        Ok(response.submission)
    }

    async fn login(&self, request: LoginRequest) -> AppResult<String> {
        let builder = self
            .request(Method::POST, &users::login_path(), None)
            .json(&request);
        let response: LoginResponse = self.fetch(builder).await?;
        Ok(response.hostcode_access_token)
    }

    async fn signup(&self, request: SignupRequest) -> AppResult<String> {
        let builder = self
            .request(Method::POST, &users::register_path(), None)
            .json(&request);
        let response: MessageResponse = self.fetch(builder).await?;
        Ok(response.message)
    }
}
