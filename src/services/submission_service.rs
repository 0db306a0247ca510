//! Submission service

use crate::{
    api::HostcodeApi,
    error::AppResult,
    models::{Submission, SubmissionSummary, TestAggregate},
    session::AuthSession,
};

/// Submission detail with its per-status test counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub submission: Submission,
    /// `None` while judging is in progress
    pub aggregate: Option<TestAggregate>,
}

impl SubmissionReport {
    pub fn new(submission: Submission) -> Self {
        let aggregate = submission.test_aggregate();
        Self {
            submission,
            aggregate,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.aggregate.is_none()
    }
}

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// The current user's submissions in a contest
    pub async fn list_my_submissions(
        api: &dyn HostcodeApi,
        session: &AuthSession,
        contest_id: i64,
    ) -> AppResult<Vec<SubmissionSummary>> {
        session.require_login()?;
        let token = session.token()?;
        api.my_submissions(contest_id, token).await
    }

    /// Get submission by ID, aggregating the judge result when present
    pub async fn get_submission(
        api: &dyn HostcodeApi,
        session: &AuthSession,
        submission_id: i64,
    ) -> AppResult<SubmissionReport> {
        session.require_login()?;
        let token = session.token()?;
        let submission = api.submission(submission_id, token).await?;

        let report = SubmissionReport::new(submission);
        tracing::debug!(
            submission_id,
            pending = report.is_pending(),
            "submission loaded"
        );
        Ok(report)
    }
}
