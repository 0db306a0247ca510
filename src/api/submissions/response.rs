//! Submission response DTOs

use serde::Deserialize;

use crate::models::{Submission, SubmissionSummary};

/// `GET /contests/{id}/mysubmissions`
#[derive(Debug, Deserialize)]
pub struct SubmissionsResponse {
    pub submissions: Vec<SubmissionSummary>,
}

/// `GET /submission/{id}`
#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub submission: Submission,
}
