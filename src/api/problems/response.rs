//! Problem response DTOs

use serde::Deserialize;

use crate::models::{Language, ProblemDetails, ProblemPage, ProblemSummary};

/// `GET /problems?pageNum&pageSize`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemsResponse {
    pub problems: Vec<ProblemSummary>,
    pub total_records: u64,
}

impl From<ProblemsResponse> for ProblemPage {
    fn from(response: ProblemsResponse) -> Self {
        ProblemPage {
            problems: response.problems,
            total_records: response.total_records,
        }
    }
}

/// `GET /problems/{id}`
#[derive(Debug, Deserialize)]
pub struct ProblemResponse {
    pub problem: ProblemDetails,
}

/// `GET /problems/languages`
#[derive(Debug, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<Language>,
}
