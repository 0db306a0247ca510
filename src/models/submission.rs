//! Submission model

use serde::{Deserialize, Serialize};

/// Outcome of a single judge test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestExecution {
    pub test_name: String,
    pub test_status: String,
}

/// Completed judge result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeResult {
    #[serde(default)]
    pub test_executions: Vec<TestExecution>,
}

impl JudgeResult {
    pub fn aggregate(&self) -> TestAggregate {
        TestAggregate::from_executions(&self.test_executions)
    }
}

/// Submission detail as returned by `GET /submission/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub sid: i64,
    pub problem_id: i64,
    #[serde(default)]
    pub problem_name: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(default, alias = "submission_status_label")]
    pub submission_status: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
    /// `None` while the judge has not finished
    #[serde(default)]
    pub result: Option<JudgeResult>,
}

impl Submission {
    /// Per-status test counts, or `None` if judging is still pending
    pub fn test_aggregate(&self) -> Option<TestAggregate> {
        self.result.as_ref().map(JudgeResult::aggregate)
    }

    pub fn is_judged(&self) -> bool {
        self.result.is_some()
    }
}

/// Row in the "my submissions" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub submission_id: i64,
    pub problem_id: i64,
    #[serde(default)]
    pub problem_name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default, alias = "submission_status_lablel")]
    pub submission_status_label: String,
}

/// Count of tests sharing one status label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Test counts grouped by status, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestAggregate {
    counts: Vec<StatusCount>,
}

impl TestAggregate {
    pub fn from_executions(executions: &[TestExecution]) -> Self {
        executions
            .iter()
            .fold(Self::default(), |mut agg, test| {
                agg.record(&test.test_status);
                agg
            })
    }

    fn record(&mut self, status: &str) {
        match self.counts.iter_mut().find(|c| c.status == status) {
            Some(entry) => entry.count += 1,
            None => self.counts.push(StatusCount {
                status: status.to_string(),
                count: 1,
            }),
        }
    }

    pub fn get(&self, status: &str) -> usize {
        self.counts
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    }

    /// Total number of tests aggregated
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct status labels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|c| (c.status.as_str(), c.count))
    }
}
