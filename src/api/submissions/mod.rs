//! Submission endpoints

pub mod response;

pub fn details_path(submission_id: i64) -> String {
    format!("/submission/{submission_id}")
}
