//! Contest endpoints

pub mod response;

pub fn list_path() -> String {
    "/contests".to_string()
}

pub fn details_path(contest_id: i64) -> String {
    format!("/contests/{contest_id}")
}

pub fn register_path(contest_id: i64) -> String {
    format!("/contests/{contest_id}/register")
}

pub fn my_submissions_path(contest_id: i64) -> String {
    format!("/contests/{contest_id}/mysubmissions")
}
