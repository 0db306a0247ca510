//! Problem endpoints

pub mod request;
pub mod response;

pub fn page_path(page_num: u32, page_size: u32) -> String {
    format!("/problems?pageNum={page_num}&pageSize={page_size}")
}

pub fn details_path(problem_id: i64) -> String {
    format!("/problems/{problem_id}")
}

pub fn languages_path() -> String {
    "/problems/languages".to_string()
}

pub fn submit_path() -> String {
    "/problems/submit".to_string()
}
