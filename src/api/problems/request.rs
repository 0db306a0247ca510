//! Problem request DTOs

use serde::Serialize;

/// `POST /problems/submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub problem_id: i64,
    pub language_id: i64,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_is_camel_case() {
        let request = SubmitRequest {
            problem_id: 4,
            language_id: 2,
            code: "print(1)".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"problemId": 4, "languageId": 2, "code": "print(1)"})
        );
    }
}
