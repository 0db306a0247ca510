//! Problem service

use crate::{
    api::{HostcodeApi, SubmitRequest},
    error::{AppError, AppResult},
    models::{Language, Pagination, ProblemDetails, ProblemSummary, find_language_id},
    session::AuthSession,
};

/// One page of the gym list with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemBoard {
    pub problems: Vec<ProblemSummary>,
    pub pagination: Pagination,
}

/// A problem statement together with the languages it can be solved in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemWorkspace {
    pub problem: ProblemDetails,
    pub languages: Vec<Language>,
}

impl ProblemWorkspace {
    /// Language preselected in the editor
    pub fn default_language(&self) -> Option<&Language> {
        self.languages.first()
    }
}

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List one page of problems. Pages are 1-based; 0 is treated as 1.
    pub async fn list_problems(
        api: &dyn HostcodeApi,
        page_num: u32,
        page_size: u32,
    ) -> AppResult<ProblemBoard> {
        let page_num = page_num.max(1);
        let page_size = page_size.max(1);
        let page = api.list_problems(page_num, page_size).await?;

        let pagination = Pagination::new(page_num, page_size, page.total_records);
        tracing::debug!(
            page = pagination.page,
            total_pages = pagination.total_pages(),
            count = page.problems.len(),
            "problems loaded"
        );

        Ok(ProblemBoard {
            problems: page.problems,
            pagination,
        })
    }

    /// Load a problem and the language list concurrently
    pub async fn open_problem(api: &dyn HostcodeApi, problem_id: i64) -> AppResult<ProblemWorkspace> {
        let (problem, languages) =
            tokio::try_join!(api.problem_details(problem_id), api.languages())?;
        Ok(ProblemWorkspace { problem, languages })
    }

    pub async fn languages(api: &dyn HostcodeApi) -> AppResult<Vec<Language>> {
        api.languages().await
    }

    /// Submit a solution in the language named `language`
    pub async fn submit(
        api: &dyn HostcodeApi,
        session: &AuthSession,
        problem_id: i64,
        language: &str,
        code: String,
    ) -> AppResult<()> {
        session.require_login()?;

        let languages = api.languages().await?;
        let language_id = find_language_id(&languages, language).ok_or_else(|| {
            let known: Vec<&str> = languages.iter().map(|l| l.language.as_str()).collect();
            AppError::Validation(format!(
                "Unsupported language '{language}' (available: {})",
                known.join(", ")
            ))
        })?;

        let token = session.token()?;
        api.submit_solution(
            SubmitRequest {
                problem_id,
                language_id,
                code,
            },
            token,
        )
        .await?;

        tracing::info!(problem_id, language, "solution submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::MockHostcodeApi;
    use crate::constants::ACCESS_TOKEN_COOKIE;
    use crate::models::ProblemPage;
    use crate::session::MemoryStore;

    fn languages() -> Vec<Language> {
        vec![
            Language {
                lid: 1,
                language: "python-3.9".to_string(),
            },
            Language {
                lid: 2,
                language: "cpp-17".to_string(),
            },
        ]
    }

    fn problem(pid: i64) -> ProblemDetails {
        ProblemDetails {
            pid,
            name: "Two Sum".to_string(),
            description: "Find $a \\\\le b$".to_string(),
            constraints: String::new(),
            input_format: String::new(),
            output_format: String::new(),
            sample_input: "1 2".to_string(),
            sample_output: "3".to_string(),
            explanation: String::new(),
            score: Some(100),
            contest_id: None,
        }
    }

    fn session(logged_in: bool) -> AuthSession {
        let store = if logged_in {
            MemoryStore::with(ACCESS_TOKEN_COOKIE, "jwt")
        } else {
            MemoryStore::default()
        };
        AuthSession::initialize(Arc::new(store)).unwrap()
    }

    #[tokio::test]
    async fn test_list_problems_computes_pagination() {
        let mut api = MockHostcodeApi::new();
        api.expect_list_problems()
            .withf(|page, size| *page == 1 && *size == 10)
            .returning(|_, _| {
                Ok(ProblemPage {
                    problems: vec![ProblemSummary {
                        problem_id: 1,
                        problem_name: "A".to_string(),
                        problem_score: None,
                    }],
                    total_records: 21,
                })
            });

        let board = ProblemService::list_problems(&api, 0, 10).await.unwrap();
        assert_eq!(board.problems.len(), 1);
        assert_eq!(board.pagination.total_pages(), 3);
        assert!(!board.pagination.has_prev());
        assert!(board.pagination.has_next());
    }

    #[tokio::test]
    async fn test_open_problem_preselects_first_language() {
        let mut api = MockHostcodeApi::new();
        api.expect_problem_details()
            .withf(|id| *id == 4)
            .returning(|id| Ok(problem(id)));
        api.expect_languages().returning(|| Ok(languages()));

        let workspace = ProblemService::open_problem(&api, 4).await.unwrap();
        assert_eq!(workspace.problem.pid, 4);
        assert_eq!(workspace.problem.statement(), "Find $a \\le b$");
        assert_eq!(workspace.default_language().map(|l| l.lid), Some(1));
    }

    #[tokio::test]
    async fn test_submit_looks_up_language_id() {
        let mut api = MockHostcodeApi::new();
        api.expect_languages().returning(|| Ok(languages()));
        api.expect_submit_solution()
            .withf(|request, token| {
                request.problem_id == 4
                    && request.language_id == 2
                    && request.code == "int main() {}"
                    && token.as_deref() == Some("jwt")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        ProblemService::submit(&api, &session(true), 4, "cpp-17", "int main() {}".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_submit_unknown_language_is_rejected() {
        let mut api = MockHostcodeApi::new();
        api.expect_languages().returning(|| Ok(languages()));
        api.expect_submit_solution().never();

        let err = ProblemService::submit(&api, &session(true), 4, "cobol", String::new())
            .await
            .unwrap_err();
        match err {
            AppError::Validation(message) => assert!(message.contains("cobol")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_requires_login() {
        let mut api = MockHostcodeApi::new();
        api.expect_languages().never();
        api.expect_submit_solution().never();

        let err = ProblemService::submit(&api, &session(false), 4, "cpp-17", String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::LoginRequired));
    }
}
