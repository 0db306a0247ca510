//! Problem model

use serde::{Deserialize, Serialize};

/// Problem row in the gym list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSummary {
    pub problem_id: i64,
    pub problem_name: String,
    #[serde(default)]
    pub problem_score: Option<i64>,
}

/// Full problem statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub pid: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub constraints: String,
    #[serde(default, alias = "input")]
    pub input_format: String,
    #[serde(default, alias = "output")]
    pub output_format: String,
    #[serde(default)]
    pub sample_input: String,
    #[serde(default)]
    pub sample_output: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub contest_id: Option<i64>,
}

impl ProblemDetails {
    /// Statement text with doubled backslashes collapsed for math rendering
    pub fn statement(&self) -> String {
        self.description.replace("\\\\", "\\")
    }
}

/// Submission language offered by the judge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub lid: i64,
    pub language: String,
}

impl Language {
    /// Code editor mode for this language, if known
    pub fn editor_mode(&self) -> Option<&'static str> {
        editor_language(&self.language)
    }
}

/// Map a judge language identifier to a code editor mode
pub fn editor_language(language: &str) -> Option<&'static str> {
    crate::constants::editor_modes::ALL
        .iter()
        .find(|(judge, _)| *judge == language)
        .map(|(_, mode)| *mode)
}

/// Find the language id for a language name
pub fn find_language_id(languages: &[Language], name: &str) -> Option<i64> {
    languages
        .iter()
        .find(|l| l.language == name)
        .map(|l| l.lid)
}

/// One page of the gym problem list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemPage {
    pub problems: Vec<ProblemSummary>,
    pub total_records: u64,
}

/// Page position within the gym problem list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based
    pub page: u32,
    pub page_size: u32,
    pub total_records: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total_records: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total_records,
        }
    }

    /// Number of pages, never less than one
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_records.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Previous page, clamped at the first
    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    /// Next page, clamped at the last
    pub fn next(&self) -> u32 {
        (self.page + 1).min(self.total_pages())
    }
}
