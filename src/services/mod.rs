//! Page-level flows
//!
//! Each service is a unit struct whose associated functions take the API
//! and, where a credential is needed, the session explicitly.

pub mod auth_service;
pub mod contest_service;
pub mod problem_service;
pub mod submission_service;

pub use auth_service::AuthService;
pub use contest_service::{ContestBoard, ContestCard, ContestService};
pub use problem_service::{ProblemBoard, ProblemService, ProblemWorkspace};
pub use submission_service::{SubmissionReport, SubmissionService};
