//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contest author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, alias = "uid", alias = "user_id")]
    pub id: Option<i64>,
    pub username: String,
}

/// Problem reference inside a contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestProblem {
    pub problem_id: i64,
    pub problem_name: String,
}

/// Contest snapshot as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub cid: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub problems: Vec<ContestProblem>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl Contest {
    /// Phase of this contest at `now`
    pub fn phase_at(&self, now: DateTime<Utc>) -> PhaseWindow {
        ContestPhase::classify(now, self.start_time, self.end_time)
    }

    /// Whether the contest window is well formed (`start_time < end_time`)
    pub fn has_valid_window(&self) -> bool {
        self.start_time < self.end_time
    }

    /// Comma-separated author usernames
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|author| author.username.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Contest buckets returned by `GET /contests`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestListing {
    pub running: Vec<Contest>,
    pub upcoming: Vec<Contest>,
    pub recent: Vec<Contest>,
}

/// Temporal phase of a contest relative to wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestPhase {
    Upcoming,
    Running,
    Ended,
}

/// A phase plus the timestamp its countdown runs towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseWindow {
    pub phase: ContestPhase,
    /// `None` once the contest has ended
    pub target: Option<DateTime<Utc>>,
}

impl ContestPhase {
    /// Classify `now` against a contest window.
    ///
    /// Equal timestamps fall into the later phase: `now == start` is
    /// `Running` and `now == end` is `Ended`.
    pub fn classify(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> PhaseWindow {
        if now < start {
            PhaseWindow {
                phase: Self::Upcoming,
                target: Some(start),
            }
        } else if now < end {
            PhaseWindow {
                phase: Self::Running,
                target: Some(end),
            }
        } else {
            PhaseWindow {
                phase: Self::Ended,
                target: None,
            }
        }
    }

    /// Countdown label shown next to the timer
    pub fn countdown_label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Starts In",
            Self::Running => "Ends In",
            Self::Ended => "Contest Ended",
        }
    }
}

impl std::fmt::Display for ContestPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Running => write!(f, "running"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = DateTime::parse_from_rfc3339("2025-06-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        (start, start + Duration::hours(2))
    }

    #[test]
    fn test_before_start_is_upcoming() {
        let (start, end) = window();
        for offset in [1, 999, 3_600_000] {
            let now = start - Duration::milliseconds(offset);
            let w = ContestPhase::classify(now, start, end);
            assert_eq!(w.phase, ContestPhase::Upcoming);
            assert_eq!(w.target, Some(start));
        }
    }

    #[test]
    fn test_start_boundary_is_running() {
        let (start, end) = window();
        let w = ContestPhase::classify(start, start, end);
        assert_eq!(w.phase, ContestPhase::Running);
        assert_eq!(w.target, Some(end));

        let w = ContestPhase::classify(start - Duration::milliseconds(1), start, end);
        assert_eq!(w.phase, ContestPhase::Upcoming);
    }

    #[test]
    fn test_end_boundary_is_ended() {
        let (start, end) = window();
        let w = ContestPhase::classify(end - Duration::milliseconds(1), start, end);
        assert_eq!(w.phase, ContestPhase::Running);
        assert_eq!(w.target, Some(end));

        let w = ContestPhase::classify(end, start, end);
        assert_eq!(w.phase, ContestPhase::Ended);
        assert_eq!(w.target, None);

        let w = ContestPhase::classify(end + Duration::days(30), start, end);
        assert_eq!(w.phase, ContestPhase::Ended);
    }

    #[test]
    fn test_deserialize_contest() {
        let json = r#"{
            "cid": 7,
            "name": "Weekly Round 12",
            "description": "Six problems, two hours",
            "start_time": "2025-06-01T10:00:00.000Z",
            "end_time": "2025-06-01T12:00:00.000Z",
            "authors": [{"username": "setter"}, {"uid": 4, "username": "tester"}]
        }"#;
        let contest: Contest = serde_json::from_str(json).unwrap();
        assert_eq!(contest.cid, 7);
        assert!(contest.problems.is_empty());
        assert!(contest.has_valid_window());
        assert_eq!(contest.author_names(), "setter, tester");
        assert_eq!(contest.authors[1].id, Some(4));
        assert_eq!(
            contest.phase_at(contest.start_time).phase,
            ContestPhase::Running
        );
    }
}
