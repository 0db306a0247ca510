//! Contest service

use chrono::{DateTime, Utc};

use crate::{
    api::HostcodeApi,
    countdown::Countdown,
    error::AppResult,
    models::{Contest, ContestPhase},
    registration::RegistrationPopup,
    session::AuthSession,
};

/// A contest decorated with its phase and countdown at fetch time
#[derive(Debug, Clone, PartialEq)]
pub struct ContestCard {
    pub contest: Contest,
    pub phase: ContestPhase,
    pub countdown: Countdown,
}

/// Contest list page, bucketed the way the server returns it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContestBoard {
    pub running: Vec<ContestCard>,
    pub upcoming: Vec<ContestCard>,
    pub recent: Vec<ContestCard>,
}

impl ContestBoard {
    pub fn is_empty(&self) -> bool {
        self.running.is_empty() && self.upcoming.is_empty() && self.recent.is_empty()
    }
}

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Fetch the contest buckets and classify each contest against `now`
    pub async fn list_contests(api: &dyn HostcodeApi, now: DateTime<Utc>) -> AppResult<ContestBoard> {
        let listing = api.list_contests().await?;

        let board = ContestBoard {
            running: Self::to_cards(listing.running, now),
            upcoming: Self::to_cards(listing.upcoming, now),
            recent: Self::to_cards(listing.recent, now),
        };

        tracing::debug!(
            running = board.running.len(),
            upcoming = board.upcoming.len(),
            recent = board.recent.len(),
            "contests loaded"
        );

        Ok(board)
    }

    /// Get contest by ID
    pub async fn get_contest(api: &dyn HostcodeApi, contest_id: i64) -> AppResult<Contest> {
        let contest = api.contest_details(contest_id).await?;
        Self::check_window(&contest);
        Ok(contest)
    }

    /// Issue the registration request for a confirmed popup.
    ///
    /// Returns whether a request was issued: `false` without touching the
    /// network unless the popup is in `OpenConfirmed`. Failures are not
    /// returned; they end up in the popup as `Failed(message)`.
    pub async fn register(
        api: &dyn HostcodeApi,
        session: &AuthSession,
        popup: &mut RegistrationPopup,
    ) -> bool {
        if !popup.confirm() {
            return false;
        }

        let contest_id = popup.contest_id();
        let outcome = match session.token() {
            Ok(token) => api.register_for_contest(contest_id, token).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(message) => {
                tracing::info!(contest_id, "registered for contest");
                popup.resolve(Ok(message));
            }
            Err(e) => {
                tracing::warn!(contest_id, error = %e, "registration failed");
                popup.resolve(Err(e.user_message()));
            }
        }

        true
    }

    fn to_cards(contests: Vec<Contest>, now: DateTime<Utc>) -> Vec<ContestCard> {
        contests
            .into_iter()
            .map(|contest| {
                Self::check_window(&contest);
                let window = contest.phase_at(now);
                let countdown = Countdown::at(now, contest.start_time, contest.end_time);
                ContestCard {
                    contest,
                    phase: window.phase,
                    countdown,
                }
            })
            .collect()
    }

    fn check_window(contest: &Contest) {
        if !contest.has_valid_window() {
            tracing::warn!(
                cid = contest.cid,
                start = %contest.start_time,
                end = %contest.end_time,
                "contest ends before it starts"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;

    use super::*;
    use crate::api::MockHostcodeApi;
    use crate::constants::ACCESS_TOKEN_COOKIE;
    use crate::error::AppError;
    use crate::models::ContestListing;
    use crate::registration::RegistrationState;
    use crate::session::MemoryStore;
    use crate::utils::DurationParts;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn contest(cid: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> Contest {
        Contest {
            cid,
            name: format!("Round {cid}"),
            description: None,
            start_time: start,
            end_time: end,
            problems: vec![],
            authors: vec![],
        }
    }

    fn logged_in() -> AuthSession {
        AuthSession::initialize(Arc::new(MemoryStore::with(ACCESS_TOKEN_COOKIE, "jwt"))).unwrap()
    }

    #[tokio::test]
    async fn test_list_contests_classifies_each_card() {
        let now = now();
        let listing = ContestListing {
            running: vec![contest(1, now - Duration::hours(1), now + Duration::hours(2))],
            upcoming: vec![contest(2, now + Duration::hours(1), now + Duration::hours(3))],
            recent: vec![contest(3, now - Duration::days(2), now - Duration::days(1))],
        };

        let mut api = MockHostcodeApi::new();
        api.expect_list_contests()
            .times(1)
            .returning(move || Ok(listing.clone()));

        let board = ContestService::list_contests(&api, now).await.unwrap();
        assert!(!board.is_empty());
        assert_eq!(board.running[0].phase, ContestPhase::Running);
        assert_eq!(board.recent[0].countdown, Countdown::Ended);

        let upcoming = &board.upcoming[0];
        assert_eq!(upcoming.phase, ContestPhase::Upcoming);
        assert_eq!(upcoming.countdown.to_string(), "Starts In: 0d 1h 0m 0s");
        assert_eq!(
            upcoming.countdown,
            Countdown::Remaining {
                phase: ContestPhase::Upcoming,
                parts: DurationParts {
                    days: 0,
                    hours: 1,
                    minutes: 0,
                    seconds: 0
                },
            }
        );
    }

    #[tokio::test]
    async fn test_inverted_window_is_still_listed() {
        let now = now();
        let listing = ContestListing {
            upcoming: vec![contest(9, now + Duration::hours(3), now + Duration::hours(1))],
            ..Default::default()
        };

        let mut api = MockHostcodeApi::new();
        api.expect_list_contests()
            .returning(move || Ok(listing.clone()));

        let board = ContestService::list_contests(&api, now).await.unwrap();
        assert_eq!(board.upcoming.len(), 1);
        assert_eq!(board.upcoming[0].phase, ContestPhase::Upcoming);
    }

    #[tokio::test]
    async fn test_list_error_propagates() {
        let mut api = MockHostcodeApi::new();
        api.expect_list_contests()
            .returning(|| Err(AppError::Network("timed out".to_string())));

        let err = ContestService::list_contests(&api, now()).await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }

    #[tokio::test]
    async fn test_register_scenario_ends_registered() {
        let mut api = MockHostcodeApi::new();
        api.expect_register_for_contest()
            .withf(|id, token| *id == 7 && token.as_deref() == Some("jwt"))
            .times(1)
            .returning(|_, _| Ok("Registered!".to_string()));

        let session = logged_in();
        let mut popup = RegistrationPopup::new(7);
        popup.open();
        popup.set_agreement(true);

        let issued = ContestService::register(&api, &session, &mut popup).await;
        assert!(issued);
        assert_eq!(
            popup.state(),
            &RegistrationState::Registered("Registered!".to_string())
        );
    }

    #[tokio::test]
    async fn test_register_without_agreement_is_noop() {
        let mut api = MockHostcodeApi::new();
        api.expect_register_for_contest().never();

        let session = logged_in();
        let mut popup = RegistrationPopup::new(7);
        popup.open();

        let issued = ContestService::register(&api, &session, &mut popup).await;
        assert!(!issued);
        assert_eq!(popup.state(), &RegistrationState::OpenUnconfirmed);
    }

    #[tokio::test]
    async fn test_register_failure_carries_server_message() {
        let mut api = MockHostcodeApi::new();
        api.expect_register_for_contest()
            .withf(|_, token| token.is_none())
            .returning(|_, _| {
                Err(AppError::Api {
                    status: 401,
                    message: "Please login to register".to_string(),
                })
            });

        let session = AuthSession::initialize(Arc::new(MemoryStore::default())).unwrap();
        let mut popup = RegistrationPopup::new(3);
        popup.open();
        popup.set_agreement(true);

        ContestService::register(&api, &session, &mut popup).await;
        assert_eq!(
            popup.state(),
            &RegistrationState::Failed("Please login to register".to_string())
        );

        assert!(popup.retry());
        assert!(popup.can_confirm());
    }
}
