//! Contest registration popup
//!
//! The popup gates the registration request behind an explicit agreement
//! to the terms. Only [`RegistrationState::OpenConfirmed`] may issue the
//! request, and `Submitting` blocks a second one until the first resolves.
//! Events that have no transition from the current state are ignored.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum RegistrationState {
    Closed,
    OpenUnconfirmed,
    OpenConfirmed,
    Submitting,
    Registered(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    Open,
    Check,
    Uncheck,
    Confirm,
    Succeeded(String),
    Rejected(String),
    Retry,
    Close,
}

impl RegistrationState {
    /// Next state for `event`, or `None` if the event does not apply
    pub fn next(&self, event: RegistrationEvent) -> Option<RegistrationState> {
        use RegistrationEvent as E;
        use RegistrationState as S;

        match (self, event) {
            (S::Closed, E::Open) => Some(S::OpenUnconfirmed),
            (S::OpenUnconfirmed, E::Check) => Some(S::OpenConfirmed),
            (S::OpenConfirmed, E::Uncheck) => Some(S::OpenUnconfirmed),
            (S::OpenConfirmed, E::Confirm) => Some(S::Submitting),
            (S::Submitting, E::Succeeded(message)) => Some(S::Registered(message)),
            (S::Submitting, E::Rejected(message)) => Some(S::Failed(message)),
            (S::Failed(_), E::Retry) => Some(S::OpenConfirmed),
            (S::OpenUnconfirmed | S::OpenConfirmed | S::Failed(_) | S::Registered(_), E::Close) => {
                Some(S::Closed)
            }
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Registration popup for one contest
#[derive(Debug, Clone)]
pub struct RegistrationPopup {
    contest_id: i64,
    state: RegistrationState,
}

impl RegistrationPopup {
    pub fn new(contest_id: i64) -> Self {
        Self {
            contest_id,
            state: RegistrationState::Closed,
        }
    }

    pub fn contest_id(&self) -> i64 {
        self.contest_id
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    /// Whether the confirm control is enabled
    pub fn can_confirm(&self) -> bool {
        matches!(self.state, RegistrationState::OpenConfirmed)
    }

    /// Apply an event, returning whether the state changed
    pub fn apply(&mut self, event: RegistrationEvent) -> bool {
        let label = format!("{event:?}");
        match self.state.next(event) {
            Some(next) => {
                tracing::debug!(
                    contest_id = self.contest_id,
                    from = ?self.state,
                    to = ?next,
                    event = %label,
                    "registration transition"
                );
                self.state = next;
                true
            }
            None => {
                tracing::trace!(
                    contest_id = self.contest_id,
                    state = ?self.state,
                    event = %label,
                    "registration event ignored"
                );
                false
            }
        }
    }

    pub fn open(&mut self) -> bool {
        self.apply(RegistrationEvent::Open)
    }

    /// Tick or untick the terms checkbox
    pub fn set_agreement(&mut self, agreed: bool) -> bool {
        if agreed {
            self.apply(RegistrationEvent::Check)
        } else {
            self.apply(RegistrationEvent::Uncheck)
        }
    }

    /// Move to `Submitting`. Returns `false` (and does nothing) unless the
    /// terms were agreed to.
    pub fn confirm(&mut self) -> bool {
        self.apply(RegistrationEvent::Confirm)
    }

    /// Record the server's reply to the registration request
    pub fn resolve(&mut self, outcome: Result<String, String>) -> bool {
        match outcome {
            Ok(message) => self.apply(RegistrationEvent::Succeeded(message)),
            Err(message) => self.apply(RegistrationEvent::Rejected(message)),
        }
    }

    pub fn retry(&mut self) -> bool {
        self.apply(RegistrationEvent::Retry)
    }

    pub fn close(&mut self) -> bool {
        self.apply(RegistrationEvent::Close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut popup = RegistrationPopup::new(12);
        assert!(popup.open());
        assert_eq!(popup.state(), &RegistrationState::OpenUnconfirmed);
        assert!(!popup.can_confirm());

        assert!(popup.set_agreement(true));
        assert!(popup.can_confirm());

        assert!(popup.confirm());
        assert_eq!(popup.state(), &RegistrationState::Submitting);

        assert!(popup.resolve(Ok("Registered!".to_string())));
        assert_eq!(
            popup.state(),
            &RegistrationState::Registered("Registered!".to_string())
        );

        assert!(popup.close());
        assert_eq!(popup.state(), &RegistrationState::Closed);
    }

    #[test]
    fn test_confirm_is_noop_outside_open_confirmed() {
        let states = [
            RegistrationState::Closed,
            RegistrationState::OpenUnconfirmed,
            RegistrationState::Submitting,
            RegistrationState::Registered("ok".to_string()),
            RegistrationState::Failed("no".to_string()),
        ];
        for state in states {
            let mut popup = RegistrationPopup::new(1);
            popup.state = state.clone();
            assert!(!popup.confirm());
            assert_eq!(popup.state(), &state);
        }
    }

    #[test]
    fn test_uncheck_disables_confirm() {
        let mut popup = RegistrationPopup::new(1);
        popup.open();
        popup.set_agreement(true);
        popup.set_agreement(false);
        assert_eq!(popup.state(), &RegistrationState::OpenUnconfirmed);
        assert!(!popup.confirm());
    }

    #[test]
    fn test_failure_then_retry() {
        let mut popup = RegistrationPopup::new(1);
        popup.open();
        popup.set_agreement(true);
        popup.confirm();
        assert!(popup.resolve(Err("Unauthorized".to_string())));
        assert_eq!(
            popup.state(),
            &RegistrationState::Failed("Unauthorized".to_string())
        );
        assert!(!popup.can_confirm());

        assert!(popup.retry());
        assert!(popup.can_confirm());
        assert!(popup.confirm());
    }

    #[test]
    fn test_submitting_cannot_be_closed_or_resubmitted() {
        let mut popup = RegistrationPopup::new(1);
        popup.open();
        popup.set_agreement(true);
        popup.confirm();

        assert!(!popup.close());
        assert!(!popup.confirm());
        assert!(!popup.set_agreement(false));
        assert_eq!(popup.state(), &RegistrationState::Submitting);
    }

    #[test]
    fn test_replies_outside_submitting_are_ignored() {
        let mut popup = RegistrationPopup::new(1);
        popup.open();
        assert!(!popup.resolve(Ok("late".to_string())));
        assert_eq!(popup.state(), &RegistrationState::OpenUnconfirmed);
    }

    #[test]
    fn test_cancel_from_every_open_state() {
        for agree in [false, true] {
            let mut popup = RegistrationPopup::new(1);
            popup.open();
            if agree {
                popup.set_agreement(true);
            }
            assert!(popup.close());
            assert!(!popup.state().is_open());
        }

        let mut popup = RegistrationPopup::new(1);
        popup.state = RegistrationState::Failed("x".to_string());
        assert!(popup.close());
    }
}
