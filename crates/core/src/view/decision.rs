//! Two-phase approve/reject transition for join requests.
//!
//! `begin` rewrites the stored status immediately (phase `Applying`), before
//! the write request is sent. The server outcome then moves the decision to
//! `Confirmed` or `Failed`. On failure the optimistic status stays in place
//! unless the caller opts into [`RollbackPolicy::Rollback`].

use thiserror::Error;

use crate::types::{JoinRequest, JoinRequestId, RequestStatus};

/// Admin decision on a join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionKind {
    Approve,
    Reject,
}

impl DecisionKind {
    /// Status the request ends up in.
    #[must_use]
    pub const fn target(self) -> RequestStatus {
        match self {
            Self::Approve => RequestStatus::Approved,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approve => write!(f, "approve"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// What to do with the optimistic status when the write fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollbackPolicy {
    /// Leave the optimistic status applied.
    #[default]
    KeepOptimistic,
    /// Restore the status the request had before `begin`.
    Rollback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionPhase {
    Applying,
    Confirmed,
    Failed { rolled_back: bool },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("join request {0} is not in the list")]
    UnknownRequest(JoinRequestId),

    #[error("join request {id} is already {status}")]
    NotPending {
        id: JoinRequestId,
        status: RequestStatus,
    },
}

/// An in-flight or finished decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub request_id: JoinRequestId,
    pub kind: DecisionKind,
    pub previous: RequestStatus,
    pub phase: DecisionPhase,
}

impl Decision {
    /// Apply the optimistic status change.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving `requests` untouched, if the request is
    /// unknown or no longer pending.
    pub fn begin(
        requests: &mut [JoinRequest],
        request_id: JoinRequestId,
        kind: DecisionKind,
    ) -> Result<Self, DecisionError> {
        let request = requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or(DecisionError::UnknownRequest(request_id))?;

        let previous = request.status;
        if !previous.can_transition_to(kind.target()) {
            return Err(DecisionError::NotPending {
                id: request_id,
                status: previous,
            });
        }

        request.status = kind.target();

        Ok(Self {
            request_id,
            kind,
            previous,
            phase: DecisionPhase::Applying,
        })
    }

    /// The server accepted the decision.
    pub const fn confirm(&mut self) {
        self.phase = DecisionPhase::Confirmed;
    }

    /// The server did not confirm. Rolls back only under
    /// [`RollbackPolicy::Rollback`] and only if nothing else has changed the
    /// entry since `begin`.
    pub fn fail(&mut self, requests: &mut [JoinRequest], policy: RollbackPolicy) {
        let mut rolled_back = false;
        if policy == RollbackPolicy::Rollback {
            let target = self.kind.target();
            if let Some(request) = requests
                .iter_mut()
                .find(|r| r.id == self.request_id && r.status == target)
            {
                request.status = self.previous;
                rolled_back = true;
            }
        }
        self.phase = DecisionPhase::Failed { rolled_back };
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self.phase, DecisionPhase::Applying)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::view::filter::fixtures::request;

    fn status_of(requests: &[JoinRequest], id: i64) -> RequestStatus {
        requests
            .iter()
            .find(|r| r.id == JoinRequestId::new(id))
            .unwrap()
            .status
    }

    #[test]
    fn test_begin_applies_status_immediately() {
        let mut requests = vec![request(1, RequestStatus::Pending)];
        let decision =
            Decision::begin(&mut requests, JoinRequestId::new(1), DecisionKind::Approve).unwrap();
        assert_eq!(status_of(&requests, 1), RequestStatus::Approved);
        assert_eq!(decision.phase, DecisionPhase::Applying);
        assert_eq!(decision.previous, RequestStatus::Pending);
        assert!(!decision.is_settled());
    }

    #[test]
    fn test_non_pending_is_rejected_without_change() {
        let mut requests = vec![request(1, RequestStatus::Approved)];
        let err = Decision::begin(&mut requests, JoinRequestId::new(1), DecisionKind::Reject)
            .unwrap_err();
        assert!(matches!(err, DecisionError::NotPending { .. }));
        assert_eq!(status_of(&requests, 1), RequestStatus::Approved);
    }

    #[test]
    fn test_unknown_request() {
        let mut requests = vec![request(1, RequestStatus::Pending)];
        let err = Decision::begin(&mut requests, JoinRequestId::new(9), DecisionKind::Approve)
            .unwrap_err();
        assert_eq!(err, DecisionError::UnknownRequest(JoinRequestId::new(9)));
    }

    #[test]
    fn test_failure_keeps_optimistic_status_by_default() {
        let mut requests = vec![request(1, RequestStatus::Pending)];
        let mut decision =
            Decision::begin(&mut requests, JoinRequestId::new(1), DecisionKind::Reject).unwrap();
        decision.fail(&mut requests, RollbackPolicy::default());
        assert_eq!(status_of(&requests, 1), RequestStatus::Rejected);
        assert_eq!(decision.phase, DecisionPhase::Failed { rolled_back: false });
    }

    #[test]
    fn test_failure_rolls_back_when_asked() {
        let mut requests = vec![request(1, RequestStatus::Pending)];
        let mut decision =
            Decision::begin(&mut requests, JoinRequestId::new(1), DecisionKind::Approve).unwrap();
        decision.fail(&mut requests, RollbackPolicy::Rollback);
        assert_eq!(status_of(&requests, 1), RequestStatus::Pending);
        assert_eq!(decision.phase, DecisionPhase::Failed { rolled_back: true });
    }

    #[test]
    fn test_confirm() {
        let mut requests = vec![request(1, RequestStatus::Pending)];
        let mut decision =
            Decision::begin(&mut requests, JoinRequestId::new(1), DecisionKind::Approve).unwrap();
        decision.confirm();
        assert!(decision.is_settled());
        assert_eq!(status_of(&requests, 1), RequestStatus::Approved);
    }
}
