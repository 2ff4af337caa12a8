//! Join requests page for one society: status cards, the filtered list and
//! the details panel with approve/reject.

use tracing::{debug, error, warn};

use societies_core::view::{
    Decision, DecisionError, DecisionKind, DecisionPhase, Lifecycle, ListView, LoadState,
    LoadTicket, RequestStats, RollbackPolicy, StatusFilter, filter_requests,
};
use societies_core::{JoinRequest, JoinRequestId, SocietyId};

use crate::api::{ApiError, SocietiesApi, StatusCode};

#[derive(Debug)]
pub struct JoinRequestsPage {
    society_id: SocietyId,
    lifecycle: Lifecycle,
    requests: Vec<JoinRequest>,
    filter: StatusFilter,
    selected: Option<JoinRequestId>,
    policy: RollbackPolicy,
}

impl JoinRequestsPage {
    #[must_use]
    pub fn new(society_id: SocietyId) -> Self {
        Self {
            society_id,
            lifecycle: Lifecycle::new(),
            requests: Vec::new(),
            filter: StatusFilter::default(),
            selected: None,
            policy: RollbackPolicy::default(),
        }
    }

    /// Use `policy` when a decision is not confirmed.
    #[must_use]
    pub const fn with_policy(mut self, policy: RollbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn society_id(&self) -> SocietyId {
        self.society_id
    }

    pub async fn mount<A: SocietiesApi>(&mut self, api: &A) {
        let ticket = self.begin_load();
        let result = api.join_requests(self.society_id).await;
        self.finish_load(ticket, result);
    }

    pub const fn begin_load(&mut self) -> LoadTicket {
        self.lifecycle.begin()
    }

    /// Apply a fetch result. Returns `false` if the ticket is stale.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<JoinRequest>, ApiError>,
    ) -> bool {
        if !self.lifecycle.accepts(ticket) {
            debug!(society = %self.society_id, "Ignoring stale join requests response");
            return false;
        }
        let succeeded = match result {
            Ok(requests) => {
                self.requests = requests;
                true
            }
            Err(e) => {
                error!(society = %self.society_id, error = %e, "Failed to fetch join requests");
                false
            }
        };
        self.lifecycle.finish(ticket, succeeded)
    }

    pub const fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    #[must_use]
    pub const fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    #[must_use]
    pub fn requests(&self) -> &[JoinRequest] {
        &self.requests
    }

    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub const fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    #[must_use]
    pub fn visible(&self) -> ListView<'_, JoinRequest> {
        let pending = matches!(self.lifecycle.state(), LoadState::Idle | LoadState::Loading);
        ListView::new(pending, filter_requests(&self.requests, self.filter))
    }

    #[must_use]
    pub fn stats(&self) -> RequestStats {
        RequestStats::from_requests(&self.requests)
    }

    /// Open a request in the details panel. Returns `false` for an unknown id.
    pub fn select(&mut self, request: JoinRequestId) -> bool {
        if self.requests.iter().any(|r| r.id == request) {
            self.selected = Some(request);
            true
        } else {
            false
        }
    }

    pub const fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The request shown in the details panel; `None` renders the
    /// placeholder.
    #[must_use]
    pub fn selected(&self) -> Option<&JoinRequest> {
        let id = self.selected?;
        self.requests.iter().find(|r| r.id == id)
    }

    /// Apply the optimistic status for a decision, before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown or already decided request; nothing
    /// changes and nothing should be sent.
    pub fn begin_decision(
        &mut self,
        request: JoinRequestId,
        kind: DecisionKind,
    ) -> Result<Decision, DecisionError> {
        let decision = Decision::begin(&mut self.requests, request, kind)?;
        Ok(decision)
    }

    /// Settle a decision with the server's answer. Only `204 No Content`
    /// confirms; anything else fails quietly under the page's policy.
    pub fn finish_decision(
        &mut self,
        mut decision: Decision,
        outcome: Result<StatusCode, ApiError>,
    ) -> DecisionPhase {
        match outcome {
            Ok(status) if status == StatusCode::NO_CONTENT => {
                decision.confirm();
                if self.selected == Some(decision.request_id) {
                    self.clear_selection();
                }
            }
            Ok(status) => {
                warn!(
                    request = %decision.request_id,
                    %status,
                    kind = %decision.kind,
                    "Decision not confirmed"
                );
                decision.fail(&mut self.requests, self.policy);
            }
            Err(e) => {
                warn!(
                    request = %decision.request_id,
                    error = %e,
                    kind = %decision.kind,
                    "Decision request failed"
                );
                decision.fail(&mut self.requests, self.policy);
            }
        }
        decision.phase
    }

    /// Approve or reject: optimistic update first, then the write.
    ///
    /// # Errors
    ///
    /// Returns an error, without sending anything, for an unknown or
    /// already decided request.
    pub async fn decide<A: SocietiesApi>(
        &mut self,
        api: &A,
        request: JoinRequestId,
        kind: DecisionKind,
    ) -> Result<DecisionPhase, DecisionError> {
        let decision = self.begin_decision(request, kind)?;
        let outcome = match kind {
            DecisionKind::Approve => api.approve_request(self.society_id, request).await,
            DecisionKind::Reject => api.reject_request(self.society_id, request).await,
        };
        Ok(self.finish_decision(decision, outcome))
    }

    /// # Errors
    ///
    /// See [`Self::decide`].
    pub async fn approve<A: SocietiesApi>(
        &mut self,
        api: &A,
        request: JoinRequestId,
    ) -> Result<DecisionPhase, DecisionError> {
        self.decide(api, request, DecisionKind::Approve).await
    }

    /// # Errors
    ///
    /// See [`Self::decide`].
    pub async fn reject<A: SocietiesApi>(
        &mut self,
        api: &A,
        request: JoinRequestId,
    ) -> Result<DecisionPhase, DecisionError> {
        self.decide(api, request, DecisionKind::Reject).await
    }
}
