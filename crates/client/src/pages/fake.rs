//! In-memory [`SocietiesApi`] for page controller tests.

use std::sync::Mutex;

use societies_core::{
    JoinRequest, JoinRequestId, RequestStatus, Role, Society, SocietyId, SocietyInfo,
    SocietySettings, SupportTicket,
};

use crate::api::{ApiError, SocietiesApi, StatusCode};

/// A call the fake received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SocietiesByUser,
    SocietyInfo(SocietyId),
    UpdateInfo(SocietyId, SocietySettings),
    LeaveSociety(SocietyId),
    JoinRequests(SocietyId),
    Approve(SocietyId, JoinRequestId),
    Reject(SocietyId, JoinRequestId),
    CreateTicket(SupportTicket),
}

#[derive(Default)]
struct State {
    societies: Vec<Society>,
    info: Option<SocietyInfo>,
    requests: Vec<JoinRequest>,
    failing: bool,
    decision_status: Option<StatusCode>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_societies(self, societies: Vec<Society>) -> Self {
        self.state.lock().unwrap().societies = societies;
        self
    }

    pub fn with_info(self, info: SocietyInfo) -> Self {
        self.state.lock().unwrap().info = Some(info);
        self
    }

    pub fn with_requests(self, requests: Vec<JoinRequest>) -> Self {
        self.state.lock().unwrap().requests = requests;
        self
    }

    /// Every call fails with a 503.
    pub fn failing(self) -> Self {
        self.state.lock().unwrap().failing = true;
        self
    }

    /// Status approve/reject answer with (default 204).
    pub fn with_decision_status(self, status: StatusCode) -> Self {
        self.state.lock().unwrap().decision_status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing {
            return Err(ApiError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn decision_status(&self) -> StatusCode {
        self.state
            .lock()
            .unwrap()
            .decision_status
            .unwrap_or(StatusCode::NO_CONTENT)
    }
}

impl SocietiesApi for FakeApi {
    async fn societies_by_user(&self) -> Result<Vec<Society>, ApiError> {
        self.record(Call::SocietiesByUser)?;
        Ok(self.state.lock().unwrap().societies.clone())
    }

    async fn society_info(&self, society: SocietyId) -> Result<SocietyInfo, ApiError> {
        self.record(Call::SocietyInfo(society))?;
        self.state
            .lock()
            .unwrap()
            .info
            .clone()
            .ok_or_else(|| ApiError::NotFound(format!("society {society}")))
    }

    async fn update_info(
        &self,
        society: SocietyId,
        settings: &SocietySettings,
    ) -> Result<(), ApiError> {
        self.record(Call::UpdateInfo(society, settings.clone()))
    }

    async fn leave_society(&self, society: SocietyId) -> Result<(), ApiError> {
        self.record(Call::LeaveSociety(society))
    }

    async fn join_requests(&self, society: SocietyId) -> Result<Vec<JoinRequest>, ApiError> {
        self.record(Call::JoinRequests(society))?;
        Ok(self.state.lock().unwrap().requests.clone())
    }

    async fn approve_request(
        &self,
        society: SocietyId,
        request: JoinRequestId,
    ) -> Result<StatusCode, ApiError> {
        self.record(Call::Approve(society, request))?;
        Ok(self.decision_status())
    }

    async fn reject_request(
        &self,
        society: SocietyId,
        request: JoinRequestId,
    ) -> Result<StatusCode, ApiError> {
        self.record(Call::Reject(society, request))?;
        Ok(self.decision_status())
    }

    async fn create_ticket(&self, ticket: &SupportTicket) -> Result<(), ApiError> {
        self.record(Call::CreateTicket(ticket.clone()))
    }
}

pub fn society(id: i64, role: Role) -> Society {
    Society {
        id: SocietyId::new(id),
        name: format!("Society {id}"),
        description: format!("All about society {id}"),
        category: "hobby".to_string(),
        image_url: None,
        member_count: 5,
        role,
    }
}

pub fn request(id: i64, status: RequestStatus) -> JoinRequest {
    JoinRequest {
        id: JoinRequestId::new(id),
        society_id: SocietyId::new(1),
        user_name: format!("User {id}"),
        user_email: format!("user{id}@example.com"),
        user_photo: None,
        status,
        message: None,
        requested_at: None,
    }
}
