//! Societies REST API.
//!
//! [`SocietiesApi`] is the seam page controllers call through;
//! [`ApiClient`] implements it over HTTP with `reqwest`.
//!
//! # Endpoints
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | GET | `/societies/get_societies_by_user` | viewer's societies with role |
//! | GET | `/societies/get_society_info` | one society's settings |
//! | PUT | `/societies/update_info` | save the full settings object |
//! | PUT | `/societies/leave_society` | remove the viewer from a society |
//! | GET | `/societies/join_requests/get_all` | join requests for a society |
//! | POST | `/societies/join_requests/approve` | approve one request |
//! | POST | `/societies/join_requests/reject` | reject one request |
//! | POST | `/support/create_ticket` | submit a support ticket |
//!
//! The token goes in the `token` query parameter for reads and in the
//! `token` body field for writes.

mod client;
mod error;

use std::future::Future;

pub use client::ApiClient;
pub use error::ApiError;
pub use reqwest::StatusCode;

use societies_core::{
    JoinRequest, JoinRequestId, Society, SocietyId, SocietyInfo, SocietySettings, SupportTicket,
};

/// A backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SocietiesByUser,
    SocietyInfo,
    UpdateInfo,
    LeaveSociety,
    JoinRequests,
    ApproveRequest,
    RejectRequest,
    CreateTicket,
}

impl Endpoint {
    pub const ALL: [Self; 8] = [
        Self::SocietiesByUser,
        Self::SocietyInfo,
        Self::UpdateInfo,
        Self::LeaveSociety,
        Self::JoinRequests,
        Self::ApproveRequest,
        Self::RejectRequest,
        Self::CreateTicket,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SocietiesByUser => "/societies/get_societies_by_user",
            Self::SocietyInfo => "/societies/get_society_info",
            Self::UpdateInfo => "/societies/update_info",
            Self::LeaveSociety => "/societies/leave_society",
            Self::JoinRequests => "/societies/join_requests/get_all",
            Self::ApproveRequest => "/societies/join_requests/approve",
            Self::RejectRequest => "/societies/join_requests/reject",
            Self::CreateTicket => "/support/create_ticket",
        }
    }

    #[must_use]
    pub fn method(self) -> reqwest::Method {
        match self {
            Self::SocietiesByUser | Self::SocietyInfo | Self::JoinRequests => reqwest::Method::GET,
            Self::UpdateInfo | Self::LeaveSociety => reqwest::Method::PUT,
            Self::ApproveRequest | Self::RejectRequest | Self::CreateTicket => {
                reqwest::Method::POST
            }
        }
    }
}

/// Operations the pages need from the backend.
///
/// Approve/reject return the raw response status: the caller decides what
/// counts as success (`204 No Content`). Every other write maps non-2xx
/// responses to [`ApiError`].
pub trait SocietiesApi {
    fn societies_by_user(&self) -> impl Future<Output = Result<Vec<Society>, ApiError>> + Send;

    fn society_info(
        &self,
        society: SocietyId,
    ) -> impl Future<Output = Result<SocietyInfo, ApiError>> + Send;

    fn update_info(
        &self,
        society: SocietyId,
        settings: &SocietySettings,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn leave_society(
        &self,
        society: SocietyId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn join_requests(
        &self,
        society: SocietyId,
    ) -> impl Future<Output = Result<Vec<JoinRequest>, ApiError>> + Send;

    fn approve_request(
        &self,
        society: SocietyId,
        request: JoinRequestId,
    ) -> impl Future<Output = Result<StatusCode, ApiError>> + Send;

    fn reject_request(
        &self,
        society: SocietyId,
        request: JoinRequestId,
    ) -> impl Future<Output = Result<StatusCode, ApiError>> + Send;

    fn create_ticket(
        &self,
        ticket: &SupportTicket,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
