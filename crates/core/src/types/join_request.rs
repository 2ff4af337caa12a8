//! Membership applications awaiting an admin decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{JoinRequestId, SocietyId};
use super::status::RequestStatus;

/// A request by a user to join a society.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub id: JoinRequestId,
    pub society_id: SocietyId,
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_photo: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
    /// Optional note from the applicant.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
}
