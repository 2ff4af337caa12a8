//! Summary counts for the stat cards.

use crate::types::{JoinRequest, RequestStatus, Role, Society};

/// Counts shown above the "my societies" lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickStats {
    pub total: usize,
    pub as_admin: usize,
    pub as_member: usize,
    /// Sum of member counts across the viewer's societies.
    pub total_members: u64,
}

impl QuickStats {
    #[must_use]
    pub fn from_societies(societies: &[Society]) -> Self {
        societies.iter().fold(Self::default(), |mut stats, society| {
            stats.total += 1;
            match society.role {
                Role::Admin => stats.as_admin += 1,
                Role::Member => stats.as_member += 1,
            }
            stats.total_members += u64::from(society.member_count);
            stats
        })
    }
}

/// Per-status counts for the join requests page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl RequestStats {
    #[must_use]
    pub fn from_requests(requests: &[JoinRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut stats, request| {
            stats.total += 1;
            match request.status {
                RequestStatus::Pending => stats.pending += 1,
                RequestStatus::Approved => stats.approved += 1,
                RequestStatus::Rejected => stats.rejected += 1,
            }
            stats
        })
    }
}
