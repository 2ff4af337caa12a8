//! Pure predicates deriving visible subsets from stored collections.
//!
//! Filtering never copies or reorders the stored collection; it returns
//! references in stored order.

use crate::types::{JoinRequest, RequestStatus, Role, Society};

/// Role filter for the "my societies" page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Admin,
    Member,
}

impl RoleFilter {
    #[must_use]
    pub fn matches(self, society: &Society) -> bool {
        match self {
            Self::All => true,
            Self::Admin => society.role == Role::Admin,
            Self::Member => society.role == Role::Member,
        }
    }
}

/// Status filter for the join requests page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, request: &JoinRequest) -> bool {
        match self {
            Self::All => true,
            Self::Pending => request.status == RequestStatus::Pending,
            Self::Approved => request.status == RequestStatus::Approved,
            Self::Rejected => request.status == RequestStatus::Rejected,
        }
    }
}

/// Societies visible under `filter`, in stored order.
#[must_use]
pub fn filter_societies(societies: &[Society], filter: RoleFilter) -> Vec<&Society> {
    societies.iter().filter(|s| filter.matches(s)).collect()
}

/// Split societies into `(admin, member)` groups.
#[must_use]
pub fn partition_by_role(societies: &[Society]) -> (Vec<&Society>, Vec<&Society>) {
    societies.iter().partition(|s| s.role == Role::Admin)
}

/// Join requests visible under `filter`, in stored order.
#[must_use]
pub fn filter_requests(requests: &[JoinRequest], filter: StatusFilter) -> Vec<&JoinRequest> {
    requests.iter().filter(|r| filter.matches(r)).collect()
}

impl std::fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Admin => write!(f, "admin"),
            Self::Member => write!(f, "member"),
        }
    }
}

impl std::str::FromStr for RoleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(format!("invalid role filter: {s} (expected all, admin or member)")),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!(
                "invalid status filter: {s} (expected all, pending, approved or rejected)"
            )),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{request, society};
    use super::*;
    use crate::types::JoinRequestId;

    #[test]
    fn test_partition_is_strict() {
        let societies = vec![
            society(1, Role::Admin),
            society(2, Role::Member),
            society(3, Role::Member),
            society(4, Role::Admin),
        ];
        let (admin, member) = partition_by_role(&societies);
        assert_eq!(admin.len() + member.len(), societies.len());
        for s in &societies {
            let in_admin = admin.iter().any(|a| a.id == s.id);
            let in_member = member.iter().any(|m| m.id == s.id);
            assert!(in_admin ^ in_member, "society {} in both or neither", s.id);
        }
        assert_eq!(filter_societies(&societies, RoleFilter::Admin), admin);
        assert_eq!(filter_societies(&societies, RoleFilter::Member), member);
    }

    #[test]
    fn test_pending_filter_scenario() {
        let requests = vec![
            request(1, RequestStatus::Pending),
            request(2, RequestStatus::Approved),
        ];
        let visible = filter_requests(&requests, StatusFilter::Pending);
        let ids: Vec<_> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![JoinRequestId::new(1)]);
    }

    #[test]
    fn test_all_filter_keeps_order() {
        let requests = vec![
            request(3, RequestStatus::Rejected),
            request(1, RequestStatus::Pending),
            request(2, RequestStatus::Approved),
        ];
        let visible = filter_requests(&requests, StatusFilter::All);
        let expected: Vec<&JoinRequest> = requests.iter().collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("admin".parse::<RoleFilter>(), Ok(RoleFilter::Admin));
        assert_eq!("rejected".parse::<StatusFilter>(), Ok(StatusFilter::Rejected));
        assert!("owner".parse::<RoleFilter>().is_err());
    }
}
