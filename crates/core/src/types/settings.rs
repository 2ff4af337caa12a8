//! Society settings aggregate.
//!
//! The four sub-groups are always present. Missing groups (or missing fields
//! inside a group) deserialize to the defaults below, which are also what an
//! editor shows when the settings could not be fetched at all.

use serde::{Deserialize, Serialize};

/// Who can find and view a society.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// How new members get in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoinPolicy {
    Open,
    #[default]
    ApprovalRequired,
    InviteOnly,
}

/// Minimum role needed for a gated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    Members,
    Moderators,
    Admins,
}

/// Name, description and presentation of a society.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralSettings {
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: Option<String>,
}

/// Discoverability and membership rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacySettings {
    pub visibility: Visibility,
    pub join_policy: JoinPolicy,
    pub show_member_list: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            visibility: Visibility::Public,
            join_policy: JoinPolicy::ApprovalRequired,
            show_member_list: true,
        }
    }
}

/// Role gates for member actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionSettings {
    pub event_creation: PermissionLevel,
    pub posting: PermissionLevel,
    pub invitations: PermissionLevel,
}

impl Default for PermissionSettings {
    fn default() -> Self {
        Self {
            event_creation: PermissionLevel::Moderators,
            posting: PermissionLevel::Members,
            invitations: PermissionLevel::Members,
        }
    }
}

/// Admin notification switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationSettings {
    pub join_requests: bool,
    pub new_members: bool,
    pub event_reminders: bool,
    pub weekly_digest: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            join_requests: true,
            new_members: true,
            event_reminders: true,
            weekly_digest: false,
        }
    }
}

/// The full settings object, saved as a single unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocietySettings {
    pub general: GeneralSettings,
    pub privacy: PrivacySettings,
    pub permissions: PermissionSettings,
    pub notifications: NotificationSettings,
}

macro_rules! wire_names {
    ($ty:ty, $what:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $wire),)+
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", $what, ": {}"), s)),
                }
            }
        }
    };
}

wire_names!(Visibility, "visibility", {
    Public => "public",
    Private => "private",
});

wire_names!(JoinPolicy, "join policy", {
    Open => "open",
    ApprovalRequired => "approval_required",
    InviteOnly => "invite_only",
});

wire_names!(PermissionLevel, "permission level", {
    Members => "members",
    Moderators => "moderators",
    Admins => "admins",
});
