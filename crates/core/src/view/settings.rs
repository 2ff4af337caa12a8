//! Settings editor state: active tab plus field-path updates on one
//! [`SocietySettings`] aggregate.
//!
//! Tabs and data are independent. Switching tabs never touches the
//! aggregate, and every update addresses a field by its path regardless of
//! which tab is showing.

use thiserror::Error;

use crate::types::{JoinPolicy, PermissionLevel, SocietySettings, Visibility};

/// Panels of the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Privacy,
    Permissions,
    Notifications,
    Danger,
}

impl SettingsTab {
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Privacy,
        Self::Permissions,
        Self::Notifications,
        Self::Danger,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Privacy => "Privacy",
            Self::Permissions => "Permissions",
            Self::Notifications => "Notifications",
            Self::Danger => "Danger Zone",
        }
    }
}

impl std::fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Privacy => write!(f, "privacy"),
            Self::Permissions => write!(f, "permissions"),
            Self::Notifications => write!(f, "notifications"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

impl std::str::FromStr for SettingsTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.to_string() == s)
            .ok_or_else(|| format!("invalid settings tab: {s}"))
    }
}

/// Errors from parsing a `path=value` update.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsPathError {
    #[error("unknown settings field: {0}")]
    UnknownField(String),

    #[error("invalid value for {path}: {reason}")]
    InvalidValue { path: String, reason: String },

    #[error("expected <path>=<value>, got {0}")]
    Malformed(String),
}

/// One field edit, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsUpdate {
    Name(String),
    Description(String),
    Category(String),
    ImageUrl(Option<String>),
    Visibility(Visibility),
    JoinPolicy(JoinPolicy),
    ShowMemberList(bool),
    EventCreation(PermissionLevel),
    Posting(PermissionLevel),
    Invitations(PermissionLevel),
    NotifyJoinRequests(bool),
    NotifyNewMembers(bool),
    NotifyEventReminders(bool),
    WeeklyDigest(bool),
}

impl SettingsUpdate {
    /// Every addressable field path.
    pub const PATHS: [&'static str; 14] = [
        "general.name",
        "general.description",
        "general.category",
        "general.image_url",
        "privacy.visibility",
        "privacy.join_policy",
        "privacy.show_member_list",
        "permissions.event_creation",
        "permissions.posting",
        "permissions.invitations",
        "notifications.join_requests",
        "notifications.new_members",
        "notifications.event_reminders",
        "notifications.weekly_digest",
    ];

    /// The field path this update writes.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Name(_) => "general.name",
            Self::Description(_) => "general.description",
            Self::Category(_) => "general.category",
            Self::ImageUrl(_) => "general.image_url",
            Self::Visibility(_) => "privacy.visibility",
            Self::JoinPolicy(_) => "privacy.join_policy",
            Self::ShowMemberList(_) => "privacy.show_member_list",
            Self::EventCreation(_) => "permissions.event_creation",
            Self::Posting(_) => "permissions.posting",
            Self::Invitations(_) => "permissions.invitations",
            Self::NotifyJoinRequests(_) => "notifications.join_requests",
            Self::NotifyNewMembers(_) => "notifications.new_members",
            Self::NotifyEventReminders(_) => "notifications.event_reminders",
            Self::WeeklyDigest(_) => "notifications.weekly_digest",
        }
    }

    /// Parse a value for the field at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown paths or values that don't fit the field.
    pub fn parse(path: &str, value: &str) -> Result<Self, SettingsPathError> {
        let invalid = |reason: String| SettingsPathError::InvalidValue {
            path: path.to_string(),
            reason,
        };
        let flag = || parse_bool(value).ok_or_else(|| invalid(format!("not a boolean: {value}")));
        let level = || value.parse::<PermissionLevel>().map_err(invalid);

        Ok(match path {
            "general.name" => Self::Name(value.to_string()),
            "general.description" => Self::Description(value.to_string()),
            "general.category" => Self::Category(value.to_string()),
            "general.image_url" => {
                Self::ImageUrl(Some(value.trim()).filter(|v| !v.is_empty()).map(String::from))
            }
            "privacy.visibility" => Self::Visibility(value.parse().map_err(invalid)?),
            "privacy.join_policy" => Self::JoinPolicy(value.parse().map_err(invalid)?),
            "privacy.show_member_list" => Self::ShowMemberList(flag()?),
            "permissions.event_creation" => Self::EventCreation(level()?),
            "permissions.posting" => Self::Posting(level()?),
            "permissions.invitations" => Self::Invitations(level()?),
            "notifications.join_requests" => Self::NotifyJoinRequests(flag()?),
            "notifications.new_members" => Self::NotifyNewMembers(flag()?),
            "notifications.event_reminders" => Self::NotifyEventReminders(flag()?),
            "notifications.weekly_digest" => Self::WeeklyDigest(flag()?),
            _ => return Err(SettingsPathError::UnknownField(path.to_string())),
        })
    }

    /// Parse an assignment of the form `path=value`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `=` or if [`Self::parse`] fails.
    pub fn parse_assignment(assignment: &str) -> Result<Self, SettingsPathError> {
        let (path, value) = assignment
            .split_once('=')
            .ok_or_else(|| SettingsPathError::Malformed(assignment.to_string()))?;
        Self::parse(path.trim(), value)
    }

    /// Write this update into `settings`.
    pub fn apply(self, settings: &mut SocietySettings) {
        match self {
            Self::Name(v) => settings.general.name = v,
            Self::Description(v) => settings.general.description = v,
            Self::Category(v) => settings.general.category = v,
            Self::ImageUrl(v) => settings.general.image_url = v,
            Self::Visibility(v) => settings.privacy.visibility = v,
            Self::JoinPolicy(v) => settings.privacy.join_policy = v,
            Self::ShowMemberList(v) => settings.privacy.show_member_list = v,
            Self::EventCreation(v) => settings.permissions.event_creation = v,
            Self::Posting(v) => settings.permissions.posting = v,
            Self::Invitations(v) => settings.permissions.invitations = v,
            Self::NotifyJoinRequests(v) => settings.notifications.join_requests = v,
            Self::NotifyNewMembers(v) => settings.notifications.new_members = v,
            Self::NotifyEventReminders(v) => settings.notifications.event_reminders = v,
            Self::WeeklyDigest(v) => settings.notifications.weekly_digest = v,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Tab selection, the settings aggregate and the delete confirmation
/// overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsEditor {
    settings: SocietySettings,
    tab: SettingsTab,
    delete_confirmation_open: bool,
}

impl SettingsEditor {
    /// Editor over the hard-coded defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the aggregate with freshly fetched settings. The active tab
    /// is kept.
    pub fn load(&mut self, settings: SocietySettings) {
        self.settings = settings;
    }

    #[must_use]
    pub const fn settings(&self) -> &SocietySettings {
        &self.settings
    }

    #[must_use]
    pub const fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub const fn select_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
    }

    pub fn update(&mut self, update: SettingsUpdate) {
        update.apply(&mut self.settings);
    }

    #[must_use]
    pub const fn is_delete_confirmation_open(&self) -> bool {
        self.delete_confirmation_open
    }

    pub const fn open_delete_confirmation(&mut self) {
        self.delete_confirmation_open = true;
    }

    pub const fn cancel_delete(&mut self) {
        self.delete_confirmation_open = false;
    }

    /// Close the overlay as confirmed. Returns `true` if it was open.
    pub const fn confirm_delete(&mut self) -> bool {
        let was_open = self.delete_confirmation_open;
        self.delete_confirmation_open = false;
        was_open
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_switch_keeps_edits() {
        let mut editor = SettingsEditor::new();
        editor.update(SettingsUpdate::Name("Astronomy".to_string()));
        editor.select_tab(SettingsTab::Privacy);
        editor.update(SettingsUpdate::Visibility(Visibility::Private));
        editor.select_tab(SettingsTab::General);

        assert_eq!(editor.settings().general.name, "Astronomy");
        assert_eq!(editor.settings().privacy.visibility, Visibility::Private);
        assert_eq!(editor.tab(), SettingsTab::General);
    }

    #[test]
    fn test_every_path_parses_and_round_trips() {
        let samples = [
            "Name",
            "Desc",
            "music",
            "https://img.example.com/a.png",
            "private",
            "invite_only",
            "off",
            "admins",
            "moderators",
            "admins",
            "no",
            "yes",
            "false",
            "true",
        ];
        for (path, value) in SettingsUpdate::PATHS.iter().zip(samples) {
            let update = SettingsUpdate::parse(path, value).unwrap();
            assert_eq!(update.path(), *path);
        }
    }

    #[test]
    fn test_parse_assignment() {
        let update = SettingsUpdate::parse_assignment("notifications.weekly_digest=on").unwrap();
        assert_eq!(update, SettingsUpdate::WeeklyDigest(true));

        let update = SettingsUpdate::parse_assignment("general.description=a=b").unwrap();
        assert_eq!(update, SettingsUpdate::Description("a=b".to_string()));

        assert!(matches!(
            SettingsUpdate::parse_assignment("general.name"),
            Err(SettingsPathError::Malformed(_))
        ));
        assert!(matches!(
            SettingsUpdate::parse_assignment("general.colour=red"),
            Err(SettingsPathError::UnknownField(_))
        ));
        assert!(matches!(
            SettingsUpdate::parse_assignment("privacy.show_member_list=maybe"),
            Err(SettingsPathError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_blank_image_url_clears_it() {
        let mut editor = SettingsEditor::new();
        editor.update(SettingsUpdate::parse("general.image_url", "x.png").unwrap());
        assert_eq!(editor.settings().general.image_url.as_deref(), Some("x.png"));
        editor.update(SettingsUpdate::parse("general.image_url", "  ").unwrap());
        assert!(editor.settings().general.image_url.is_none());
    }

    #[test]
    fn test_delete_confirmation_overlay() {
        let mut editor = SettingsEditor::new();
        assert!(!editor.confirm_delete());
        editor.open_delete_confirmation();
        assert!(editor.is_delete_confirmation_open());
        editor.cancel_delete();
        assert!(!editor.is_delete_confirmation_open());
        editor.open_delete_confirmation();
        assert!(editor.confirm_delete());
        assert!(!editor.is_delete_confirmation_open());
    }

    #[test]
    fn test_load_keeps_tab() {
        let mut editor = SettingsEditor::new();
        editor.select_tab(SettingsTab::Notifications);
        editor.load(SocietySettings::default());
        assert_eq!(editor.tab(), SettingsTab::Notifications);
    }
}
