//! Society entities as returned by the backend.

use serde::{Deserialize, Serialize};

use super::id::SocietyId;
use super::settings::{
    GeneralSettings, NotificationSettings, PermissionSettings, PrivacySettings, SocietySettings,
};
use super::status::Role;

/// One of the viewer's societies, with the viewer's role in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Society {
    pub id: SocietyId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    pub role: Role,
}

/// Full record of a single society, as fetched by the settings page.
///
/// The nested setting groups are optional on the wire and default when
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocietyInfo {
    pub id: SocietyId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub privacy: PrivacySettings,
    #[serde(default)]
    pub permissions: PermissionSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl SocietyInfo {
    /// Build the editable settings aggregate from this record.
    #[must_use]
    pub fn into_settings(self) -> SocietySettings {
        SocietySettings {
            general: GeneralSettings {
                name: self.name,
                description: self.description,
                category: self.category,
                image_url: self.image_url,
            },
            privacy: self.privacy,
            permissions: self.permissions,
            notifications: self.notifications,
        }
    }
}
