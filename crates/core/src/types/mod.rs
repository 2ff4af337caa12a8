//! Core types for the societies client.
//!
//! Transient copies of backend-owned entities. The backend is the only
//! durable store; these are fetched on page mount and dropped on unmount.

pub mod faq;
pub mod id;
pub mod join_request;
pub mod settings;
pub mod society;
pub mod status;
pub mod support;

pub use faq::{BUNDLED_FAQS, Faq};
pub use id::*;
pub use join_request::JoinRequest;
pub use settings::{
    GeneralSettings, JoinPolicy, NotificationSettings, PermissionLevel, PermissionSettings,
    PrivacySettings, SocietySettings, Visibility,
};
pub use society::{Society, SocietyInfo};
pub use status::{RequestStatus, Role};
pub use support::{SupportTicket, TicketCategory};
