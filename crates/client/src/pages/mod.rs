//! Page controllers.
//!
//! Each page owns its state, loads once on [`mount`](MySocietiesPage::mount)
//! and turns user actions into API calls. Reads go through a
//! `begin_load`/`finish_load` pair so a response arriving after `unmount`
//! (or after a newer load) is dropped.

pub mod join_requests;
pub mod my_societies;
pub mod settings;
pub mod support;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod fake;

pub use join_requests::JoinRequestsPage;
pub use my_societies::MySocietiesPage;
pub use settings::SettingsPage;
pub use support::SupportPage;
