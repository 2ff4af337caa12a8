//! View state for the societies pages.
//!
//! Everything here is synchronous and I/O free: page controllers in the
//! client crate own these values, feed them fetched data and read them back
//! as snapshots.

pub mod card;
pub mod decision;
pub mod filter;
pub mod load;
pub mod settings;
pub mod stats;
pub mod support;
pub mod toast;

pub use card::SocietyCard;
pub use decision::{Decision, DecisionError, DecisionKind, DecisionPhase, RollbackPolicy};
pub use filter::{RoleFilter, StatusFilter, filter_requests, filter_societies, partition_by_role};
pub use load::{Lifecycle, ListView, LoadState, LoadTicket};
pub use settings::{SettingsEditor, SettingsPathError, SettingsTab, SettingsUpdate};
pub use stats::{QuickStats, RequestStats};
pub use support::{ContactForm, ContactPanel, FaqBrowser};
pub use toast::{Toast, ToastKind, Toasts};
