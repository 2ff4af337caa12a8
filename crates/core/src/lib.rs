//! Societies Core - shared types and view state.
//!
//! This crate provides the pieces every societies front-end needs:
//! - [`types`] - transient copies of backend entities (societies, join
//!   requests, settings, support tickets, bundled FAQs)
//! - [`view`] - page view state: filters, stats, the settings editor, the
//!   optimistic approve/reject transition, forms and toasts
//! - [`route`] - navigation targets
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no HTTP clients. Page controllers in `societies-client` own these values
//! and drive them from network results.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod route;
pub mod types;
pub mod view;

pub use route::Route;
pub use types::*;
