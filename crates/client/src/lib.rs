//! Societies Client - REST client and page controllers.
//!
//! - [`config`] - environment configuration
//! - [`session`] - the process-wide token accessor
//! - [`api`] - the [`SocietiesApi`] seam and its HTTP implementation
//! - [`pages`] - page controllers driving `societies_core::view` state
//!
//! # Example
//!
//! ```no_run
//! use societies_client::pages::MySocietiesPage;
//! use societies_client::{ApiClient, ClientConfig, Session};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let session = Session::from_config(&config)?;
//! Session::install(session.clone())?;
//!
//! let api = ApiClient::new(&config, session)?;
//! let mut page = MySocietiesPage::new();
//! page.mount(&api).await;
//! println!("{} societies", page.stats().total);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod pages;
pub mod session;

pub use api::{ApiClient, ApiError, Endpoint, SocietiesApi};
pub use config::{ClientConfig, ConfigError, LogFormat};
pub use session::{Session, SessionError, TokenFile, TokenSlot};
