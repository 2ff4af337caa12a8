//! Command implementations.
//!
//! Each command mounts the page controller it stands in for, applies the
//! requested action and prints the resulting snapshot.

pub mod auth;
pub mod requests;
pub mod settings;
pub mod societies;
pub mod support;

use societies_client::{ApiClient, ApiError, ClientConfig, Session, SessionError};
use societies_core::view::{DecisionError, SettingsPathError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Token file or session accessor failure.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No token in the token file or `SOCIETIES_SESSION_TOKEN`.
    #[error("Not signed in. Run `societies login --token <TOKEN> --remember` first")]
    NotSignedIn,

    /// Approve/reject refused locally.
    #[error(transparent)]
    Decision(#[from] DecisionError),

    /// Bad `path=value` edit.
    #[error(transparent)]
    Settings(#[from] SettingsPathError),

    /// The backend did not accept a write; details are in the log.
    #[error("{0} failed, see log for details")]
    Rejected(&'static str),
}

/// API client bound to the process-wide session. The session is built from
/// config and installed on first use.
pub fn connect(config: &ClientConfig) -> Result<ApiClient, CommandError> {
    if Session::current().is_none() {
        Session::install(Session::from_config(config)?)?;
    }
    let session = Session::current().ok_or(CommandError::NotSignedIn)?;
    if !session.is_authenticated() {
        return Err(CommandError::NotSignedIn);
    }
    let api = ApiClient::new(config, session)?;
    tracing::debug!(api_url = %api.base_url(), "Connected");
    Ok(api)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use societies_client::TokenSlot;

    use super::*;

    #[test]
    fn test_connect_uses_installed_session() {
        let mut config = ClientConfig::for_base_url("http://127.0.0.1:9/api").unwrap();
        config.token_file = std::env::temp_dir().join("societies-cli-no-such-token.json");

        Session::teardown();
        assert!(matches!(connect(&config), Err(CommandError::NotSignedIn)));

        Session::teardown();
        Session::install(Session::with_token(TokenSlot::Session, "installed")).unwrap();
        let api = connect(&config).unwrap();
        assert!(api.base_url().as_str().ends_with("/api/"));
        assert!(Session::current().unwrap().is_authenticated());

        Session::teardown();
    }
}
