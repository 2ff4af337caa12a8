//! Token management.
//!
//! # Usage
//!
//! ```bash
//! # Check a token works, then keep it in the token file
//! societies login --token "$TOKEN" --remember
//!
//! # Check a token without persisting it
//! societies login --token "$TOKEN"
//!
//! # Remove the token file
//! societies logout
//! ```

use secrecy::SecretString;
use societies_client::{ApiClient, ClientConfig, Session, SocietiesApi, TokenFile, TokenSlot};

use super::CommandError;
use crate::render;

/// Validate `token` against the backend and, with `remember`, write it to
/// the token file (the persistent slot).
pub async fn login(
    config: &ClientConfig,
    token: String,
    remember: bool,
) -> Result<(), CommandError> {
    let token = SecretString::from(token);
    let slot = if remember {
        TokenSlot::Persistent
    } else {
        TokenSlot::Session
    };

    let session = Session::new();
    session.store(slot, token.clone());
    Session::install(session.clone())?;

    let api = ApiClient::new(config, session)?;
    let societies = api.societies_by_user().await?;
    tracing::info!(count = societies.len(), "Token accepted");

    if remember {
        let file = TokenFile::new(&config.token_file);
        file.save(&token)?;
        render::line(&format!("Signed in. Token saved to {}", file.path().display()));
    } else {
        render::line("Token is valid. Set SOCIETIES_SESSION_TOKEN to use it for this shell.");
    }
    Ok(())
}

/// Forget the persisted token.
pub fn logout(config: &ClientConfig) -> Result<(), CommandError> {
    TokenFile::new(&config.token_file).remove()?;
    Session::teardown();
    tracing::info!(path = %config.token_file.display(), "Token file removed");
    render::line("Signed out.");
    Ok(())
}
