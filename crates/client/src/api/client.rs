//! HTTP implementation of [`SocietiesApi`].

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use url::Url;

use societies_core::{
    JoinRequest, JoinRequestId, Society, SocietyId, SocietyInfo, SocietySettings, SupportTicket,
};

use super::error::ApiError;
use super::{Endpoint, SocietiesApi};
use crate::config::ClientConfig;
use crate::session::Session;

/// Societies REST API client.
///
/// Cheap to clone; clones share the connection pool and the injected
/// [`Session`].
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    session: Session,
}

/// Write body with the session token merged in.
#[derive(Serialize)]
struct Authenticated<'a, B: Serialize> {
    token: &'a str,
    #[serde(flatten)]
    body: &'a B,
}

#[derive(Serialize)]
struct SocietyRef {
    society_id: SocietyId,
}

#[derive(Serialize)]
struct RequestRef {
    society_id: SocietyId,
    request_id: JoinRequestId,
}

#[derive(Serialize)]
struct SettingsBody<'a> {
    society_id: SocietyId,
    #[serde(flatten)]
    settings: &'a SocietySettings,
}

impl ApiClient {
    /// Create a new client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("societies-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.clone(),
                session,
            }),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Absolute URL of `endpoint` under the base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the URL cannot be joined.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ApiError> {
        Ok(self
            .inner
            .base_url
            .join(endpoint.path().trim_start_matches('/'))?)
    }

    fn token(&self) -> Result<SecretString, ApiError> {
        self.inner.session.token().ok_or(ApiError::MissingToken)
    }

    /// Execute a GET with `params` plus the token as query parameters.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let token = self.token()?;
        let mut url = self.endpoint_url(endpoint)?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("token", token.expose_secret());
        }

        let response = self.inner.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a write with the token merged into the JSON body.
    async fn send_write<B: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let token = self.token()?;
        let url = self.endpoint_url(endpoint)?;
        let payload = Authenticated {
            token: token.expose_secret(),
            body,
        };

        let response = self
            .inner
            .client
            .request(endpoint.method(), url)
            .json(&payload)
            .send()
            .await?;
        Ok(response)
    }

    /// Execute a write that must answer with a 2xx status.
    async fn write<B: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self.send_write(endpoint, body).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::parse_error(response).await)
    }

    async fn decide(
        &self,
        endpoint: Endpoint,
        society: SocietyId,
        request: JoinRequestId,
    ) -> Result<StatusCode, ApiError> {
        let response = self
            .send_write(
                endpoint,
                &RequestRef {
                    society_id: society,
                    request_id: request,
                },
            )
            .await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            info!(%society, %request, path = endpoint.path(), "Join request decided");
        } else {
            warn!(
                %society,
                %request,
                %status,
                path = endpoint.path(),
                "Join request decision not confirmed"
            );
        }
        Ok(status)
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Parse error response from the API.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return ApiError::Unauthorized;
        }

        if status == 404 {
            return ApiError::NotFound(response.url().path().to_string());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ApiError::Api { status, message }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("session", &self.inner.session)
            .finish_non_exhaustive()
    }
}

impl SocietiesApi for ApiClient {
    #[instrument(skip(self))]
    async fn societies_by_user(&self) -> Result<Vec<Society>, ApiError> {
        let societies: Vec<Society> = self.get_json(Endpoint::SocietiesByUser, &[]).await?;
        debug!(count = societies.len(), "Fetched societies");
        Ok(societies)
    }

    #[instrument(skip(self))]
    async fn society_info(&self, society: SocietyId) -> Result<SocietyInfo, ApiError> {
        self.get_json(
            Endpoint::SocietyInfo,
            &[("society_id", society.to_string())],
        )
        .await
    }

    #[instrument(skip(self, settings))]
    async fn update_info(
        &self,
        society: SocietyId,
        settings: &SocietySettings,
    ) -> Result<(), ApiError> {
        self.write(
            Endpoint::UpdateInfo,
            &SettingsBody {
                society_id: society,
                settings,
            },
        )
        .await?;
        info!("Society settings saved");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn leave_society(&self, society: SocietyId) -> Result<(), ApiError> {
        self.write(Endpoint::LeaveSociety, &SocietyRef { society_id: society })
            .await?;
        info!("Left society");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn join_requests(&self, society: SocietyId) -> Result<Vec<JoinRequest>, ApiError> {
        let requests: Vec<JoinRequest> = self
            .get_json(
                Endpoint::JoinRequests,
                &[("society_id", society.to_string())],
            )
            .await?;
        debug!(count = requests.len(), "Fetched join requests");
        Ok(requests)
    }

    #[instrument(skip(self))]
    async fn approve_request(
        &self,
        society: SocietyId,
        request: JoinRequestId,
    ) -> Result<StatusCode, ApiError> {
        self.decide(Endpoint::ApproveRequest, society, request).await
    }

    #[instrument(skip(self))]
    async fn reject_request(
        &self,
        society: SocietyId,
        request: JoinRequestId,
    ) -> Result<StatusCode, ApiError> {
        self.decide(Endpoint::RejectRequest, society, request).await
    }

    #[instrument(skip(self, ticket), fields(category = %ticket.category))]
    async fn create_ticket(&self, ticket: &SupportTicket) -> Result<(), ApiError> {
        self.write(Endpoint::CreateTicket, ticket).await?;
        info!("Support ticket created");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::TokenSlot;

    fn client(session: Session) -> ApiClient {
        let config = ClientConfig::for_base_url("http://127.0.0.1:9/api").unwrap();
        ApiClient::new(&config, session).unwrap()
    }

    #[test]
    fn test_endpoint_urls_nest_under_base_path() {
        let api = client(Session::new());
        assert_eq!(
            api.endpoint_url(Endpoint::JoinRequests).unwrap().as_str(),
            "http://127.0.0.1:9/api/societies/join_requests/get_all"
        );
        assert_eq!(
            api.endpoint_url(Endpoint::CreateTicket).unwrap().as_str(),
            "http://127.0.0.1:9/api/support/create_ticket"
        );
    }

    #[test]
    fn test_settings_body_carries_every_group() {
        let settings = SocietySettings::default();
        let body = SettingsBody {
            society_id: SocietyId::new(3),
            settings: &settings,
        };
        let value = serde_json::to_value(Authenticated {
            token: "tok",
            body: &body,
        })
        .unwrap();
        assert_eq!(value["token"], "tok");
        assert_eq!(value["society_id"], 3);
        for group in ["general", "privacy", "permissions", "notifications"] {
            assert!(value.get(group).is_some(), "missing {group}");
        }
    }

    #[test]
    fn test_decision_body() {
        let value = serde_json::to_value(Authenticated {
            token: "tok",
            body: &RequestRef {
                society_id: SocietyId::new(1),
                request_id: JoinRequestId::new(7),
            },
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"token": "tok", "society_id": 1, "request_id": 7})
        );
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_sending() {
        let api = client(Session::new());
        assert!(matches!(
            api.societies_by_user().await,
            Err(ApiError::MissingToken)
        ));
        assert!(matches!(
            api.approve_request(SocietyId::new(1), JoinRequestId::new(1))
                .await,
            Err(ApiError::MissingToken)
        ));
    }

    #[test]
    fn test_debug_hides_token() {
        let api = client(Session::with_token(TokenSlot::Session, "very-secret"));
        assert!(!format!("{api:?}").contains("very-secret"));
    }
}
