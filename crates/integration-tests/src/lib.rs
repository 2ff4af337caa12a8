//! Integration tests for the societies client.
//!
//! Tests drive [`societies_client::ApiClient`] and the page controllers
//! over real HTTP against an in-process `axum` stub of the backend. The
//! stub serves the API under `/api`, checks the token on every call and
//! records each request so tests can assert on the wire format.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p societies-integration-tests
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{OriginalUri, Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use societies_client::{ApiClient, ClientConfig, Session, TokenSlot};

/// Token the stub accepts unless a test changes it.
pub const TEST_TOKEN: &str = "test-session-token";

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    /// Full path, including the `/api` prefix.
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

/// Canned responses and switches for the stub backend.
#[derive(Debug)]
pub struct StubState {
    pub token: String,
    pub societies: Value,
    pub society_info: Value,
    pub join_requests: Value,
    /// Status approve/reject answer with.
    pub decision_status: StatusCode,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub recorded: Vec<Recorded>,
}

impl Default for StubState {
    fn default() -> Self {
        Self {
            token: TEST_TOKEN.to_string(),
            societies: json!([]),
            society_info: json!({"id": 1}),
            join_requests: json!([]),
            decision_status: StatusCode::NO_CONTENT,
            fail_reads: false,
            fail_writes: false,
            recorded: Vec::new(),
        }
    }
}

/// Shared handle to the stub's state.
#[derive(Debug, Clone, Default)]
pub struct StubBackend {
    state: Arc<Mutex<StubState>>,
}

impl StubBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Change canned responses or switches.
    pub fn configure(&self, f: impl FnOnce(&mut StubState)) {
        f(&mut self.lock());
    }

    /// Every request received so far, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<Recorded> {
        self.lock().recorded.clone()
    }

    /// Requests received for one endpoint path (without the `/api` prefix).
    #[must_use]
    pub fn recorded_for(&self, path: &str) -> Vec<Recorded> {
        let full = format!("/api{path}");
        self.recorded()
            .into_iter()
            .filter(|r| r.path == full)
            .collect()
    }

    #[must_use]
    pub fn router(&self) -> Router {
        let api = Router::new()
            .route("/societies/get_societies_by_user", get(societies_by_user))
            .route("/societies/get_society_info", get(society_info))
            .route("/societies/update_info", put(write_ok))
            .route("/societies/leave_society", put(write_ok))
            .route("/societies/join_requests/get_all", get(join_requests))
            .route("/societies/join_requests/approve", post(decision))
            .route("/societies/join_requests/reject", post(decision))
            .route("/support/create_ticket", post(write_ok));

        Router::new().nest("/api", api).with_state(self.clone())
    }

    fn read(
        &self,
        uri: &Uri,
        query: HashMap<String, String>,
        pick: impl FnOnce(&StubState) -> Value,
    ) -> Response {
        let mut state = self.lock();
        let authorized = query.get("token") == Some(&state.token);
        state.recorded.push(Recorded {
            method: Method::GET,
            path: uri.path().to_string(),
            query,
            body: None,
        });

        if !authorized {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        if state.fail_reads {
            return (StatusCode::INTERNAL_SERVER_ERROR, "read failed").into_response();
        }
        Json(pick(&state)).into_response()
    }

    fn write(&self, method: Method, uri: &Uri, body: Value, success: StatusCode) -> Response {
        let mut state = self.lock();
        let authorized = body.get("token").and_then(Value::as_str) == Some(state.token.as_str());
        state.recorded.push(Recorded {
            method,
            path: uri.path().to_string(),
            query: HashMap::new(),
            body: Some(body),
        });

        if !authorized {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        if state.fail_writes {
            return (StatusCode::INTERNAL_SERVER_ERROR, "write failed").into_response();
        }
        if success == StatusCode::NO_CONTENT {
            return success.into_response();
        }
        (success, Json(json!({"success": true}))).into_response()
    }
}

async fn societies_by_user(
    State(stub): State<StubBackend>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    stub.read(&uri, query, |s| s.societies.clone())
}

async fn society_info(
    State(stub): State<StubBackend>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    stub.read(&uri, query, |s| s.society_info.clone())
}

async fn join_requests(
    State(stub): State<StubBackend>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    stub.read(&uri, query, |s| s.join_requests.clone())
}

async fn write_ok(
    State(stub): State<StubBackend>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<Value>,
) -> Response {
    stub.write(method, &uri, body, StatusCode::OK)
}

async fn decision(
    State(stub): State<StubBackend>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<Value>,
) -> Response {
    let status = stub.lock().decision_status;
    stub.write(Method::POST, &uri, body, status)
}

/// Serve `stub` on an ephemeral local port.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn spawn_stub_server(stub: &StubBackend) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener address");
    let app = stub.router();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });
    (addr, handle)
}

/// Client for a stub at `addr` using `token` in the session slot.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client_for(addr: SocketAddr, token: &str) -> ApiClient {
    let config = ClientConfig::for_base_url(&format!("http://{addr}/api")).expect("stub base url");
    ApiClient::new(&config, Session::with_token(TokenSlot::Session, token)).expect("api client")
}

/// An address nothing is listening on.
///
/// # Panics
///
/// Panics if a probe listener cannot be bound.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    listener.local_addr().expect("probe address")
}
