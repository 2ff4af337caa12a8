//! Wire format of `ApiClient` against the stub backend: endpoint paths,
//! methods, token placement and error mapping.

#![allow(clippy::unwrap_used)]

use axum::http::Method;
use serde_json::json;

use societies_client::api::StatusCode;
use societies_client::{ApiClient, ApiError, ClientConfig, Session, SocietiesApi, TokenSlot};
use societies_core::{
    JoinRequestId, PermissionLevel, RequestStatus, Role, SocietyId, SocietySettings,
    SupportTicket, TicketCategory,
};
use societies_integration_tests::{
    StubBackend, TEST_TOKEN, client_for, spawn_stub_server, unreachable_addr,
};

// =============================================================================
// Reads
// =============================================================================

#[tokio::test]
async fn test_reads_send_token_as_query_parameter() {
    let stub = StubBackend::new();
    stub.configure(|s| {
        s.societies = json!([
            {"id": 1, "name": "Chess", "role": "admin", "member_count": 12},
            {"id": 2, "name": "Film", "role": "member"}
        ]);
    });
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, TEST_TOKEN);

    let societies = api.societies_by_user().await.unwrap();

    assert_eq!(societies.len(), 2);
    assert_eq!(societies[0].role, Role::Admin);
    assert_eq!(societies[0].member_count, 12);

    let recorded = stub.recorded_for("/societies/get_societies_by_user");
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, Method::GET);
    assert_eq!(recorded[0].query.get("token").map(String::as_str), Some(TEST_TOKEN));
}

#[tokio::test]
async fn test_scoped_reads_send_society_id() {
    let stub = StubBackend::new();
    stub.configure(|s| {
        s.join_requests = json!([
            {"id": 10, "society_id": 4, "user_name": "Ada",
             "user_email": "ada@example.com", "status": "pending"},
            {"id": 11, "society_id": 4, "user_name": "Grace", "status": "approved",
             "requested_at": "2026-03-01T12:00:00Z", "message": "Hello"}
        ]);
        s.society_info = json!({"id": 4, "name": "Chess", "permissions": {"posting": "admins"}});
    });
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, TEST_TOKEN);

    let requests = api.join_requests(SocietyId::new(4)).await.unwrap();
    assert_eq!(requests[1].status, RequestStatus::Approved);
    assert!(requests[1].requested_at.is_some());

    let info = api.society_info(SocietyId::new(4)).await.unwrap();
    let settings = info.into_settings();
    assert_eq!(settings.permissions.posting, PermissionLevel::Admins);
    assert_eq!(settings.permissions.event_creation, PermissionLevel::Moderators);

    for path in [
        "/societies/join_requests/get_all",
        "/societies/get_society_info",
    ] {
        let recorded = stub.recorded_for(path);
        assert_eq!(recorded[0].query.get("society_id").map(String::as_str), Some("4"));
        assert_eq!(recorded[0].query.get("token").map(String::as_str), Some(TEST_TOKEN));
    }
}

// =============================================================================
// Writes
// =============================================================================

#[tokio::test]
async fn test_update_info_sends_full_object_with_token_in_body() {
    let stub = StubBackend::new();
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, TEST_TOKEN);

    let mut settings = SocietySettings::default();
    settings.general.name = "Chess".to_string();
    api.update_info(SocietyId::new(4), &settings).await.unwrap();

    let recorded = stub.recorded_for("/societies/update_info");
    assert_eq!(recorded[0].method, Method::PUT);
    let body = recorded[0].body.as_ref().unwrap();
    assert_eq!(body["token"], TEST_TOKEN);
    assert_eq!(body["society_id"], 4);
    assert_eq!(body["general"]["name"], "Chess");
    assert_eq!(body["privacy"]["join_policy"], "approval_required");
    assert_eq!(body["permissions"]["event_creation"], "moderators");
    assert_eq!(body["notifications"]["weekly_digest"], false);
    assert!(recorded[0].query.is_empty());
}

#[tokio::test]
async fn test_leave_and_ticket_bodies() {
    let stub = StubBackend::new();
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, TEST_TOKEN);

    api.leave_society(SocietyId::new(9)).await.unwrap();
    api.create_ticket(&SupportTicket {
        category: TicketCategory::Billing,
        subject: "Refund".to_string(),
        message: "Charged twice".to_string(),
    })
    .await
    .unwrap();

    let leave = stub.recorded_for("/societies/leave_society");
    assert_eq!(leave[0].method, Method::PUT);
    assert_eq!(
        leave[0].body,
        Some(json!({"token": TEST_TOKEN, "society_id": 9}))
    );

    let ticket = stub.recorded_for("/support/create_ticket");
    assert_eq!(ticket[0].method, Method::POST);
    assert_eq!(
        ticket[0].body,
        Some(json!({
            "token": TEST_TOKEN,
            "category": "billing",
            "subject": "Refund",
            "message": "Charged twice"
        }))
    );
}

#[tokio::test]
async fn test_decisions_return_raw_status() {
    let stub = StubBackend::new();
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, TEST_TOKEN);

    let status = api
        .approve_request(SocietyId::new(4), JoinRequestId::new(10))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    stub.configure(|s| s.decision_status = axum::http::StatusCode::OK);
    let status = api
        .reject_request(SocietyId::new(4), JoinRequestId::new(11))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);

    let approve = stub.recorded_for("/societies/join_requests/approve");
    assert_eq!(
        approve[0].body,
        Some(json!({"token": TEST_TOKEN, "society_id": 4, "request_id": 10}))
    );
    assert_eq!(stub.recorded_for("/societies/join_requests/reject").len(), 1);
}

#[tokio::test]
async fn test_repeated_writes_are_not_deduplicated() {
    let stub = StubBackend::new();
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, TEST_TOKEN);

    api.leave_society(SocietyId::new(1)).await.unwrap();
    api.leave_society(SocietyId::new(1)).await.unwrap();

    assert_eq!(stub.recorded_for("/societies/leave_society").len(), 2);
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_wrong_token_is_unauthorized() {
    let stub = StubBackend::new();
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, "stale-token");

    assert!(matches!(
        api.societies_by_user().await,
        Err(ApiError::Unauthorized)
    ));
    assert!(matches!(
        api.leave_society(SocietyId::new(1)).await,
        Err(ApiError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let stub = StubBackend::new();
    stub.configure(|s| {
        s.fail_reads = true;
        s.fail_writes = true;
    });
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, TEST_TOKEN);

    let err = api.join_requests(SocietyId::new(1)).await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 500, ref message } if message == "read failed"));

    let err = api
        .update_info(SocietyId::new(1), &SocietySettings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_payload_is_parse_error() {
    let stub = StubBackend::new();
    stub.configure(|s| s.societies = json!({"unexpected": true}));
    let (addr, _server) = spawn_stub_server(&stub).await;
    let api = client_for(addr, TEST_TOKEN);

    assert!(matches!(
        api.societies_by_user().await,
        Err(ApiError::Parse(_))
    ));
}

#[tokio::test]
async fn test_unknown_base_path_is_not_found() {
    let stub = StubBackend::new();
    let (addr, _server) = spawn_stub_server(&stub).await;
    let config = ClientConfig::for_base_url(&format!("http://{addr}/v2")).unwrap();
    let session = Session::with_token(TokenSlot::Session, TEST_TOKEN);
    let api = ApiClient::new(&config, session).unwrap();

    let err = api.societies_by_user().await.unwrap_err();
    assert!(
        matches!(err, ApiError::NotFound(ref path) if path == "/v2/societies/get_societies_by_user")
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let api = client_for(unreachable_addr().await, TEST_TOKEN);
    let err = api.societies_by_user().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
    assert!(!err.is_server_response());
}
