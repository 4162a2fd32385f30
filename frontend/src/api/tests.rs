//! End-to-end client behavior against a mock backend: outgoing policy
//! (bearer token, locale parameter, multipart hygiene) and 401 recovery.

use std::rc::Rc;

use httpmock::prelude::*;
use serde_json::json;

use crate::api::types::LoginRequest;
use crate::api::{ApiClient, ApiError};
use crate::session::{Role, Session, SessionStore};
use crate::test_support::fixtures::{MemoryStore, RecordingNavigator};

fn has_no_authorization_header(req: &HttpMockRequest) -> bool {
    req.headers.as_ref().map_or(true, |headers| {
        headers
            .iter()
            .all(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
    })
}

fn has_no_locale_param(req: &HttpMockRequest) -> bool {
    req.query_params
        .as_ref()
        .map_or(true, |params| params.iter().all(|(key, _)| key != "locale"))
}

fn has_multipart_content_type(req: &HttpMockRequest) -> bool {
    req.headers.as_ref().map_or(false, |headers| {
        headers.iter().any(|(name, value)| {
            name.eq_ignore_ascii_case("content-type") && value.starts_with("multipart/form-data")
        })
    })
}

fn session(role: Role) -> Session {
    Session {
        token: "jwt-1".into(),
        username: "droma".into(),
        role,
    }
}

fn client_at(
    server: &MockServer,
    store: Rc<MemoryStore>,
    path: &str,
) -> (ApiClient, Rc<RecordingNavigator>) {
    let nav = RecordingNavigator::at(path);
    let api = ApiClient::with_base_url(server.url("/api"), store, nav.clone());
    (api, nav)
}

#[tokio::test]
async fn bearer_token_rides_every_authenticated_request() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/auth/me")
            .header("authorization", "Bearer jwt-1");
        then.status(200)
            .json_body(json!({ "id": 1, "username": "droma", "role": "USER" }));
    });

    let (api, _nav) = client_at(&server, MemoryStore::with_session(session(Role::User)), "/");
    let profile = api.me().await.unwrap();
    assert_eq!(profile.username, "droma");
    mock.assert_async().await;
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization_header() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/spots")
            .matches(has_no_authorization_header);
        then.status(200).json_body(json!([]));
    });

    let (api, _nav) = client_at(&server, MemoryStore::empty(), "/spots");
    api.list_spots().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn reads_default_to_chinese_locale() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/spots").query_param("locale", "zh");
        then.status(200).json_body(json!([]));
    });

    let (api, _nav) = client_at(&server, MemoryStore::empty(), "/spots");
    api.list_spots().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn stored_locale_preference_rides_reads() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/news").query_param("locale", "bo");
        then.status(200).json_body(json!([]));
    });

    let (api, _nav) = client_at(&server, MemoryStore::with_locale("bo"), "/news");
    api.list_news().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn caller_query_params_survive_the_locale_merge() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/spots/search")
            .query_param("keyword", "potala")
            .query_param("locale", "zh");
        then.status(200).json_body(json!([]));
    });

    let (api, _nav) = client_at(&server, MemoryStore::empty(), "/spots");
    api.search_spots("potala").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn writes_carry_no_locale_param() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .matches(has_no_locale_param);
        then.status(200)
            .json_body(json!({ "token": "jwt-2", "username": "droma", "role": "USER" }));
    });

    let (api, _nav) = client_at(&server, MemoryStore::empty(), "/login");
    api.login(LoginRequest {
        username: "droma".into(),
        password: "secret".into(),
    })
    .await
    .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn login_persists_the_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200)
            .json_body(json!({ "token": "jwt-2", "username": "droma", "role": "ADMIN" }));
    });

    let store = MemoryStore::empty();
    let (api, _nav) = client_at(&server, store.clone(), "/login");
    let session = api
        .login(LoginRequest {
            username: "droma".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert!(session.is_admin());
    assert_eq!(store.load_session(), Some(session));
}

#[tokio::test]
async fn unauthorized_outside_admin_clears_session_and_redirects() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/bookings/my");
        then.status(401).json_body(json!({ "message": "token expired" }));
    });

    let store = MemoryStore::with_session(session(Role::User));
    let (api, nav) = client_at(&server, store.clone(), "/profile");
    let err = api.my_bookings().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(store.load_session().is_none(), "dead token dropped");
    assert_eq!(nav.redirects(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn unauthorized_on_admin_pages_is_deferred() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/users");
        then.status(401).json_body(json!({ "message": "forbidden" }));
    });

    let store = MemoryStore::with_session(session(Role::User));
    let (api, nav) = client_at(&server, store.clone(), "/admin/users");
    let err = api.list_users().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(store.load_session().is_some(), "session kept for the page to handle");
    assert!(nav.redirects().is_empty());
}

#[tokio::test]
async fn unauthorized_on_the_login_page_stays_put() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401).json_body(json!({ "message": "bad credentials" }));
    });

    let (api, nav) = client_at(&server, MemoryStore::empty(), "/login");
    let err = api
        .login(LoginRequest {
            username: "droma".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "bad credentials".into()
        }
    );
    assert!(nav.redirects().is_empty(), "no redirect loop on the login page");
}

#[tokio::test]
async fn error_envelope_message_is_surfaced() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/bookings");
        then.status(500).json_body(json!({ "message": "no capacity left" }));
    });

    let (api, _nav) = client_at(&server, MemoryStore::with_session(session(Role::User)), "/spots");
    let err = api
        .create_booking(crate::api::types::CreateBooking {
            spot_id: 1,
            visit_date: chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            ticket_count: 2,
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "no capacity left".into()
        }
    );
}

#[tokio::test]
async fn bodyless_errors_fall_back_to_the_status_reason() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/spots/999");
        then.status(404);
    });

    let (api, _nav) = client_at(&server, MemoryStore::empty(), "/spots/999");
    let err = api.spot_detail(999).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            message: "Not Found".into()
        }
    );
}

#[tokio::test]
async fn multipart_upload_lets_the_transport_set_the_boundary() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/comments/upload-image")
            .matches(has_multipart_content_type);
        then.status(200).json_body(json!({ "url": "/img/upload-1.jpg" }));
    });

    let (api, _nav) = client_at(&server, MemoryStore::with_session(session(Role::User)), "/spots/1");
    let form = reqwest::multipart::Form::new().text("file", "bytes");
    let uploaded = api.upload_comment_image(form).await.unwrap();
    assert_eq!(uploaded.url, "/img/upload-1.jpg");
    mock.assert_async().await;
}
