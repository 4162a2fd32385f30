//! Reactive authentication context.
//!
//! The signal mirrors what the injected session store holds; login and
//! logout go through here so every subscriber (nav bar, guards) sees the
//! change in the same tick.

use leptos::*;

use crate::api::types::{LoginRequest, RegisterRequest};
use crate::api::{ApiClient, ApiError};
use crate::session::Session;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

fn create_auth_context() -> AuthContext {
    let session = use_context::<ApiClient>().and_then(|api| api.session());
    create_signal(AuthState { session })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    api: &ApiClient,
    payload: LoginRequest,
    set_auth: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let session = api.login(payload).await?;
    set_auth.update(|state| state.session = Some(session));
    Ok(())
}

pub async fn register_request(api: &ApiClient, payload: RegisterRequest) -> Result<(), ApiError> {
    api.register(payload).await
}

/// Logout is purely client-side: drop the persisted record and the signal.
pub fn logout(api: &ApiClient, set_auth: WriteSignal<AuthState>) {
    api.store().clear_session();
    set_auth.update(|state| state.session = None);
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::browser);
    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(&api, payload, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::browser);
    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth) }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::session::{Role, SessionStore};
    use crate::test_support::fixtures::{MemoryStore, RecordingNavigator};
    use httpmock::prelude::*;

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "token": "jwt-abc",
                "username": "droma",
                "role": "USER"
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let store = MemoryStore::empty();
        let api = ApiClient::with_base_url(
            server.url("/api"),
            store.clone(),
            RecordingNavigator::at("/login"),
        );

        login_request(
            &api,
            LoginRequest {
                username: "droma".into(),
                password: "secret".into(),
            },
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get_untracked();
        let session = snapshot.session.expect("session after login");
        assert_eq!(session.username, "droma");
        assert_eq!(session.role, Role::User);
        assert!(store.load_session().is_some(), "session persisted");

        logout(&api, set_state);
        assert!(state.get_untracked().session.is_none());
        assert!(store.load_session().is_none(), "session cleared");
        runtime.dispose();
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        let runtime = create_runtime();
        let (state, _set_state) = use_auth();
        assert!(state.get_untracked().session.is_none());
        runtime.dispose();
    }
}
