//! HTTP client wrapper.
//!
//! A single configured client carries the cross-cutting request policy
//! (bearer token, locale query parameter, multipart header hygiene) and the
//! 401 recovery policy. Session and navigation are injected so host tests
//! can run against an in-memory store and observe redirects.

use std::rc::Rc;

use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::types::ApiMessage;
use crate::api::ApiError;
use crate::router::{self, BrowserNavigator, Navigator, UnauthorizedPolicy};
use crate::session::{BrowserStore, Session, SharedStore};
use crate::{config, i18n};

/// Typed request configuration: explicit slots instead of open-ended header
/// and query mutation.
#[derive(Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

#[derive(Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(body: Value) -> Self {
        Self {
            body: RequestBody::Json(body),
            ..Self::default()
        }
    }

    pub fn multipart(form: reqwest::multipart::Form) -> Self {
        Self {
            body: RequestBody::Multipart(form),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

pub(crate) fn to_json_value<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Option<String>,
    store: SharedStore,
    nav: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(store: SharedStore, nav: Rc<dyn Navigator>) -> Self {
        Self {
            http: build_http_client(),
            base_url: None,
            store,
            nav,
        }
    }

    /// Client wired to real browser storage and navigation.
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStore), Rc::new(BrowserNavigator))
    }

    /// Pin the base URL instead of consulting the runtime config.
    pub fn with_base_url(
        base_url: impl Into<String>,
        store: SharedStore,
        nav: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            http: build_http_client(),
            base_url: Some(base_url.into()),
            store,
            nav,
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.store.load_session()
    }

    pub fn store(&self) -> SharedStore {
        Rc::clone(&self.store)
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Issue a request with the full outgoing policy applied.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions,
    ) -> Result<Response, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        let RequestOptions {
            mut headers,
            mut query,
            body,
        } = opts;

        match self.store.load_session() {
            Some(session) => {
                if let Ok(value) = format!("Bearer {}", session.token).parse() {
                    headers.insert(AUTHORIZATION, value);
                }
            }
            // No early abort: the server is authoritative and rejects on
            // its own. The warning helps diagnose silent admin failures.
            None if requires_credentials(path) => {
                log::warn!("no session for protected call {}", path);
            }
            None => {}
        }

        if method == Method::GET {
            merge_locale_param(&mut query, self.store.locale());
        }
        sanitize_headers(&mut headers, &body);

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        request = request.headers(headers);
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(ApiError::from)?;
        if response.status() == StatusCode::UNAUTHORIZED {
            self.recover_unauthorized();
        }
        Ok(response)
    }

    /// 401 recovery depends on where the user currently is: admin pages and
    /// the login form handle the error themselves (a 401 there is ambiguous
    /// between expiry, role mismatch and bad credentials); everywhere else
    /// the session is gone for good, so drop it and go to the login page.
    fn recover_unauthorized(&self) {
        let path = self
            .nav
            .current_path()
            .unwrap_or_else(|| router::paths::HOME.to_string());
        match router::unauthorized_policy(&path) {
            UnauthorizedPolicy::Defer => {
                log::warn!("401 on {}: leaving recovery to the page handler", path);
            }
            UnauthorizedPolicy::ClearSession => {
                self.store.clear_session();
                self.nav.redirect_to(router::paths::LOGIN);
            }
        }
    }

    pub(crate) async fn expect_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, opts).await?;
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(status_error(status, response).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: RequestOptions,
    ) -> Result<T, ApiError> {
        self.expect_json(Method::GET, path, opts).await
    }

    /// For endpoints that only acknowledge with `{ "message": ... }`.
    pub(crate) async fn expect_ack(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions,
    ) -> Result<(), ApiError> {
        let response = self.send(method, path, opts).await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status, response).await)
        }
    }
}

fn build_http_client() -> Client {
    // reqwest exposes no builder timeout on wasm32; browser requests ride
    // the fetch default there.
    #[cfg(not(target_arch = "wasm32"))]
    {
        Client::builder()
            .timeout(config::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new())
    }
    #[cfg(target_arch = "wasm32")]
    {
        Client::new()
    }
}

async fn status_error(status: StatusCode, response: Response) -> ApiError {
    let message = match response.json::<ApiMessage>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Paths whose calls are pointless without a token. They are still sent
/// (the server decides), only logged.
fn requires_credentials(path: &str) -> bool {
    path.starts_with("/admin") || path.starts_with("/auth/me")
}

/// Read requests advertise the display language so the server can localize
/// names and descriptions. Caller-supplied parameters are kept as-is.
fn merge_locale_param(query: &mut Vec<(String, String)>, preference: Option<String>) {
    if query.iter().any(|(key, _)| key == "locale") {
        return;
    }
    let locale = preference.unwrap_or_else(|| i18n::FALLBACK_LOCALE.to_string());
    query.push(("locale".to_string(), locale));
}

/// Multipart bodies must not carry an explicit content type: the transport
/// writes the boundary-bearing one itself.
fn sanitize_headers(headers: &mut HeaderMap, body: &RequestBody) {
    if matches!(body, RequestBody::Multipart(_)) {
        headers.remove(CONTENT_TYPE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn multipart_drops_explicit_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let form = reqwest::multipart::Form::new().text("file", "bytes");
        sanitize_headers(&mut headers, &RequestBody::Multipart(form));
        assert!(!headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn json_body_keeps_explicit_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        sanitize_headers(&mut headers, &RequestBody::Json(serde_json::json!({})));
        assert!(headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn locale_defaults_to_chinese_when_unset() {
        let mut query = Vec::new();
        merge_locale_param(&mut query, None);
        assert_eq!(query, vec![("locale".to_string(), "zh".to_string())]);
    }

    #[test]
    fn locale_merge_keeps_caller_params() {
        let mut query = vec![("keyword".to_string(), "potala".to_string())];
        merge_locale_param(&mut query, Some("bo".to_string()));
        assert_eq!(query.len(), 2);
        assert_eq!(query[0].0, "keyword");
        assert_eq!(query[1], ("locale".to_string(), "bo".to_string()));
    }

    #[test]
    fn caller_supplied_locale_wins() {
        let mut query = vec![("locale".to_string(), "bo".to_string())];
        merge_locale_param(&mut query, Some("zh".to_string()));
        assert_eq!(query, vec![("locale".to_string(), "bo".to_string())]);
    }

    #[test]
    fn admin_and_identity_paths_expect_credentials() {
        assert!(requires_credentials("/admin/stats"));
        assert!(requires_credentials("/auth/me"));
        assert!(requires_credentials("/auth/me/stats"));
        assert!(!requires_credentials("/spots"));
        assert!(!requires_credentials("/auth/login"));
    }
}
