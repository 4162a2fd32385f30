//! Route table, navigation guard and app wiring.
//!
//! Every route carries its access metadata and its 401 recovery policy, so
//! both the pre-navigation guard and the HTTP client resolve behavior from
//! one declarative table instead of re-deriving it from raw path strings.

use leptos::*;
use leptos_router::*;

use crate::components::guard::{RequireAdmin, RequireAuth};
use crate::components::layout::NavBar;
use crate::pages::{
    AdminDashboardPage, CommunityPage, CreateRoutePage, HeritagePage, HomePage, LoginPage,
    NewsPage, PrivacyPage, ProfilePage, RegisterPage, RouteDetailPage, RoutePlannerPage,
    SpotDetailPage, SpotsPage, TermsPage,
};
use crate::session::Session;
use crate::state::auth::AuthProvider;

pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const SPOTS: &str = "/spots";
    pub const SPOT_DETAIL: &str = "/spots/:id";
    pub const HERITAGE: &str = "/heritage";
    pub const NEWS: &str = "/news";
    pub const ADMIN: &str = "/admin";
    pub const ROUTE_PLANNER: &str = "/route-planner";
    /// Legacy alias kept for old bookmarks; redirects to [`ROUTE_PLANNER`].
    pub const ROUTE_ALIAS: &str = "/route";
    pub const COMMUNITY: &str = "/community";
    pub const ROUTE_DETAIL: &str = "/community/:id";
    pub const CREATE_ROUTE: &str = "/create-route";
    pub const PROFILE: &str = "/profile";
    pub const PRIVACY: &str = "/privacy";
    pub const TERMS: &str = "/terms";
}

/// What the response interceptor may do with a 401 caught on this route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedPolicy {
    /// Leave session and location alone; the page's own error handling
    /// decides (admin pages: could be expiry or a role mismatch; login
    /// page: bad credentials).
    Defer,
    /// The token is dead. Drop the session and go to the login page.
    ClearSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectHome,
    RedirectLogin,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteMeta {
    pub path: &'static str,
    pub requires_auth: bool,
    pub admin_only: bool,
    pub on_unauthorized: UnauthorizedPolicy,
}

impl RouteMeta {
    const fn public(path: &'static str) -> Self {
        Self {
            path,
            requires_auth: false,
            admin_only: false,
            on_unauthorized: UnauthorizedPolicy::ClearSession,
        }
    }
}

pub const ROUTES: &[RouteMeta] = &[
    RouteMeta::public(paths::HOME),
    RouteMeta {
        path: paths::LOGIN,
        requires_auth: false,
        admin_only: false,
        on_unauthorized: UnauthorizedPolicy::Defer,
    },
    RouteMeta::public(paths::REGISTER),
    RouteMeta::public(paths::SPOTS),
    RouteMeta::public(paths::SPOT_DETAIL),
    RouteMeta::public(paths::HERITAGE),
    RouteMeta::public(paths::NEWS),
    RouteMeta {
        path: paths::ADMIN,
        requires_auth: true,
        admin_only: true,
        on_unauthorized: UnauthorizedPolicy::Defer,
    },
    RouteMeta::public(paths::ROUTE_PLANNER),
    RouteMeta::public(paths::ROUTE_ALIAS),
    RouteMeta::public(paths::COMMUNITY),
    RouteMeta::public(paths::ROUTE_DETAIL),
    RouteMeta::public(paths::CREATE_ROUTE),
    RouteMeta {
        path: paths::PROFILE,
        requires_auth: true,
        admin_only: false,
        on_unauthorized: UnauthorizedPolicy::ClearSession,
    },
    RouteMeta::public(paths::PRIVACY),
    RouteMeta::public(paths::TERMS),
];

fn matches_path(pattern: &str, path: &str) -> bool {
    if pattern == path {
        return true;
    }
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pattern_seg, path_seg)| pattern_seg.starts_with(':') || pattern_seg == path_seg)
}

/// Metadata for a concrete path. Anything under the admin section resolves
/// to the admin route even without its own table entry.
pub fn route_meta(path: &str) -> Option<&'static RouteMeta> {
    ROUTES
        .iter()
        .find(|meta| matches_path(meta.path, path))
        .or_else(|| {
            if path.starts_with(paths::ADMIN) {
                ROUTES.iter().find(|meta| meta.path == paths::ADMIN)
            } else {
                None
            }
        })
}

/// 401 recovery for the page the user is currently on. Unknown paths get
/// the destructive default: a dead token should not survive a stray page.
pub fn unauthorized_policy(path: &str) -> UnauthorizedPolicy {
    route_meta(path)
        .map(|meta| meta.on_unauthorized)
        .unwrap_or(UnauthorizedPolicy::ClearSession)
}

/// Pure pre-navigation predicate. Reading the session is the caller's job;
/// this only combines route metadata with what it is given.
pub fn evaluate(meta: &RouteMeta, session: Option<&Session>) -> GuardDecision {
    if meta.admin_only && !session.map(Session::is_admin).unwrap_or(false) {
        return GuardDecision::RedirectHome;
    }
    if meta.requires_auth && session.is_none() {
        return GuardDecision::RedirectLogin;
    }
    GuardDecision::Allow
}

pub fn decide(path: &str, session: Option<&Session>) -> GuardDecision {
    match route_meta(path) {
        Some(meta) => evaluate(meta, session),
        None => GuardDecision::Allow,
    }
}

/// Where the user currently is and how to move them. Injected into the API
/// client so the 401 recovery is observable in tests.
pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn redirect_to(&self, path: &str);
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    fn redirect_to(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().ok().as_deref() == Some(path) {
                return;
            }
            let _ = location.set_href(path);
        }
    }
}

pub fn force_navigate(path: &str) {
    BrowserNavigator.redirect_to(path);
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::browser());
    view! {
        <AuthProvider>
            <Router>
                <NavBar/>
                <main>
                    <Routes>
                        <Route path=paths::HOME view=HomePage/>
                        <Route path=paths::LOGIN view=LoginPage/>
                        <Route path=paths::REGISTER view=RegisterPage/>
                        <Route path=paths::SPOTS view=SpotsPage/>
                        <Route path=paths::SPOT_DETAIL view=SpotDetailPage/>
                        <Route path=paths::HERITAGE view=HeritagePage/>
                        <Route path=paths::NEWS view=NewsPage/>
                        <Route path=paths::ADMIN view=ProtectedAdmin/>
                        <Route path=paths::ROUTE_PLANNER view=RoutePlannerPage/>
                        <Route path=paths::ROUTE_ALIAS view=RouteAlias/>
                        <Route path=paths::COMMUNITY view=CommunityPage/>
                        <Route path=paths::ROUTE_DETAIL view=RouteDetailPage/>
                        <Route path=paths::CREATE_ROUTE view=CreateRoutePage/>
                        <Route path=paths::PROFILE view=ProtectedProfile/>
                        <Route path=paths::PRIVACY view=PrivacyPage/>
                        <Route path=paths::TERMS view=TermsPage/>
                    </Routes>
                </main>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn RouteAlias() -> impl IntoView {
    view! { <Redirect path=paths::ROUTE_PLANNER/> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth>{|| view! { <ProfilePage/> }}</RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireAdmin>{|| view! { <AdminDashboardPage/> }}</RequireAdmin> }
}
