use leptos::*;

use crate::router::{self, paths, GuardDecision, RouteMeta, UnauthorizedPolicy};
use crate::state::auth::use_auth;

const AUTH_RULE: RouteMeta = RouteMeta {
    path: paths::PROFILE,
    requires_auth: true,
    admin_only: false,
    on_unauthorized: UnauthorizedPolicy::ClearSession,
};

const ADMIN_RULE: RouteMeta = RouteMeta {
    path: paths::ADMIN,
    requires_auth: true,
    admin_only: true,
    on_unauthorized: UnauthorizedPolicy::Defer,
};

fn should_render(decision: GuardDecision) -> bool {
    decision == GuardDecision::Allow
}

fn guarded(rule: &'static RouteMeta, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| router::evaluate(rule, auth.get().session.as_ref()));
    create_effect(move |_| match decision.get() {
        GuardDecision::Allow => {}
        GuardDecision::RedirectHome => router::force_navigate(paths::HOME),
        GuardDecision::RedirectLogin => router::force_navigate(paths::LOGIN),
    });
    view! {
        <Show when=move || should_render(decision.get()) fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Wrapper for routes flagged `requires_auth`: renders children only with a
/// session present, otherwise sends the visitor to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(&AUTH_RULE, children)
}

/// Wrapper for the admin section: the session must exist and carry the
/// admin role, anything else goes back to the home page.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(&ADMIN_RULE, children)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::session::{Role, Session};
    use crate::state::auth::AuthState;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn provide_auth(session: Option<Session>) {
        let (auth, set_auth) = create_signal(AuthState { session });
        provide_context((auth, set_auth));
    }

    fn session(role: Role) -> Session {
        Session {
            token: "jwt-1".into(),
            username: "droma".into(),
            role,
        }
    }

    #[test]
    fn require_auth_renders_children_with_session() {
        let html = render_to_string(move || {
            provide_auth(Some(session(Role::User)));
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_without_session() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_renders_children_for_admin() {
        let html = render_to_string(move || {
            provide_auth(Some(session(Role::Admin)));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-only"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-only"));
    }

    #[test]
    fn require_admin_hides_children_for_regular_user() {
        let html = render_to_string(move || {
            provide_auth(Some(session(Role::User)));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-only"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-only"));
    }
}
