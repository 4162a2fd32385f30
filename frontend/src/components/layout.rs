use leptos::*;
use leptos_router::A;
use rust_i18n::t;

use crate::router::paths;
use crate::state::auth::{use_auth, use_logout_action};

#[component]
pub fn NavBar() -> impl IntoView {
    let (auth, _) = use_auth();
    let logout = use_logout_action();
    let session = create_memo(move |_| auth.get().session);
    let is_admin = create_memo(move |_| {
        session
            .get()
            .map(|session| session.is_admin())
            .unwrap_or(false)
    });
    view! {
        <nav class="navbar flex items-center gap-4 px-6 py-3 bg-white shadow">
            <A href=paths::HOME>{t!("nav.home").to_string()}</A>
            <A href=paths::SPOTS>{t!("nav.spots").to_string()}</A>
            <A href=paths::HERITAGE>{t!("nav.heritage").to_string()}</A>
            <A href=paths::NEWS>{t!("nav.news").to_string()}</A>
            <A href=paths::COMMUNITY>{t!("nav.community").to_string()}</A>
            <A href=paths::ROUTE_PLANNER>{t!("nav.planner").to_string()}</A>
            <Show
                when=move || session.get().is_some()
                fallback=|| view! { <A href=paths::LOGIN>{t!("nav.login").to_string()}</A> }
            >
                <A href=paths::PROFILE>{t!("nav.profile").to_string()}</A>
                <Show when=move || is_admin.get() fallback=|| ()>
                    <A href=paths::ADMIN>{t!("nav.admin").to_string()}</A>
                </Show>
                <button class="nav-logout" on:click=move |_| {
                    logout.dispatch(());
                }>{t!("nav.logout").to_string()}</button>
            </Show>
        </nav>
    }
}
