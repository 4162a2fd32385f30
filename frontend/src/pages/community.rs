use leptos::*;
use leptos_router::{use_params_map, A};
use rust_i18n::t;

use crate::router::paths;

#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <section class="community space-y-4">
            <h1 class="text-2xl font-bold">{t!("community.title").to_string()}</h1>
            <p class="text-gray-600">{t!("community.intro").to_string()}</p>
            <A href=paths::CREATE_ROUTE class="text-amber-700">
                {t!("community.create_link").to_string()}
            </A>
        </section>
    }
}

#[component]
pub fn RouteDetailPage() -> impl IntoView {
    let params = use_params_map();
    let route_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    view! {
        <section class="route-detail space-y-4">
            <h1 class="text-2xl font-bold">
                {move || format!("{} #{}", t!("community.detail_title"), route_id())}
            </h1>
            <p class="text-gray-600">{t!("community.detail_intro").to_string()}</p>
        </section>
    }
}

#[component]
pub fn CreateRoutePage() -> impl IntoView {
    view! {
        <section class="create-route space-y-4">
            <h1 class="text-2xl font-bold">{t!("community.create_title").to_string()}</h1>
            <p class="text-gray-600">{t!("community.create_intro").to_string()}</p>
        </section>
    }
}
