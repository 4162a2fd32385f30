use leptos::*;
use rust_i18n::t;

use super::{error_view, loading_view, use_api};
use crate::pages::spots::spot_cards;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let recommended = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.recommended_spots().await }
        },
    );
    view! {
        <section class="home space-y-6">
            <div class="hero py-12 text-center">
                <h1 class="text-3xl font-bold">{t!("home.title").to_string()}</h1>
                <p class="mt-2 text-gray-600">{t!("home.tagline").to_string()}</p>
            </div>
            <h2 class="text-xl font-bold">{t!("home.recommended").to_string()}</h2>
            {move || match recommended.get() {
                None => loading_view(),
                Some(Err(err)) => error_view(&err),
                Some(Ok(spots)) => spot_cards(&spots),
            }}
        </section>
    }
}
