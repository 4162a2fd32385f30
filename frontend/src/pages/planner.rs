use leptos::*;
use rust_i18n::t;

use super::{error_view, loading_view, use_api};
use crate::pages::spots::spot_cards;

/// The planner reuses the recommendation feed as its candidate pool;
/// day-by-day itinerary assembly happens server-side once a trip is saved.
#[component]
pub fn RoutePlannerPage() -> impl IntoView {
    let api = use_api();
    let candidates = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.recommended_spots().await }
        },
    );
    view! {
        <section class="planner space-y-4">
            <h1 class="text-2xl font-bold">{t!("planner.title").to_string()}</h1>
            <p class="text-gray-600">{t!("planner.intro").to_string()}</p>
            <h2 class="text-xl font-bold">{t!("planner.suggested").to_string()}</h2>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                {move || match candidates.get() {
                    None => loading_view(),
                    Some(Err(err)) => error_view(&err),
                    Some(Ok(spots)) => spot_cards(&spots),
                }}
            </div>
        </section>
    }
}
