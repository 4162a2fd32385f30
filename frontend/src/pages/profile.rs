use leptos::*;
use rust_i18n::t;

use super::{empty_view, error_view, loading_view, use_api};
use crate::api::types::{Booking, UserProfile, UserStats};

fn profile_card(profile: &UserProfile) -> View {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <h2 class="text-xl font-bold">
                {profile.nickname.clone().unwrap_or_else(|| profile.username.clone())}
            </h2>
            <p class="text-sm text-gray-500">{profile.email.clone().unwrap_or_default()}</p>
        </div>
    }
    .into_view()
}

fn stats_row(stats: &UserStats) -> View {
    view! {
        <dl class="flex gap-6 text-sm text-gray-600">
            <div>
                <dt>{t!("profile.booking_count").to_string()}</dt>
                <dd class="font-bold">{stats.booking_count}</dd>
            </div>
            <div>
                <dt>{t!("profile.comment_count").to_string()}</dt>
                <dd class="font-bold">{stats.comment_count}</dd>
            </div>
            <div>
                <dt>{t!("profile.visited_count").to_string()}</dt>
                <dd class="font-bold">{stats.visited_spot_count}</dd>
            </div>
        </dl>
    }
    .into_view()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();
    let profile = create_local_resource(|| (), {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            async move { api.me().await }
        }
    });
    let stats = create_local_resource(|| (), {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            async move { api.my_stats().await }
        }
    });
    let bookings = create_local_resource(|| (), {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            async move { api.my_bookings().await }
        }
    });

    let cancel = create_action({
        let api = api.clone();
        move |booking_id: &i64| {
            let api = api.clone();
            let booking_id = *booking_id;
            async move { api.cancel_booking(booking_id).await }
        }
    });
    create_effect(move |_| {
        if matches!(cancel.value().get(), Some(Ok(()))) {
            bookings.refetch();
        }
    });

    let booking_rows = move |list: Vec<Booking>| {
        if list.is_empty() {
            return empty_view();
        }
        list.into_iter()
            .map(|booking| {
                let booking_id = booking.id;
                let cancellable = booking.status != "CANCELLED";
                view! {
                    <li class="border-b py-2 flex items-center justify-between">
                        <span>
                            {booking.spot_name.clone().unwrap_or_default()}
                            " · "
                            {booking.visit_date.format("%Y-%m-%d").to_string()}
                            {format!(" × {}", booking.ticket_count)}
                        </span>
                        <span class="text-sm text-gray-500">{booking.status.clone()}</span>
                        <Show when=move || cancellable fallback=|| ()>
                            <button
                                class="text-sm text-red-600"
                                on:click=move |_| cancel.dispatch(booking_id)
                            >
                                {t!("profile.cancel").to_string()}
                            </button>
                        </Show>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="profile space-y-6">
            <h1 class="text-2xl font-bold">{t!("profile.title").to_string()}</h1>
            {move || match profile.get() {
                None => loading_view(),
                Some(Err(err)) => error_view(&err),
                Some(Ok(profile)) => profile_card(&profile),
            }}
            {move || match stats.get() {
                None => ().into_view(),
                Some(Err(err)) => error_view(&err),
                Some(Ok(stats)) => stats_row(&stats),
            }}
            <h2 class="text-xl font-bold">{t!("profile.bookings_title").to_string()}</h2>
            <ul>
                {move || match bookings.get() {
                    None => loading_view(),
                    Some(Err(err)) => error_view(&err),
                    Some(Ok(list)) => booking_rows(list),
                }}
            </ul>
        </section>
    }
}
