use leptos::*;
use leptos_router::{use_params_map, A};
use rust_i18n::t;

use super::{empty_view, error_view, loading_view, use_api};
use crate::api::types::{CreateBooking, CreateComment, ScenicSpot, SpotComment};
use crate::api::ApiError;

pub(crate) fn spot_cards(spots: &[ScenicSpot]) -> View {
    if spots.is_empty() {
        return empty_view();
    }
    spots
        .iter()
        .map(|spot| {
            let detail = format!("/spots/{}", spot.id);
            let name = spot.name.clone();
            view! {
                <article class="spot-card bg-white rounded-lg shadow p-4">
                    <A href=detail>
                        <h3 class="font-bold">{name}</h3>
                    </A>
                    <p class="text-sm text-gray-600">
                        {spot.description.clone().unwrap_or_default()}
                    </p>
                    {spot.ticket_price.map(|price| view! {
                        <span class="price text-amber-700">{format!("¥{:.0}", price)}</span>
                    })}
                </article>
            }
        })
        .collect_view()
}

#[component]
pub fn SpotsPage() -> impl IntoView {
    let api = use_api();
    let (keyword, set_keyword) = create_signal(String::new());
    let spots = create_local_resource(
        move || keyword.get(),
        move |keyword| {
            let api = api.clone();
            async move {
                let keyword = keyword.trim().to_string();
                if keyword.is_empty() {
                    api.list_spots().await
                } else {
                    api.search_spots(&keyword).await
                }
            }
        },
    );
    view! {
        <section class="spots space-y-4">
            <h1 class="text-2xl font-bold">{t!("spots.title").to_string()}</h1>
            <input
                type="search"
                class="border rounded px-3 py-2 w-full max-w-md"
                placeholder=t!("spots.search_placeholder").to_string()
                on:input=move |ev| set_keyword.set(event_target_value(&ev))
            />
            <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                {move || match spots.get() {
                    None => loading_view(),
                    Some(Err(err)) => error_view(&err),
                    Some(Ok(spots)) => spot_cards(&spots),
                }}
            </div>
        </section>
    }
}

fn spot_header(spot: &ScenicSpot) -> View {
    view! {
        <header class="space-y-2">
            <h1 class="text-2xl font-bold">{spot.name.clone()}</h1>
            <p class="text-gray-600">{spot.description.clone().unwrap_or_default()}</p>
            <dl class="flex gap-6 text-sm text-gray-500">
                {spot.location.clone().map(|location| view! { <dd>{location}</dd> })}
                {spot.altitude.clone().map(|altitude| view! { <dd>{altitude}</dd> })}
                {spot.rating.map(|rating| view! { <dd>{format!("★ {:.1}", rating)}</dd> })}
            </dl>
        </header>
    }
    .into_view()
}

fn comment_list(comments: &[SpotComment]) -> View {
    if comments.is_empty() {
        return empty_view();
    }
    comments
        .iter()
        .map(|comment| {
            view! {
                <li class="border-b py-2">
                    <span class="font-bold mr-2">{comment.username.clone()}</span>
                    {comment.rating.map(|rating| view! {
                        <span class="text-amber-600 mr-2">{format!("★{}", rating)}</span>
                    })}
                    <p>{comment.content.clone()}</p>
                </li>
            }
        })
        .collect_view()
}

#[component]
pub fn SpotDetailPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let spot_id = create_memo(move |_| {
        params.with(|p| {
            p.get("id")
                .and_then(|raw| raw.parse::<i64>().ok())
                .unwrap_or_default()
        })
    });

    let spot = create_local_resource(move || spot_id.get(), {
        let api = api.clone();
        move |id| {
            let api = api.clone();
            async move { api.spot_detail(id).await }
        }
    });
    let comments = create_local_resource(move || spot_id.get(), {
        let api = api.clone();
        move |id| {
            let api = api.clone();
            async move { api.comments_for_spot(id).await }
        }
    });

    let (visit_date, set_visit_date) = create_signal(String::new());
    let (ticket_count, set_ticket_count) = create_signal(1i32);
    let book = create_action({
        let api = api.clone();
        move |request: &CreateBooking| {
            let api = api.clone();
            let request = request.clone();
            async move { api.create_booking(request).await }
        }
    });
    let submit_booking = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match visit_date.get().parse() {
            Ok(date) => book.dispatch(CreateBooking {
                spot_id: spot_id.get(),
                visit_date: date,
                ticket_count: ticket_count.get(),
            }),
            Err(_) => log::warn!("booking submitted without a valid visit date"),
        }
    };

    let (comment_text, set_comment_text) = create_signal(String::new());
    let comment_action = create_action({
        let api = api.clone();
        move |request: &CreateComment| {
            let api = api.clone();
            let request = request.clone();
            async move { api.create_comment(request).await }
        }
    });
    create_effect(move |_| {
        if matches!(comment_action.value().get(), Some(Ok(()))) {
            set_comment_text.set(String::new());
            comments.refetch();
        }
    });
    let submit_comment = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let content = comment_text.get();
        if content.trim().is_empty() {
            return;
        }
        comment_action.dispatch(CreateComment {
            spot_id: spot_id.get(),
            content,
            rating: None,
            image_url: None,
        });
    };

    view! {
        <section class="spot-detail space-y-6">
            {move || match spot.get() {
                None => loading_view(),
                Some(Err(err)) => error_view(&err),
                Some(Ok(spot)) => spot_header(&spot),
            }}

            <form class="booking-form space-y-2" on:submit=submit_booking>
                <h2 class="text-xl font-bold">{t!("spot.book_title").to_string()}</h2>
                <label class="block">
                    {t!("spot.visit_date").to_string()}
                    <input
                        type="date"
                        class="border rounded px-2 py-1 ml-2"
                        on:input=move |ev| set_visit_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    {t!("spot.ticket_count").to_string()}
                    <input
                        type="number"
                        min="1"
                        value="1"
                        class="border rounded px-2 py-1 ml-2 w-20"
                        on:input=move |ev| {
                            set_ticket_count.set(event_target_value(&ev).parse().unwrap_or(1));
                        }
                    />
                </label>
                <button type="submit" class="bg-amber-700 text-white rounded px-4 py-2">
                    {t!("spot.book_submit").to_string()}
                </button>
                {move || booking_feedback(book.value().get())}
            </form>

            <div class="comments">
                <h2 class="text-xl font-bold">{t!("spot.comments_title").to_string()}</h2>
                <ul>
                    {move || match comments.get() {
                        None => loading_view(),
                        Some(Err(err)) => error_view(&err),
                        Some(Ok(comments)) => comment_list(&comments),
                    }}
                </ul>
                <form class="mt-4 flex gap-2" on:submit=submit_comment>
                    <input
                        class="border rounded px-3 py-2 flex-1"
                        placeholder=t!("spot.comment_placeholder").to_string()
                        prop:value=comment_text
                        on:input=move |ev| set_comment_text.set(event_target_value(&ev))
                    />
                    <button type="submit" class="bg-gray-800 text-white rounded px-4 py-2">
                        {t!("spot.comment_submit").to_string()}
                    </button>
                </form>
            </div>
        </section>
    }
}

fn booking_feedback(result: Option<Result<(), ApiError>>) -> View {
    match result {
        Some(Ok(())) => view! {
            <p class="text-green-700">{t!("spot.booking_done").to_string()}</p>
        }
        .into_view(),
        Some(Err(err)) => error_view(&err),
        None => ().into_view(),
    }
}
