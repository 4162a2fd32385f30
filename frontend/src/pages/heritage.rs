use leptos::*;
use rust_i18n::t;

use super::{empty_view, error_view, loading_view, use_api};
use crate::api::types::HeritageItem;

fn heritage_cards(items: &[HeritageItem]) -> View {
    if items.is_empty() {
        return empty_view();
    }
    items
        .iter()
        .map(|item| {
            view! {
                <article class="heritage-card bg-white rounded-lg shadow p-4">
                    <h3 class="font-bold">{item.name.clone()}</h3>
                    {item.category.clone().map(|category| view! {
                        <span class="text-xs uppercase text-gray-500">{category}</span>
                    })}
                    <p class="text-sm text-gray-600">
                        {item.description.clone().unwrap_or_default()}
                    </p>
                </article>
            }
        })
        .collect_view()
}

#[component]
pub fn HeritagePage() -> impl IntoView {
    let api = use_api();
    let items = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_heritage().await }
        },
    );
    view! {
        <section class="heritage space-y-4">
            <h1 class="text-2xl font-bold">{t!("heritage.title").to_string()}</h1>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                {move || match items.get() {
                    None => loading_view(),
                    Some(Err(err)) => error_view(&err),
                    Some(Ok(items)) => heritage_cards(&items),
                }}
            </div>
        </section>
    }
}
