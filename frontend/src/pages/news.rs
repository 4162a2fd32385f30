use leptos::*;
use rust_i18n::t;

use super::{empty_view, error_view, loading_view, use_api};
use crate::api::types::NewsArticle;

fn news_list(articles: &[NewsArticle]) -> View {
    if articles.is_empty() {
        return empty_view();
    }
    articles
        .iter()
        .map(|article| {
            let published = article
                .created_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            view! {
                <article class="news-item border-b py-4">
                    <h3 class="font-bold">{article.title.clone()}</h3>
                    <time class="text-xs text-gray-500">{published}</time>
                    <p class="text-sm text-gray-700">
                        {article.content.clone().unwrap_or_default()}
                    </p>
                </article>
            }
        })
        .collect_view()
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let api = use_api();
    let articles = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_news().await }
        },
    );
    view! {
        <section class="news space-y-4">
            <h1 class="text-2xl font-bold">{t!("news.title").to_string()}</h1>
            {move || match articles.get() {
                None => loading_view(),
                Some(Err(err)) => error_view(&err),
                Some(Ok(articles)) => news_list(&articles),
            }}
        </section>
    }
}
