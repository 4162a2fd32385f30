use leptos::*;
use rust_i18n::t;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <section class="legal prose max-w-2xl mx-auto py-8">
            <h1>{t!("legal.privacy_title").to_string()}</h1>
            <p>{t!("legal.privacy_body").to_string()}</p>
        </section>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <section class="legal prose max-w-2xl mx-auto py-8">
            <h1>{t!("legal.terms_title").to_string()}</h1>
            <p>{t!("legal.terms_body").to_string()}</p>
        </section>
    }
}
