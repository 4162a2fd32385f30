use leptos::*;
use leptos_router::{use_navigate, A};
use rust_i18n::t;

use super::{error_view, use_api};
use crate::api::types::{LoginRequest, RegisterRequest};
use crate::router::paths;
use crate::state::auth::{register_request, use_login_action};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let login = use_login_action();
    let navigate = use_navigate();

    create_effect(move |_| {
        if matches!(login.value().get(), Some(Ok(()))) {
            navigate(paths::HOME, Default::default());
        }
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        login.dispatch(LoginRequest {
            username: username.get(),
            password: password.get(),
        });
    };

    view! {
        <section class="login max-w-sm mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{t!("auth.login_title").to_string()}</h1>
            <form class="space-y-3" on:submit=submit>
                <input
                    class="border rounded px-3 py-2 w-full"
                    placeholder=t!("auth.username").to_string()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    class="border rounded px-3 py-2 w-full"
                    placeholder=t!("auth.password").to_string()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="bg-amber-700 text-white rounded px-4 py-2 w-full"
                    disabled=move || login.pending().get()
                >
                    {t!("auth.login_submit").to_string()}
                </button>
            </form>
            {move || login.value().get().and_then(Result::err).map(|err| error_view(&err))}
            <A href=paths::REGISTER class="text-sm text-gray-600">
                {t!("auth.to_register").to_string()}
            </A>
        </section>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let navigate = use_navigate();

    let register = create_action(move |payload: &RegisterRequest| {
        let api = api.clone();
        let payload = payload.clone();
        async move { register_request(&api, payload).await }
    });

    create_effect(move |_| {
        if matches!(register.value().get(), Some(Ok(()))) {
            navigate(paths::LOGIN, Default::default());
        }
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        register.dispatch(RegisterRequest {
            username: username.get(),
            password: password.get(),
            email: if email.trim().is_empty() { None } else { Some(email) },
        });
    };

    view! {
        <section class="register max-w-sm mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{t!("auth.register_title").to_string()}</h1>
            <form class="space-y-3" on:submit=submit>
                <input
                    class="border rounded px-3 py-2 w-full"
                    placeholder=t!("auth.username").to_string()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    class="border rounded px-3 py-2 w-full"
                    placeholder=t!("auth.password").to_string()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    class="border rounded px-3 py-2 w-full"
                    placeholder=t!("auth.email").to_string()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="bg-amber-700 text-white rounded px-4 py-2 w-full"
                    disabled=move || register.pending().get()
                >
                    {t!("auth.register_submit").to_string()}
                </button>
            </form>
            {move || register.value().get().and_then(Result::err).map(|err| error_view(&err))}
        </section>
    }
}
