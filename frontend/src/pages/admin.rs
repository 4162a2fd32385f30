use leptos::*;
use rust_i18n::t;

use super::{empty_view, error_view, loading_view, use_api};
use crate::api::types::{DashboardStats, UserSummary};
use crate::session::Role;

fn stats_summary(stats: &DashboardStats) -> View {
    view! {
        <dl class="grid grid-cols-3 gap-4 text-center">
            <div class="bg-white rounded-lg shadow p-4">
                <dt class="text-sm text-gray-500">{t!("admin.user_count").to_string()}</dt>
                <dd class="text-2xl font-bold">{stats.user_count}</dd>
            </div>
            <div class="bg-white rounded-lg shadow p-4">
                <dt class="text-sm text-gray-500">{t!("admin.booking_count").to_string()}</dt>
                <dd class="text-2xl font-bold">{stats.booking_count}</dd>
            </div>
            <div class="bg-white rounded-lg shadow p-4">
                <dt class="text-sm text-gray-500">{t!("admin.revenue").to_string()}</dt>
                <dd class="text-2xl font-bold">
                    {stats
                        .total_revenue
                        .map(|revenue| format!("¥{:.0}", revenue))
                        .unwrap_or_else(|| "-".into())}
                </dd>
            </div>
        </dl>
    }
    .into_view()
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api();
    let stats = create_local_resource(|| (), {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            async move { api.dashboard_stats().await }
        }
    });
    let users = create_local_resource(|| (), {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            async move { api.list_users().await }
        }
    });

    let toggle_role = create_action({
        let api = api.clone();
        move |(user_id, role): &(i64, Role)| {
            let api = api.clone();
            let (user_id, role) = (*user_id, *role);
            async move { api.update_user_role(user_id, role).await }
        }
    });
    create_effect(move |_| {
        if matches!(toggle_role.value().get(), Some(Ok(()))) {
            users.refetch();
        }
    });

    let user_rows = move |list: Vec<UserSummary>| {
        if list.is_empty() {
            return empty_view();
        }
        list.into_iter()
            .map(|user| {
                let (next_role, action_label) = match user.role {
                    Role::User => (Role::Admin, t!("admin.promote").to_string()),
                    Role::Admin => (Role::User, t!("admin.demote").to_string()),
                };
                let user_id = user.id;
                view! {
                    <tr class="border-b">
                        <td class="py-2">{user.username.clone()}</td>
                        <td class="py-2 text-gray-500">{format!("{:?}", user.role)}</td>
                        <td class="py-2">
                            <button
                                class="text-sm text-amber-700"
                                on:click=move |_| toggle_role.dispatch((user_id, next_role))
                            >
                                {action_label}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="admin space-y-6">
            <h1 class="text-2xl font-bold">{t!("admin.title").to_string()}</h1>
            {move || match stats.get() {
                None => loading_view(),
                Some(Err(err)) => error_view(&err),
                Some(Ok(stats)) => stats_summary(&stats),
            }}
            <h2 class="text-xl font-bold">{t!("admin.users_title").to_string()}</h2>
            <table class="w-full text-left">
                <tbody>
                    {move || match users.get() {
                        None => loading_view(),
                        Some(Err(err)) => error_view(&err),
                        Some(Ok(list)) => user_rows(list),
                    }}
                </tbody>
            </table>
            {move || toggle_role.value().get().and_then(Result::err).map(|err| error_view(&err))}
        </section>
    }
}
