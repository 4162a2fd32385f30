pub mod admin;
pub mod auth;
pub mod community;
pub mod heritage;
pub mod home;
pub mod legal;
pub mod news;
pub mod planner;
pub mod profile;
pub mod spots;

pub use admin::AdminDashboardPage;
pub use auth::{LoginPage, RegisterPage};
pub use community::{CommunityPage, CreateRoutePage, RouteDetailPage};
pub use heritage::HeritagePage;
pub use home::HomePage;
pub use legal::{PrivacyPage, TermsPage};
pub use news::NewsPage;
pub use planner::RoutePlannerPage;
pub use profile::ProfilePage;
pub use spots::{SpotDetailPage, SpotsPage};

use leptos::*;
use rust_i18n::t;

use crate::api::{ApiClient, ApiError};

/// The app root provides one shared client; pages fall back to a
/// browser-wired one so they stay usable in isolation.
pub(crate) fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::browser)
}

pub(crate) fn loading_view() -> View {
    view! { <p class="loading text-gray-500">{t!("common.loading").to_string()}</p> }.into_view()
}

pub(crate) fn error_view(err: &ApiError) -> View {
    view! { <p class="error text-red-600">{err.to_string()}</p> }.into_view()
}

pub(crate) fn empty_view() -> View {
    view! { <p class="empty text-gray-500">{t!("common.empty").to_string()}</p> }.into_view()
}
