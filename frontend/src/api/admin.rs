use reqwest::Method;
use serde_json::{json, Value};

use super::client::{to_json_value, ApiClient, RequestOptions};
use super::types::{DashboardStats, NewsPayload, ScenicSpot, UserSummary};
use super::{endpoints, ApiError};
use crate::session::Role;

impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json(endpoints::admin::STATS, RequestOptions::new())
            .await
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json(endpoints::admin::USERS, RequestOptions::new())
            .await
    }

    pub async fn update_user_role(&self, user_id: i64, role: Role) -> Result<(), ApiError> {
        self.expect_ack(
            Method::POST,
            &endpoints::admin::update_role(user_id),
            RequestOptions::json(json!({ "role": role })),
        )
        .await
    }

    pub async fn list_admin_spots(&self) -> Result<Vec<ScenicSpot>, ApiError> {
        self.get_json(endpoints::admin::SPOTS, RequestOptions::new())
            .await
    }

    /// Partial update; the dashboard sends only the fields it edited.
    pub async fn update_spot(&self, spot_id: i64, payload: Value) -> Result<(), ApiError> {
        self.expect_ack(
            Method::PUT,
            &endpoints::admin::update_spot(spot_id),
            RequestOptions::json(payload),
        )
        .await
    }

    pub async fn create_news(&self, payload: NewsPayload) -> Result<(), ApiError> {
        self.expect_ack(
            Method::POST,
            endpoints::admin::NEWS,
            RequestOptions::json(to_json_value(&payload)?),
        )
        .await
    }

    pub async fn update_news(&self, news_id: i64, payload: NewsPayload) -> Result<(), ApiError> {
        self.expect_ack(
            Method::PUT,
            &endpoints::admin::update_news(news_id),
            RequestOptions::json(to_json_value(&payload)?),
        )
        .await
    }

    pub async fn delete_news(&self, news_id: i64) -> Result<(), ApiError> {
        self.expect_ack(
            Method::DELETE,
            &endpoints::admin::delete_news(news_id),
            RequestOptions::new(),
        )
        .await
    }
}
