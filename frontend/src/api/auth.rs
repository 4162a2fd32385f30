use reqwest::Method;

use super::client::{to_json_value, ApiClient, RequestOptions};
use super::types::{AuthResponse, LoginRequest, RegisterRequest, UserProfile, UserStats};
use super::{endpoints, ApiError};
use crate::session::Session;

impl ApiClient {
    /// Authenticate and persist the returned session.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        let auth: AuthResponse = self
            .expect_json(
                Method::POST,
                endpoints::auth::LOGIN,
                RequestOptions::json(to_json_value(&request)?),
            )
            .await?;
        let session = Session {
            token: auth.token,
            username: auth.username,
            role: auth.role,
        };
        self.store().save_session(&session);
        Ok(session)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
        self.expect_ack(
            Method::POST,
            endpoints::auth::REGISTER,
            RequestOptions::json(to_json_value(&request)?),
        )
        .await
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.get_json(endpoints::auth::ME, RequestOptions::new())
            .await
    }

    pub async fn my_stats(&self) -> Result<UserStats, ApiError> {
        self.get_json(endpoints::auth::ME_STATS, RequestOptions::new())
            .await
    }
}
