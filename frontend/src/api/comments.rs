use reqwest::multipart::Form;
use reqwest::Method;

use super::client::{to_json_value, ApiClient, RequestOptions};
use super::types::{CreateComment, SpotComment, UploadedImage};
use super::{endpoints, ApiError};

impl ApiClient {
    pub async fn comments_for_spot(&self, spot_id: i64) -> Result<Vec<SpotComment>, ApiError> {
        self.get_json(&endpoints::comments::for_spot(spot_id), RequestOptions::new())
            .await
    }

    pub async fn create_comment(&self, request: CreateComment) -> Result<(), ApiError> {
        self.expect_ack(
            Method::POST,
            endpoints::comments::CREATE,
            RequestOptions::json(to_json_value(&request)?),
        )
        .await
    }

    /// The form carries the image part; the transport picks the content
    /// type (with boundary) itself.
    pub async fn upload_comment_image(&self, form: Form) -> Result<UploadedImage, ApiError> {
        self.expect_json(
            Method::POST,
            endpoints::comments::UPLOAD_IMAGE,
            RequestOptions::multipart(form),
        )
        .await
    }
}
