use super::client::{ApiClient, RequestOptions};
use super::types::ScenicSpot;
use super::{endpoints, ApiError};

impl ApiClient {
    pub async fn list_spots(&self) -> Result<Vec<ScenicSpot>, ApiError> {
        self.get_json(endpoints::spots::LIST, RequestOptions::new())
            .await
    }

    pub async fn spot_detail(&self, id: i64) -> Result<ScenicSpot, ApiError> {
        self.get_json(&endpoints::spots::detail(id), RequestOptions::new())
            .await
    }

    pub async fn search_spots(&self, keyword: &str) -> Result<Vec<ScenicSpot>, ApiError> {
        self.get_json(
            endpoints::spots::SEARCH,
            RequestOptions::new().with_query("keyword", keyword),
        )
        .await
    }

    /// Personalized ordering computed server-side; anonymous callers get the
    /// popularity baseline.
    pub async fn recommended_spots(&self) -> Result<Vec<ScenicSpot>, ApiError> {
        self.get_json(endpoints::spots::RECOMMENDATIONS, RequestOptions::new())
            .await
    }
}
