use super::client::{ApiClient, RequestOptions};
use super::types::{HeritageItem, NewsArticle};
use super::{endpoints, ApiError};

impl ApiClient {
    pub async fn list_news(&self) -> Result<Vec<NewsArticle>, ApiError> {
        self.get_json(endpoints::news::LIST, RequestOptions::new())
            .await
    }

    pub async fn list_heritage(&self) -> Result<Vec<HeritageItem>, ApiError> {
        self.get_json(endpoints::heritage::LIST, RequestOptions::new())
            .await
    }
}
