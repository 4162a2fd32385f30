use reqwest::Method;

use super::client::{to_json_value, ApiClient, RequestOptions};
use super::types::{Booking, CreateBooking};
use super::{endpoints, ApiError};

impl ApiClient {
    pub async fn create_booking(&self, request: CreateBooking) -> Result<(), ApiError> {
        self.expect_ack(
            Method::POST,
            endpoints::bookings::CREATE,
            RequestOptions::json(to_json_value(&request)?),
        )
        .await
    }

    pub async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json(endpoints::bookings::MY, RequestOptions::new())
            .await
    }

    pub async fn cancel_booking(&self, id: i64) -> Result<(), ApiError> {
        self.expect_ack(
            Method::POST,
            &endpoints::bookings::cancel(id),
            RequestOptions::new(),
        )
        .await
    }
}
