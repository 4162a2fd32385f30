mod admin;
mod auth;
mod bookings;
pub mod client;
mod comments;
mod content;
pub mod endpoints;
mod error;
mod spots;
pub mod types;

pub use client::{ApiClient, RequestBody, RequestOptions};
pub use error::ApiError;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
