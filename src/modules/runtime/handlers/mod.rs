//! HTTP request handlers for the breed inquiry server

mod health;
mod inquiry;

pub use health::HealthHandler;
pub use inquiry::InquiryHandler;

use axum::{http::StatusCode, Json};
use breed_inquiry_core::BreedInquiryError;
use breed_inquiry_types::runtime::InquiryResponse;

/// Render an error as its status code and sanitized JSON envelope
pub(crate) fn error_response(err: &BreedInquiryError) -> (StatusCode, Json<InquiryResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(InquiryResponse::error(err.sanitized_message())))
}
