//! Runtime type definitions for request/response handling

use serde::{Deserialize, Serialize};

use crate::breed::Breed;

/// Breed inquiry request body
///
/// Every field is optional; `null`, an empty string and an empty list all
/// mean "no filtering on that dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedInquiryRequest {
    /// Exact breed identifiers
    #[serde(default)]
    pub ids: Option<Vec<String>>,
    /// Substring matched against the Thai and English names
    #[serde(default)]
    pub keyword: Option<String>,
    /// Exact short names
    #[serde(default)]
    pub shortnames: Option<Vec<String>>,
}

/// Outcome marker carried by every inquiry response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Breed inquiry response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryResponse {
    pub status: ResponseStatus,
    /// Matching breeds on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Breed>>,
    /// Human-readable error message on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InquiryResponse {
    /// Create a successful response with results
    pub fn success(data: Vec<Breed>) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Liveness payload for `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

impl LivenessResponse {
    pub fn running() -> Self {
        Self {
            message: "running".to_string(),
        }
    }
}

/// Readiness payload for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: String,
}

impl ReadinessResponse {
    pub fn up() -> Self {
        Self {
            status: "ok".to_string(),
            database: "up".to_string(),
        }
    }

    pub fn down() -> Self {
        Self {
            status: "error".to_string(),
            database: "down".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_all_fields_optional() {
        let request: BreedInquiryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, BreedInquiryRequest::default());

        let request: BreedInquiryRequest =
            serde_json::from_str(r#"{"ids": null, "keyword": null}"#).unwrap();
        assert!(request.ids.is_none());
        assert!(request.keyword.is_none());
    }

    #[test]
    fn test_request_rejects_wrong_shape() {
        let result = serde_json::from_str::<BreedInquiryRequest>(r#"{"ids": "B1"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<BreedInquiryRequest>(r#"{"keyword": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let request: BreedInquiryRequest =
            serde_json::from_str(r#"{"keyword": "Golden", "page": 2}"#).unwrap();
        assert_eq!(request.keyword.as_deref(), Some("Golden"));
    }

    #[test]
    fn test_inquiry_response_success() {
        let response = InquiryResponse::success(vec![Breed::new("B1", "Beagle", "บีเกิ้ล", "BG")]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"][0]["id"], "B1");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_inquiry_response_error() {
        let response = InquiryResponse::error("Breed not found");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"status": "error", "message": "Breed not found"}));
    }

    #[test]
    fn test_liveness_response() {
        let value = serde_json::to_value(LivenessResponse::running()).unwrap();
        assert_eq!(value, json!({"message": "running"}));
    }
}
