//! Upstream Dog CEO client
//!
//! One outbound GET against a fixed endpoint. No retries; any transport
//! error, non-2xx status, or non-success payload is a single upstream
//! failure.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const DOG_API_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// Bound on the upstream call so a stalled provider cannot hold a
/// request open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream error type
#[derive(Debug, Error)]
pub enum DogApiError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status '{status}'")]
    Status { status: String },
}

#[derive(Debug, Deserialize)]
struct RandomImageResponse {
    status: String,
    message: String,
}

/// Client for the public random dog image API
#[derive(Debug, Clone)]
pub struct DogApiClient {
    http: reqwest::Client,
}

impl DogApiClient {
    pub fn new() -> Result<Self, DogApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Fetch one random dog image URL.
    pub async fn random_image(&self) -> Result<String, DogApiError> {
        let response = self
            .http
            .get(DOG_API_URL)
            .send()
            .await?
            .error_for_status()?
            .json::<RandomImageResponse>()
            .await?;

        image_url(response)
    }
}

fn image_url(response: RandomImageResponse) -> Result<String, DogApiError> {
    if response.status != "success" {
        return Err(DogApiError::Status {
            status: response.status,
        });
    }
    Ok(response.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_payload_yields_url() {
        let payload = r#"{
            "message": "https://images.dog.ceo/breeds/husky/n02110185_1469.jpg",
            "status": "success"
        }"#;
        let response: RandomImageResponse = serde_json::from_str(payload).expect("decode");

        let url = image_url(response).expect("success payload");
        assert_eq!(url, "https://images.dog.ceo/breeds/husky/n02110185_1469.jpg");
    }

    #[test]
    fn non_success_status_is_an_error() {
        let payload = r#"{"message": "Breeds list unavailable", "status": "error"}"#;
        let response: RandomImageResponse = serde_json::from_str(payload).expect("decode");

        let err = image_url(response).unwrap_err();
        assert!(matches!(err, DogApiError::Status { status } if status == "error"));
    }

    #[test]
    fn unexpected_fields_are_ignored() {
        let payload = r#"{"message": "https://images.dog.ceo/x.jpg", "status": "success", "code": 200}"#;
        let response: RandomImageResponse = serde_json::from_str(payload).expect("decode");
        assert_eq!(response.status, "success");
    }
}
