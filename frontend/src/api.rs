use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{PredictionResponse, RecommendRequest, RecommendationResponse};
use std::fmt;

/// Base address of the prediction service. Overridable at build time:
/// `PEST_API_BASE=https://pest-api.example.com trunk build`.
pub fn api_base() -> &'static str {
    option_env!("PEST_API_BASE").unwrap_or("http://127.0.0.1:8000")
}

/// Failure of one remote call, carrying the user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-success HTTP status; `message` is the service's `detail`
    /// field or the operation's fallback text.
    Http { status: u16, message: String },
    Network(String),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { message, .. } => write!(f, "{}", message),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

/// Pulls the `detail` field out of an error body, falling back to the
/// operation's generic message when the body is not JSON or has no
/// such field.
fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Sends the image to the classifier as multipart form data.
pub async fn predict(file: &GlooFile) -> Result<PredictionResponse, ApiError> {
    let form_data = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
    form_data
        .append_with_blob("file", file.as_ref())
        .map_err(|_| ApiError::Network("could not attach file".to_string()))?;

    let response = Request::post(&format!("{}/predict", api_base()))
        .body(form_data)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status: response.status(),
            message: error_detail(&body, "Prediction failed"),
        });
    }

    response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetches treatment and prevention guidance for an identified pest.
pub async fn recommend(pest_name: &str) -> Result<RecommendationResponse, ApiError> {
    let request = RecommendRequest {
        pest_name: pest_name.to_string(),
    };

    let response = Request::post(&format!("{}/recommend", api_base()))
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status: response.status(),
            message: error_detail(&body, "Recommendation failed"),
        });
    }

    response
        .json::<RecommendationResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_extracts_the_detail_field() {
        assert_eq!(
            error_detail(r#"{"detail": "model unavailable"}"#, "Prediction failed"),
            "model unavailable"
        );
    }

    #[test]
    fn error_detail_falls_back_on_unparseable_bodies() {
        assert_eq!(
            error_detail("<html>502 Bad Gateway</html>", "Prediction failed"),
            "Prediction failed"
        );
        assert_eq!(
            error_detail("", "Recommendation failed"),
            "Recommendation failed"
        );
    }

    #[test]
    fn error_detail_falls_back_when_detail_is_absent_or_not_a_string() {
        assert_eq!(
            error_detail(r#"{"error": "nope"}"#, "Prediction failed"),
            "Prediction failed"
        );
        assert_eq!(
            error_detail(r#"{"detail": 42}"#, "Prediction failed"),
            "Prediction failed"
        );
    }

    #[test]
    fn http_errors_display_the_detail_message_only() {
        let err = ApiError::Http {
            status: 500,
            message: "model unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "model unavailable");
    }
}
