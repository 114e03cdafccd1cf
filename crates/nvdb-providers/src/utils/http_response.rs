//! HTTP Response Utilities
//!
//! Status handling for embedding API responses.

use nvdb_domain::error::{Error, Result};
use reqwest::Response;

/// Format error message for embedding provider
fn embedding_error(provider: &str, context: &str, details: &str) -> Error {
    Error::embedding(format!("{provider} {context}: {details}"))
}

/// Pull the human-readable message out of a Google-style error body
///
/// `{"error": {"code": 400, "message": "...", "status": "..."}}`; any
/// other body is returned unchanged.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body
    ///
    /// Every failure becomes an [`Error::Embedding`] naming the provider.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let detail = error_detail(&body);
            let code = status.as_u16();

            return Err(match code {
                400 => embedding_error(provider_name, "rejected request", &detail),
                401 | 403 => embedding_error(provider_name, "authentication failed", &detail),
                429 => embedding_error(provider_name, "rate limit exceeded", &detail),
                500..=599 => {
                    embedding_error(provider_name, &format!("server error ({code})"), &detail)
                }
                _ => embedding_error(provider_name, &format!("request failed ({code})"), &detail),
            });
        }

        response
            .json()
            .await
            .map_err(|e| embedding_error(provider_name, "response parse failed", &e.to_string()))
    }
}
