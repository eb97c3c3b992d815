use std::collections::BTreeMap;

use axum::{
    body::{boxed, Full},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::app::errors::DefaultApiError;

pub const ERROR_LABEL: &str = "Failed to generate QR code";
pub const CACHE_CONTROL: &str = "public, max-age=86400";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_base64_encoded: bool,
}

fn cors_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            "GET, OPTIONS".to_string(),
        ),
    ])
}

impl FunctionResponse {
    pub fn preflight() -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers: cors_headers(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn png(bytes: &[u8]) -> Self {
        let mut headers = cors_headers();
        headers.insert(
            "Content-Type".to_string(),
            mime::IMAGE_PNG.as_ref().to_string(),
        );
        headers.insert("Cache-Control".to_string(), CACHE_CONTROL.to_string());

        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: base64::encode(bytes),
            is_base64_encoded: true,
        }
    }

    pub fn failure(message: &str) -> Self {
        let headers = BTreeMap::from([
            (
                "Content-Type".to_string(),
                mime::APPLICATION_JSON.as_ref().to_string(),
            ),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ]);

        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            headers,
            body: json!({
                "error": ERROR_LABEL,
                "message": message,
            })
            .to_string(),
            is_base64_encoded: false,
        }
    }
}

impl IntoResponse for FunctionResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match self.is_base64_encoded {
            true => match base64::decode(&self.body) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::error!(%e, "failed to decode response body");
                    return DefaultApiError::InternalServerError.value().into_response();
                }
            },
            false => self.body.into_bytes(),
        };

        let mut response = Response::new(boxed(Full::from(body)));
        *response.status_mut() = status;

        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!(%name, %value, "skipping invalid response header"),
            }
        }

        response
    }
}
