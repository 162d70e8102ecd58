pub mod search;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::trie::Trie;

/// Application context passed to all handlers. Owns the vocabulary trie,
/// which is built once at startup and read-only afterwards.
pub struct Ctx {
    pub trie: Trie,
}

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResp<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResp<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn json<T: Serialize>(data: T) -> ApiResp<T> {
    ApiResp {
        data: Some(data),
        message: None,
    }
}

/// API error type.
#[derive(Debug)]
pub struct ApiErr {
    pub message: String,
    pub status: StatusCode,
}

impl ApiErr {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let json = Json(ApiResp::<()> {
            data: None,
            message: Some(self.message),
        });
        (self.status, json).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiErr>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_resp_omits_message_when_none() {
        let resp = json(vec!["car".to_string()]);
        let out = serde_json::to_string(&resp).unwrap();
        assert_eq!(out, r#"{"data":["car"]}"#);
    }

    #[test]
    fn api_error_carries_message() {
        let resp = ApiResp::<()> {
            data: None,
            message: Some("missing `q` query param".to_string()),
        };
        let out = serde_json::to_string(&resp).unwrap();
        assert_eq!(out, r#"{"message":"missing `q` query param","data":null}"#);
    }
}
