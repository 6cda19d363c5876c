//! Access to the remote REST gateway
//!
//! - `error.rs`: failure taxonomy of a gateway call
//! - `http.rs`: browser transport over `gloo-net`
//! - `client.rs`: authenticated JSON calls and the per-resource client

pub mod client;
pub mod error;
pub mod http;
#[cfg(test)]
pub mod testing;

pub use client::{Gateway, ResourceClient};
pub use error::GatewayError;
pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully built gateway request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Base URL plus path, without query string
    pub url: String,
    pub query: Vec<(String, String)>,
    /// `Authorization` header value
    pub authorization: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// URL with the encoded query string
    pub fn full_url(&self) -> String {
        crate::shared::api_utils::with_query(&self.url, &self.query)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and unparsed body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over the wire. Only network-level failures are errors;
/// any status code is returned as a response.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, GatewayError>;
}

/// Source of the bearer token attached to every request
pub trait CredentialProvider {
    fn access_token(&self) -> Option<String>;
}
