use super::{ApiRequest, ApiResponse, GatewayError, Method, Transport};
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

/// Browser transport built on the Fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, GatewayError> {
        let url = request.full_url();
        let builder = builder(request.method, &url)
            .header("Authorization", &request.authorization)
            .header("Accept", "application/json");

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| GatewayError::Transport(format!("Failed to serialize request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| GatewayError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
