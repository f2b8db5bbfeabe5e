use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::constants::{REQUEST_TIMEOUT, USER_AGENT};

/// HTTP client for the National Weather Service API.
///
/// Every call is a single attempt with a fixed timeout. All failure causes
/// (timeout, non-2xx status, transport error, malformed body) collapse into
/// `None`; the cause is logged but not surfaced to callers.
#[derive(Clone)]
pub struct NwsClient {
    client: Client,
}

impl NwsClient {
    pub fn new() -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    /// Makes one HTTP GET request and deserializes the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Request to {} returned status {}", url, status);
            return None;
        }

        match response.json::<T>().await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("Failed to decode response from {}: {}", url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        value: String,
    }

    #[tokio::test]
    async fn get_json_sends_fixed_headers_and_parses_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data"))
            .and(header("accept", "application/geo+json"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": "ok"
            })))
            .mount(&mock_server)
            .await;

        let client = NwsClient::new().unwrap();
        let url = format!("{}/data", mock_server.uri());
        let result: Option<Payload> = client.get_json(&url).await;

        assert_eq!(result.unwrap().value, "ok");
    }

    #[tokio::test]
    async fn get_json_returns_none_on_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = NwsClient::new().unwrap();
        let url = format!("{}/missing", mock_server.uri());
        let result: Option<Payload> = client.get_json(&url).await;

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn get_json_returns_none_on_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = NwsClient::new().unwrap();
        let url = format!("{}/garbled", mock_server.uri());
        let result: Option<Payload> = client.get_json(&url).await;

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn get_json_returns_none_on_connection_failure() {
        let client = NwsClient::new().unwrap();
        // Nothing listens on this port.
        let result: Option<Payload> = client.get_json("http://127.0.0.1:9/none").await;

        assert!(result.is_none());
    }
}
