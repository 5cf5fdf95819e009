//! Client for the Generative Language `generateContent` API.
//!
//! All traffic goes through the [`HttpClient`] seam. Production code uses
//! [`ReqwestHttpClient`](crate::adapters::ReqwestHttpClient); tests use
//! [`MockHttpClient`](crate::adapters::MockHttpClient) or a wiremock server.

pub mod chat;
pub mod error;
pub mod script;
pub mod wire;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::adapters::ReqwestHttpClient;
use crate::error::ConfigError;
use crate::startup::AppConfig;
use crate::traits::{Headers, HttpClient};

pub use chat::ChatSession;
pub use error::{GenAiError, GenAiResult};
pub use script::{
    build_script_prompt, generate_loader_script, script_error_placeholder, strip_code_fences,
};
pub use wire::{Content, GenerateContentRequest, GenerateContentResponse, Part};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct GenAiClient {
    http: Arc<dyn HttpClient>,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GenAiClient {
    /// Build a client over an existing transport.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] when the config has no key.
    pub fn new(http: Arc<dyn HttpClient>, config: &AppConfig) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Build a client backed by reqwest, honoring the configured timeout.
    pub fn from_config(config: &AppConfig) -> GenAiResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout())?;
        Ok(Self::new(Arc::new(http), config)?)
    }

    /// Default model for requests made through this client.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(API_KEY_HEADER.to_string(), self.api_key.clone());
        headers
    }

    /// Send one request and return the first candidate's text.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenAiResult<String> {
        let url = self.endpoint(model);
        let body = serde_json::to_string(request)?;
        debug!(model, turns = request.contents.len(), "generateContent request");

        let response = self.http.post(&url, &body, &self.headers()).await?;

        if !response.is_success() {
            let message = response
                .json::<wire::ApiErrorEnvelope>()
                .map(|envelope| envelope.error.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| response.text_lossy());
            warn!(status = response.status, %message, "generateContent failed");
            return Err(GenAiError::Status {
                status: response.status,
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json()?;
        parsed.text().ok_or(GenAiError::EmptyResponse)
    }

    /// Start a multi-turn conversation on this client's default model.
    pub fn start_chat(&self, system_instruction: impl Into<String>) -> ChatSession {
        ChatSession::new(self.clone(), self.model.clone(), system_instruction)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use serde_json::json;

    pub fn config() -> AppConfig {
        AppConfig::default()
            .with_api_key("test-key")
            .with_base_url("https://ai.test")
            .with_model("test-model")
    }

    pub fn client_with(mock: &MockHttpClient) -> GenAiClient {
        GenAiClient::new(Arc::new(mock.clone()), &config()).unwrap()
    }

    pub fn reply(text: &str) -> MockResponse {
        MockResponse::Success(Response::json_body(
            200,
            &json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]}),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;
    use serde_json::json;

    #[test]
    fn test_new_requires_api_key() {
        let mock = MockHttpClient::new();
        let err = GenAiClient::new(Arc::new(mock), &AppConfig::default()).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn test_endpoint() {
        let client = client_with(&MockHttpClient::new());
        assert_eq!(
            client.endpoint("gemini-3-flash-preview"),
            "https://ai.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_content_sends_key_and_body() {
        let mock = MockHttpClient::new();
        mock.set_default_response(reply("hello"));
        let client = client_with(&mock);

        let request = GenerateContentRequest::prompt("hi").with_system_instruction("be nice");
        let text = client.generate_content("test-model", &request).await.unwrap();
        assert_eq!(text, "hello");

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, client.endpoint("test-model"));
        assert_eq!(requests[0].headers.get(API_KEY_HEADER), Some(&"test-key".to_string()));
        let body = requests[0].json();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be nice");
    }

    #[tokio::test]
    async fn test_error_status_uses_api_message() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::json_body(
            400,
            &json!({"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}),
        )));
        let client = client_with(&mock);

        let err = client
            .generate_content("test-model", &GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        match err {
            GenAiError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_falls_back_to_body() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            502,
            Bytes::from("bad gateway"),
        )));
        let client = client_with(&mock);

        let err = client
            .generate_content("test-model", &GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::Status { status: 502, ref message } if message == "bad gateway"));
    }

    #[tokio::test]
    async fn test_empty_candidates() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::json_body(
            200,
            &json!({"candidates": []}),
        )));
        let client = client_with(&mock);

        let err = client
            .generate_content("test-model", &GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(200, Bytes::from("<html>"))));
        let client = client_with(&mock);

        let err = client
            .generate_content("test-model", &GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_transport_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let client = client_with(&mock);

        let err = client
            .generate_content("test-model", &GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::Transport(HttpError::ConnectionFailed(_))));
    }
}
