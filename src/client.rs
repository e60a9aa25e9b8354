//! Client for the Azure OpenAI chat-completions API.
//!
//! The client is constructed once at startup from validated settings and
//! reused for every call during the process lifetime. Each [`complete`]
//! invocation makes exactly one outbound request: no caching, no retry,
//! and no timeout override beyond the transport's defaults.
//!
//! [`complete`]: AzureOpenAI::complete

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;

use crate::client_logger::ClientLogger;
use crate::config::AzureOpenAISettings;
use crate::error::{Error, Result};
use crate::observability;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// API version pinned for every request.
const API_VERSION: &str = "2024-02-01";

/// Client for one Azure OpenAI deployment.
#[derive(Clone)]
pub struct AzureOpenAI {
    client: ReqwestClient,
    headers: HeaderMap,
    url: String,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl AzureOpenAI {
    /// Create a new client from validated settings.
    ///
    /// The HTTP client and header map are built exactly once here; failure
    /// to construct either is a fatal [`Error::ClientInit`].
    pub fn new(settings: &AzureOpenAISettings) -> Result<Self> {
        settings.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let mut api_key = HeaderValue::from_str(&settings.api_key).map_err(|err| {
            Error::client_init(format!("API key is not a valid header value: {err}"))
        })?;
        api_key.set_sensitive(true);
        headers.insert("api-key", api_key);

        let client = ReqwestClient::builder().build().map_err(|err| {
            Error::client_init(format!("failed to build HTTP client: {err}"))
        })?;

        Ok(Self {
            client,
            headers,
            url: request_url(&settings.endpoint, &settings.deployment_name),
            logger: None,
        })
    }

    /// Attach a logger that observes every prompt and completion.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns the fully composed request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Submit a prompt and return the generated text.
    ///
    /// Exactly one outbound call per invocation. Any transport or
    /// service-side failure maps to a recoverable error variant and is
    /// never retried here.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        if let Some(logger) = &self.logger {
            logger.log_prompt(prompt);
        }
        observability::COMPLETION_REQUESTS.click();

        let params = ChatCompletionRequest::from_prompt(prompt);
        let response = self
            .client
            .post(&self.url)
            .headers(self.headers.clone())
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    Error::connection(format!("connection error: {e}"), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("request failed: {e}"), Some(Box::new(e)))
                }
            })
            .inspect_err(|err| self.log_error(err))?;

        if !response.status().is_success() {
            let err = Self::process_error_response(response).await;
            self.log_error(&err);
            return Err(err);
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                Error::serialization(format!("failed to parse response: {e}"), Some(Box::new(e)))
            })
            .and_then(|body| {
                body.text().map(String::from).ok_or_else(|| {
                    Error::serialization("response contained no choices".to_string(), None)
                })
            })
            .inspect_err(|err| self.log_error(err))?;

        if let Some(logger) = &self.logger {
            logger.log_completion(&completion);
        }
        Ok(completion)
    }

    fn log_error(&self, err: &Error) {
        observability::COMPLETION_ERRORS.click();
        if let Some(logger) = &self.logger {
            logger.log_error(err);
        }
    }

    /// Process API response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();

        let request_id = response
            .headers()
            .get("apim-request-id")
            .and_then(|val| val.to_str().ok())
            .map(String::from);

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        #[derive(Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            code: Option<String>,
            message: Option<String>,
            param: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("failed to read error response: {e}"),
                    Some(Box::new(e)),
                );
            }
        };

        let parsed_error = serde_json::from_str::<ErrorResponse>(&error_body).ok();
        let error_code = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.code.clone());
        let error_message = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| error_body.clone());
        let error_param = parsed_error
            .as_ref()
            .and_then(|e| e.error.as_ref())
            .and_then(|e| e.param.clone());

        match status_code {
            400 => Error::bad_request(error_message, error_param),
            401 => Error::authentication(error_message),
            403 => Error::permission(error_message),
            404 => Error::not_found(error_message),
            408 => Error::timeout(error_message),
            429 => Error::rate_limit(error_message, retry_after),
            500 => Error::internal_server(error_message, request_id),
            502..=504 => Error::service_unavailable(error_message, retry_after),
            _ => Error::api(status_code, error_code, error_message, request_id),
        }
    }
}

impl std::fmt::Debug for AzureOpenAI {
    // api-key header stays out of debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAI")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Compose the chat-completions URL for an endpoint and deployment.
fn request_url(endpoint: &str, deployment: &str) -> String {
    let base = endpoint.trim_end_matches('/');
    format!("{base}/openai/deployments/{deployment}/chat/completions?api-version={API_VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AzureOpenAISettings {
        AzureOpenAISettings {
            endpoint: "https://example.openai.azure.com/".to_string(),
            api_key: "test-key".to_string(),
            deployment_name: "gpt-4o".to_string(),
        }
    }

    #[test]
    fn client_creation_composes_url() {
        let client = AzureOpenAI::new(&settings()).unwrap();
        assert_eq!(
            client.url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-01"
        );
    }

    #[test]
    fn url_without_trailing_slash() {
        assert_eq!(
            request_url("https://example.openai.azure.com", "gpt-4o"),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-01"
        );
    }

    #[test]
    fn client_creation_rejects_empty_settings() {
        let err = AzureOpenAI::new(&AzureOpenAISettings::default()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn client_creation_rejects_bad_api_key_bytes() {
        let mut settings = settings();
        settings.api_key = "bad\nkey".to_string();
        let err = AzureOpenAI::new(&settings).unwrap_err();
        assert!(matches!(err, Error::ClientInit { .. }));
    }

    #[test]
    fn debug_output_hides_credential() {
        let client = AzureOpenAI::new(&settings()).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-key"));
    }
}
