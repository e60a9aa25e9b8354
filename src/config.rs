//! Settings-file loader for the Delphi client.
//!
//! Settings live in a JSON file at a known relative path (by default
//! `appsettings.json`) with a nested `AzureOpenAI` section:
//!
//! ```json
//! {
//!   "AzureOpenAI": {
//!     "Endpoint": "https://my-resource.openai.azure.com/",
//!     "ApiKey": "...",
//!     "DeploymentName": "gpt-4o"
//!   }
//! }
//! ```
//!
//! Loading is a one-shot startup check: a missing file, malformed JSON, an
//! empty field, or an endpoint that does not parse as a URL all fail with
//! [`Error::Config`] before the chat loop starts. There is no reload.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default relative path of the settings file.
pub const DEFAULT_SETTINGS_PATH: &str = "appsettings.json";

/// Top-level shape of the settings file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// The `AzureOpenAI` section.
    #[serde(rename = "AzureOpenAI", default)]
    pub azure_openai: AzureOpenAISettings,
}

/// Connection settings for one Azure OpenAI deployment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AzureOpenAISettings {
    /// Base URL of the Azure OpenAI resource.
    #[serde(rename = "Endpoint", default)]
    pub endpoint: String,

    /// Static API credential sent in the `api-key` header.
    #[serde(rename = "ApiKey", default)]
    pub api_key: String,

    /// Name of the hosted model deployment that serves requests.
    #[serde(rename = "DeploymentName", default)]
    pub deployment_name: String,
}

impl AzureOpenAISettings {
    /// Checks that all required fields are present and the endpoint is a
    /// well-formed URL.
    ///
    /// The returned [`Error::Config`] carries the display names of every
    /// missing field so callers can print a remediation message.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.endpoint.trim().is_empty() {
            missing.push("Endpoint URL".to_string());
        }
        if self.api_key.trim().is_empty() {
            missing.push("API Key".to_string());
        }
        if self.deployment_name.trim().is_empty() {
            missing.push("Deployment Name".to_string());
        }
        if !missing.is_empty() {
            return Err(Error::config("required settings are empty", missing));
        }
        if let Err(err) = Url::parse(&self.endpoint) {
            return Err(Error::config(
                format!("Endpoint is not a valid URL: {err}"),
                vec!["Endpoint URL".to_string()],
            ));
        }
        Ok(())
    }
}

/// Loads and validates settings from the default path.
pub fn load() -> Result<AzureOpenAISettings> {
    load_from(DEFAULT_SETTINGS_PATH)
}

/// Loads and validates settings from the given path.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<AzureOpenAISettings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::config(
            format!("could not read {}: {err}", path.display()),
            required_field_names(),
        )
    })?;
    parse(&contents)
}

/// Parses and validates settings from a JSON string.
pub fn parse(contents: &str) -> Result<AzureOpenAISettings> {
    let settings: Settings = serde_json::from_str(contents).map_err(|err| {
        Error::config(
            format!("settings file is not valid JSON: {err}"),
            required_field_names(),
        )
    })?;
    let azure = settings.azure_openai;
    azure.validate()?;
    Ok(azure)
}

fn required_field_names() -> Vec<String> {
    vec![
        "Endpoint URL".to_string(),
        "API Key".to_string(),
        "Deployment Name".to_string(),
    ]
}
