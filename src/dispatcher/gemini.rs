//! Generative Language API backend.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use log::{debug, info, warn};
use url::Url;

use super::prompt::{domain_prompt, keyword_prompt};
use super::response::{parse_domain_analysis, parse_keyword_analysis};
use super::wire::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use super::AnalysisBackend;
use crate::config::{Config, API_KEY_HEADER, API_VERSION};
use crate::error_handling::{AnalysisError, InitializationError};
use crate::initialization::init_client;
use crate::models::{DomainAnalysis, KeywordAnalysis, Region};
use crate::schema::{domain_analysis_schema, keyword_analysis_schema, Schema};

/// Builds `{base}/v1beta/models/{model}:generateContent`.
pub fn generate_content_url(api_base: &str, model: &str) -> Result<Url, url::ParseError> {
    let mut base = api_base.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)?.join(&format!("{API_VERSION}/models/{model}:generateContent"))
}

/// Client for schema-constrained `generateContent` calls.
#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<reqwest::Client>,
    endpoint: Url,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Creates a client from the library configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the API base is
    /// not a valid URL. A missing API key is not an error here; requests fail
    /// with [`AnalysisError::MissingApiKey`] instead.
    pub async fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config).await?;
        let endpoint = generate_content_url(&config.api_base, &config.model)
            .map_err(|e| InitializationError::InvalidApiBase(config.api_base.clone(), e))?;
        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one structured request and returns the answer text.
    async fn generate(&self, prompt: String, schema: &Schema) -> Result<String, AnalysisError> {
        let api_key = self.api_key.as_deref().ok_or(AnalysisError::MissingApiKey)?;
        let request = GenerateContentRequest::structured(prompt, schema.to_json());

        let started = Instant::now();
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|envelope| match envelope.error.status {
                    Some(code) => format!("{} ({code})", envelope.error.message),
                    None => envelope.error.message,
                })
                .unwrap_or_else(|_| body.trim().to_string());
            warn!("Generative backend returned {}: {}", status, message);
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        debug!(
            "Generative backend answered in {:.2}s",
            started.elapsed().as_secs_f64()
        );

        match body.answer_text() {
            Some(text) => Ok(text),
            None => match body.block_reason() {
                Some(reason) => Err(AnalysisError::Blocked(reason)),
                None => Err(AnalysisError::EmptyResponse),
            },
        }
    }
}

fn require_input<'a>(value: &'a str, what: &'static str) -> Result<&'a str, AnalysisError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AnalysisError::EmptyInput(what))
    } else {
        Ok(trimmed)
    }
}

#[async_trait]
impl AnalysisBackend for GeminiClient {
    async fn analyze_keyword(
        &self,
        keyword: &str,
        region: Region,
    ) -> Result<KeywordAnalysis, AnalysisError> {
        let keyword = require_input(keyword, "Keyword")?;
        info!("Analyzing keyword {:?} for {} with {}", keyword, region, self.model);
        let text = self
            .generate(keyword_prompt(keyword, region), keyword_analysis_schema())
            .await?;
        parse_keyword_analysis(&text)
    }

    async fn analyze_domain(
        &self,
        domain: &str,
        region: Region,
    ) -> Result<DomainAnalysis, AnalysisError> {
        let domain = require_input(domain, "Domain")?;
        info!("Analyzing domain {:?} for {} with {}", domain, region, self.model);
        let text = self
            .generate(domain_prompt(domain, region), domain_analysis_schema())
            .await?;
        parse_domain_analysis(&text)
    }
}
