//! Server side of itinerary generation: prompt rendering plus a single call
//! to Ollama's `/api/generate` endpoint.

use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::BackendConfig,
    error::GatewayError,
    gateway::post_json,
    models::TripRequest,
    prompt::build_prompt,
};

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OllamaRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: OllamaOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OllamaOptions {
    pub num_predict: u32,
}

/// The part of Ollama's reply we read.
#[derive(Debug, Clone, Deserialize)]
struct OllamaReply {
    #[serde(default)]
    response: String,
}

/// Non-streaming client for Ollama.
pub struct OllamaClient {
    http: Client,
    url: String,
    num_predict: u32,
}

impl OllamaClient {
    pub fn new(config: &BackendConfig) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            url: config.ollama_url.clone(),
            num_predict: config.num_predict,
        })
    }

    /// Runs `prompt` through `model` and returns the trimmed completion.
    ///
    /// A reply without a `response` field yields an empty string.
    pub async fn generate(&self, prompt: &str, model: &str) -> Result<String, GatewayError> {
        let body = OllamaRequest {
            model,
            prompt,
            stream: false,
            options: OllamaOptions {
                num_predict: self.num_predict,
            },
        };
        debug!("Calling Ollama at {} with model {model}", self.url);
        let reply: OllamaReply = post_json(&self.http, &self.url, &body).await?;
        Ok(reply.response.trim().to_string())
    }

    /// Builds the prompt for `trip` and generates its itinerary text.
    pub async fn generate_itinerary(&self, trip: &TripRequest) -> Result<String, GatewayError> {
        let prompt = build_prompt(trip);
        self.generate(&prompt, &trip.model).await
    }
}
