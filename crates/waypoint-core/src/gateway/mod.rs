//! Client side of the itinerary backend.
//!
//! [`ModelGateway::request`] reports exactly what happened on the wire as a
//! [`GenerationOutcome`]. [`ModelGateway::generate`] is the call the rest of
//! the application uses: it never fails, substituting
//! [`fallback_itinerary`] whenever the backend does not deliver.

use log::{debug, warn};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{config::GatewayConfig, error::GatewayError, models::TripRequest};

mod fallback;

pub use fallback::fallback_itinerary;

/// Path of the generation route on the backend.
pub const GENERATE_ITINERARY_PATH: &str = "/generate_itinerary";

/// Body returned by `POST /generate_itinerary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryReply {
    pub itinerary: String,
}

/// Result of one itinerary request.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// Backend answered with itinerary text
    Success(String),
    /// Backend unreachable, timed out, or answered with a non-2xx status
    TransportFailure(GatewayError),
    /// Backend answered 2xx with a body that is not an itinerary reply
    MalformedResponse(GatewayError),
}

/// HTTP client for the itinerary backend.
pub struct ModelGateway {
    http: Client,
    endpoint: String,
}

impl ModelGateway {
    /// Creates a gateway for the backend described by `config`.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        let endpoint = format!(
            "{}{GENERATE_ITINERARY_PATH}",
            config.backend_url.trim_end_matches('/')
        );
        Ok(Self { http, endpoint })
    }

    /// URL the gateway posts trips to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `trip` to the backend once and classifies the result.
    pub async fn request(&self, trip: &TripRequest) -> GenerationOutcome {
        debug!("Requesting itinerary from {}", self.endpoint);
        match post_json::<_, ItineraryReply>(&self.http, &self.endpoint, trip).await {
            Ok(reply) => GenerationOutcome::Success(reply.itinerary),
            Err(e) if e.is_transport() => GenerationOutcome::TransportFailure(e),
            Err(e) => GenerationOutcome::MalformedResponse(e),
        }
    }

    /// Returns the backend's itinerary, or a synthetic one if the backend
    /// fails in any way.
    pub async fn generate(&self, trip: &TripRequest) -> String {
        match self.request(trip).await {
            GenerationOutcome::Success(text) => text,
            GenerationOutcome::TransportFailure(e) => {
                warn!("Itinerary backend unavailable, using fallback: {e}");
                fallback_itinerary(trip)
            }
            GenerationOutcome::MalformedResponse(e) => {
                warn!("Itinerary backend returned a malformed reply, using fallback: {e}");
                fallback_itinerary(trip)
            }
        }
    }
}

/// Posts `body` as JSON and decodes a JSON reply.
///
/// Non-2xx statuses become [`GatewayError::Status`]; bodies that fail to
/// decode become [`GatewayError::InvalidResponse`].
pub(crate) async fn post_json<B, R>(http: &Client, url: &str, body: &B) -> Result<R, GatewayError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = http.post(url).json(body).send().await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(GatewayError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}
