//! Itinerary generation and history.

use log::{debug, info};

use super::TravelPlanner;
use crate::{
    display::{GeneratedItinerary, HistoryEntries, ItineraryDraft},
    error::{Result, WaypointError},
    models::{ItineraryRecord, Session, TripRequest},
    normalize::normalize,
    params::ShowItinerary,
};

impl TravelPlanner {
    /// Generates and normalizes an itinerary for `trip` without storing it.
    ///
    /// The trip is validated first; an invalid date range fails with
    /// `InvalidInput` before any backend call. Backend failures are not
    /// errors: the gateway substitutes a fallback itinerary.
    pub async fn draft_itinerary(&self, trip: &TripRequest) -> Result<ItineraryDraft> {
        trip.validate()?;

        debug!(
            "Generating {}-day itinerary {} -> {} via {}",
            trip.day_count(),
            trip.origin,
            trip.destination,
            self.gateway.endpoint()
        );
        let raw = self.gateway.generate(trip).await;
        let formatted = normalize(&raw, Some(trip.day_count()));

        Ok(ItineraryDraft {
            trip: trip.clone(),
            raw,
            formatted,
        })
    }

    /// Stores a draft in the user's history. The record keeps the raw text.
    pub async fn save_itinerary(
        &self,
        session: &Session,
        draft: &ItineraryDraft,
    ) -> Result<ItineraryRecord> {
        let user_id = session.local_id.clone();
        let trip = draft.trip.clone();
        let raw = draft.raw.clone();
        let record = self
            .with_database(move |db| db.save_record(&user_id, &trip, &raw))
            .await?;
        info!("Saved itinerary {}", record.record_path());
        Ok(record)
    }

    /// Plans a trip for the logged-in user and stores the result.
    pub async fn generate_itinerary(
        &self,
        session: &Session,
        trip: &TripRequest,
    ) -> Result<GeneratedItinerary> {
        let draft = self.draft_itinerary(trip).await?;
        let record = self.save_itinerary(session, &draft).await?;
        Ok(GeneratedItinerary {
            record,
            formatted: draft.formatted,
        })
    }

    /// Lists the user's itineraries, most recent first.
    pub async fn history(&self, session: &Session) -> Result<HistoryEntries> {
        let user_id = session.local_id.clone();
        let records = self
            .with_database(move |db| db.list_records(&user_id))
            .await?;
        Ok(HistoryEntries(records))
    }

    /// Retrieves one of the user's itineraries.
    ///
    /// Records of other users are never visible: looking one up fails with
    /// `RecordNotFound` exactly like a missing timestamp.
    pub async fn show_itinerary(
        &self,
        session: &Session,
        params: &ShowItinerary,
    ) -> Result<ItineraryRecord> {
        let user_id = session.local_id.clone();
        let timestamp = params.timestamp;
        self.with_database(move |db| db.get_record(&user_id, timestamp))
            .await?
            .ok_or(WaypointError::RecordNotFound { timestamp })
    }
}
