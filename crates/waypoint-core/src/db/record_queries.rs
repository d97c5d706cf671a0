//! Itinerary record storage and queries.
//!
//! Records are append-only: there is no update or delete.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ItineraryRecord, TripRequest},
};

const SELECT_LATEST_TIMESTAMP_SQL: &str = "SELECT MAX(timestamp) FROM chats WHERE user_id = ?1";
const INSERT_RECORD_SQL: &str = "INSERT INTO chats (user_id, timestamp, origin, destination, start_date, end_date, interests, pace, itinerary) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const RECORD_COLUMNS: &str =
    "user_id, timestamp, origin, destination, start_date, end_date, interests, pace, itinerary";

impl super::Database {
    /// Helper function to construct an ItineraryRecord from a database row
    fn build_record_from_row(row: &rusqlite::Row) -> rusqlite::Result<ItineraryRecord> {
        let interests_json: String = row.get(6)?;
        let interests = serde_json::from_str::<Vec<String>>(&interests_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
        })?;

        Ok(ItineraryRecord {
            user_id: row.get(0)?,
            timestamp: row.get(1)?,
            origin: row.get(2)?,
            destination: row.get(3)?,
            start_date: row.get(4)?,
            end_date: row.get(5)?,
            interests,
            pace: row.get(7)?,
            itinerary: row.get(8)?,
        })
    }

    /// Stores a new itinerary for `user_id` and returns the stored record.
    ///
    /// The record's timestamp is the current epoch second. If the user
    /// already has a record at or after that second, the timestamp moves one
    /// past the latest so that ids stay unique and nothing is overwritten.
    pub fn save_record(
        &mut self,
        user_id: &str,
        trip: &TripRequest,
        itinerary: &str,
    ) -> Result<ItineraryRecord> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let latest: Option<i64> = tx
            .query_row(SELECT_LATEST_TIMESTAMP_SQL, params![user_id], |row| row.get(0))
            .db_context("Failed to read latest record timestamp")?;

        let now = Timestamp::now().as_second();
        let timestamp = match latest {
            Some(latest) if latest >= now => latest + 1,
            _ => now,
        };

        let record = ItineraryRecord {
            user_id: user_id.to_string(),
            timestamp,
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            start_date: trip.start_date.to_string(),
            end_date: trip.end_date.to_string(),
            interests: trip.interests.clone(),
            pace: trip.pace.as_str().to_string(),
            itinerary: itinerary.to_string(),
        };
        let interests_json = serde_json::to_string(&record.interests)?;

        tx.execute(
            INSERT_RECORD_SQL,
            params![
                record.user_id,
                record.timestamp,
                record.origin,
                record.destination,
                record.start_date,
                record.end_date,
                interests_json,
                record.pace,
                record.itinerary,
            ],
        )
        .db_context("Failed to insert itinerary record")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(record)
    }

    /// Lists all records of `user_id`, most recent first.
    pub fn list_records(&self, user_id: &str) -> Result<Vec<ItineraryRecord>> {
        let query =
            format!("SELECT {RECORD_COLUMNS} FROM chats WHERE user_id = ?1 ORDER BY timestamp DESC");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map(params![user_id], Self::build_record_from_row)
            .db_context("Failed to query itinerary records")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read itinerary records")?;

        Ok(records)
    }

    /// Retrieves one record of `user_id` by its timestamp.
    pub fn get_record(&self, user_id: &str, timestamp: i64) -> Result<Option<ItineraryRecord>> {
        let query =
            format!("SELECT {RECORD_COLUMNS} FROM chats WHERE user_id = ?1 AND timestamp = ?2");
        self.connection
            .query_row(&query, params![user_id, timestamp], Self::build_record_from_row)
            .optional()
            .db_context("Failed to query itinerary record")
    }
}
