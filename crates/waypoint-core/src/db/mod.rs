//! Database operations and SQLite management for users and itineraries.
//!
//! This module provides low-level database operations for waypoint. It
//! handles SQLite connections and schema setup, and exposes specialized
//! query interfaces for itinerary records and accounts.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod record_queries;
pub mod schema;
pub mod user_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
