//! Account storage for the local identity store.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, TransactionBehavior};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, Result, WaypointError},
    models::AuthUser,
};

const MIN_PASSWORD_LEN: usize = 6;

const SELECT_USER_BY_EMAIL_SQL: &str =
    "SELECT local_id, email, password_hash, salt, created_at FROM users WHERE email = ?1";
const INSERT_USER_SQL: &str =
    "INSERT INTO users (local_id, email, password_hash, salt, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";

/// Message for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const EMAIL_EXISTS: &str = "Email already registered";

struct StoredUser {
    user: AuthUser,
    password_hash: String,
    salt: String,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(salt: &str, password: &str) -> String {
    format!("{:x}", Sha256::digest(format!("{salt}{password}").as_bytes()))
}

fn parse_created_at(value: &str) -> rusqlite::Result<Timestamp> {
    value.parse::<Timestamp>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })
}

impl super::Database {
    fn find_user(&self, email: &str) -> Result<Option<StoredUser>> {
        self.connection
            .query_row(SELECT_USER_BY_EMAIL_SQL, params![email], |row| {
                let created_at: String = row.get(4)?;
                Ok(StoredUser {
                    user: AuthUser {
                        local_id: row.get(0)?,
                        email: row.get(1)?,
                        created_at: parse_created_at(&created_at)?,
                    },
                    password_hash: row.get(2)?,
                    salt: row.get(3)?,
                })
            })
            .optional()
            .db_context("Failed to query user")
    }

    /// Creates an account for `email`.
    ///
    /// The email is trimmed and lowercased before it is stored, so lookups
    /// are case-insensitive.
    pub fn create_user(&mut self, email: &str, password: &str) -> Result<AuthUser> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(WaypointError::invalid_input("email")
                .with_reason("Email must be a valid address"));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(WaypointError::invalid_input("password").with_reason(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)",
                params![email],
                |row| row.get(0),
            )
            .db_context("Failed to check existing user")?;
        if exists {
            return Err(WaypointError::Authentication(EMAIL_EXISTS.to_string()));
        }

        let salt = Uuid::new_v4().to_string();
        let user = AuthUser {
            local_id: Uuid::new_v4().to_string(),
            email,
            created_at: Timestamp::now(),
        };

        tx.execute(
            INSERT_USER_SQL,
            params![
                user.local_id,
                user.email,
                hash_password(&salt, password),
                salt,
                user.created_at.to_string(),
            ],
        )
        .db_context("Failed to insert user")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(user)
    }

    /// Checks `password` against the stored hash for `email`.
    pub fn verify_user(&self, email: &str, password: &str) -> Result<AuthUser> {
        let email = normalize_email(email);
        let stored = self
            .find_user(&email)?
            .filter(|stored| hash_password(&stored.salt, password) == stored.password_hash)
            .ok_or_else(|| WaypointError::Authentication(INVALID_CREDENTIALS.to_string()))?;
        Ok(stored.user)
    }
}
