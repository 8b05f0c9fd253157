//! User identity models.
//!
//! Credentials live with the external auth gateway; this row only anchors
//! ownership of the user's learning data.

use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub display_name: String,
}
