//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the writes that entity supports

pub mod achievement;
pub mod course;
pub mod notification;
pub mod preferences;
pub mod progress;
pub mod pronunciation;
pub mod recommendation;
pub mod user;
pub mod word_of_the_day;
pub mod xp_account;
