//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Response DTOs derived from rows where the API shape differs

pub mod checklist;
pub mod profile;
pub mod stats;
pub mod xp_transaction;
