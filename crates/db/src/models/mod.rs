//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs whose `Option` fields bind SQL `NULL` when absent

pub mod flavor;
