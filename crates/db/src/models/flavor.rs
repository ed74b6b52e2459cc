//! Flavor entity model and DTOs.

use scoop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A flavor row from the `flavors` table.
///
/// `updated_at` is `NULL` until the row is first updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flavor {
    pub id: DbId,
    pub name: String,
    pub is_favorite: bool,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a new flavor.
///
/// Both fields are optional on the wire: a missing field binds SQL `NULL`
/// and the table's `NOT NULL` constraints decide whether the insert is
/// accepted. Presence is not checked in this layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlavor {
    pub name: Option<String>,
    pub is_favorite: Option<bool>,
}

/// DTO for updating an existing flavor. Same pass-through semantics as
/// [`CreateFlavor`]: absent fields bind `NULL` rather than keeping the old
/// value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFlavor {
    pub name: Option<String>,
    pub is_favorite: Option<bool>,
}
