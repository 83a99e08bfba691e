use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Product family used as a catalog filter dimension.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Slug identifier of the category.
    pub id: String,
    /// Human-readable name of the category.
    pub name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload used to insert or refresh a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub id: String,
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    /// Build a new category payload with the supplied details and current timestamp.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
