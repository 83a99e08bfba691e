use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Intended use of a product, such as "Sealing & Gasketing".
///
/// Purposes double as a filter dimension and as the group heading in the
/// grouped catalog view.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Purpose {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewPurpose {
    pub id: String,
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl NewPurpose {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
