use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Manufacturer a product is sold under.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Brand {
    /// Slug identifier, also used in catalog URLs.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional logo shown on brand listings.
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload used to insert or refresh a brand.
#[derive(Debug, Clone)]
pub struct NewBrand {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewBrand {
    /// Build a brand payload stamped with the current time.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach a logo URL to the payload.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
