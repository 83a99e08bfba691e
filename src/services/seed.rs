//! Loading of the bundled sample catalog.

use std::collections::HashSet;
use std::io::Read;

use csv::Trim;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::{
    brand::NewBrand,
    category::NewCategory,
    product::{NewProduct, NewProductImage, ProductStatus},
    purpose::NewPurpose,
};
use crate::repository::{BrandWriter, CategoryWriter, ProductWriter, PurposeWriter};
use crate::services::ServiceResult;

const ID_MAX_LEN: u64 = 64;
const NAME_MAX_LEN: u64 = 128;
const DESCRIPTION_MAX_LEN: u64 = 2048;
const URL_MAX_LEN: u64 = 1024;
const PRIORITY_MAX: i32 = 1000;

/// Errors raised while reading or checking seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },
    /// A row failed field validation.
    #[error("{file} line {line}: {source}")]
    Validation {
        file: &'static str,
        line: usize,
        #[source]
        source: ValidationErrors,
    },
    /// Ids are used in URLs and must be lowercase slugs.
    #[error("{file} line {line}: `{id}` is not a valid slug")]
    InvalidSlug {
        file: &'static str,
        line: usize,
        id: String,
    },
    #[error("{file}: duplicate id `{id}`")]
    DuplicateId { file: &'static str, id: String },
    /// A product points at a brand, category or purpose that is not seeded.
    #[error("product `{product_id}` references unknown {kind} `{id}`")]
    UnknownReference {
        product_id: String,
        kind: &'static str,
        id: String,
    },
}

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Debug, Deserialize, Validate)]
struct NamedRow {
    #[validate(length(min = 1, max = ID_MAX_LEN))]
    id: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    name: String,
}

#[derive(Debug, Deserialize, Validate)]
struct BrandRow {
    #[validate(length(min = 1, max = ID_MAX_LEN))]
    id: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = URL_MAX_LEN))]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
struct ProductRow {
    #[validate(length(min = 1, max = ID_MAX_LEN))]
    id: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    brand_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    purpose_id: Option<String>,
    #[validate(range(min = 0, max = PRIORITY_MAX))]
    priority: i32,
    #[validate(range(min = 0))]
    price: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = URL_MAX_LEN))]
    image_url: Option<String>,
}

/// Parsed and cross-checked catalog ready to be written.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub purposes: Vec<NewPurpose>,
    pub brands: Vec<NewBrand>,
    pub categories: Vec<NewCategory>,
    pub products: Vec<NewProduct>,
}

/// Raw CSV sources, one per table.
#[derive(Debug, Clone, Copy)]
pub struct SeedSources<'a> {
    pub purposes: &'a str,
    pub brands: &'a str,
    pub categories: &'a str,
    pub products: &'a str,
}

impl SeedSources<'static> {
    /// Sample data compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            purposes: include_str!("../../seed/purposes.csv"),
            brands: include_str!("../../seed/brands.csv"),
            categories: include_str!("../../seed/categories.csv"),
            products: include_str!("../../seed/products.csv"),
        }
    }
}

impl SeedData {
    pub fn bundled() -> SeedResult<Self> {
        Self::parse(SeedSources::bundled())
    }

    /// Parse every source and verify that product references resolve.
    pub fn parse(sources: SeedSources<'_>) -> SeedResult<Self> {
        let purposes = read_rows::<NamedRow, _>("purposes.csv", sources.purposes.as_bytes())?
            .into_iter()
            .map(|row| NewPurpose::new(row.id, row.name))
            .collect();

        let brands = read_rows::<BrandRow, _>("brands.csv", sources.brands.as_bytes())?
            .into_iter()
            .map(|row| {
                let brand = NewBrand::new(row.id, row.name);
                match row.image_url {
                    Some(url) => brand.with_image_url(url),
                    None => brand,
                }
            })
            .collect();

        let categories = read_rows::<NamedRow, _>("categories.csv", sources.categories.as_bytes())?
            .into_iter()
            .map(|row| NewCategory::new(row.id, row.name))
            .collect();

        let products = read_rows::<ProductRow, _>("products.csv", sources.products.as_bytes())?
            .into_iter()
            .map(ProductRow::into_new_product)
            .collect();

        let data = Self {
            purposes,
            brands,
            categories,
            products,
        };
        data.check_references()?;
        Ok(data)
    }

    fn check_references(&self) -> SeedResult<()> {
        let brands: HashSet<&str> = self.brands.iter().map(|b| b.id.as_str()).collect();
        let categories: HashSet<&str> = self.categories.iter().map(|c| c.id.as_str()).collect();
        let purposes: HashSet<&str> = self.purposes.iter().map(|p| p.id.as_str()).collect();

        for product in &self.products {
            let references = [
                ("brand", &brands, product.brand_id.as_deref()),
                ("category", &categories, product.category_id.as_deref()),
                ("purpose", &purposes, product.purpose_id.as_deref()),
            ];
            for (kind, known, id) in references {
                if let Some(id) = id {
                    if !known.contains(id) {
                        return Err(SeedError::UnknownReference {
                            product_id: product.id.clone(),
                            kind,
                            id: id.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl ProductRow {
    fn into_new_product(self) -> NewProduct {
        let mut product = NewProduct::new(self.id.clone(), self.name)
            .with_price(self.price)
            .with_priority(self.priority)
            .with_status(ProductStatus::Published);

        if let Some(description) = self.description {
            product = product.with_description(description);
        }
        if let Some(brand_id) = self.brand_id {
            product = product.with_brand_id(brand_id);
        }
        if let Some(category_id) = self.category_id {
            product = product.with_category_id(category_id);
        }
        if let Some(purpose_id) = self.purpose_id {
            product = product.with_purpose_id(purpose_id);
        }
        if let Some(url) = self.image_url {
            product = product.with_image(NewProductImage::new(url).with_public_id(self.id));
        }

        product
    }
}

trait SeedRow {
    fn id(&self) -> &str;
}

impl SeedRow for NamedRow {
    fn id(&self) -> &str {
        &self.id
    }
}

impl SeedRow for BrandRow {
    fn id(&self) -> &str {
        &self.id
    }
}

impl SeedRow for ProductRow {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Deserialize, validate and de-duplicate the rows of one CSV file.
fn read_rows<T, R>(file: &'static str, reader: R) -> SeedResult<Vec<T>>
where
    T: DeserializeOwned + Validate + SeedRow,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut rows = Vec::new();

    for (index, row) in csv_reader.deserialize::<T>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row = row.map_err(|source| SeedError::Csv { file, source })?;

        row.validate()
            .map_err(|source| SeedError::Validation { file, line, source })?;

        if !is_slug(row.id()) {
            return Err(SeedError::InvalidSlug {
                file,
                line,
                id: row.id().to_string(),
            });
        }

        if !seen.insert(row.id().to_string()) {
            return Err(SeedError::DuplicateId {
                file,
                id: row.id().to_string(),
            });
        }

        rows.push(row);
    }

    Ok(rows)
}

fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub purposes: usize,
    pub brands: usize,
    pub categories: usize,
    pub products: usize,
    /// Products in the database that the seed no longer lists.
    pub removed: usize,
}

/// Upsert the whole seed catalog and delete products it no longer lists.
/// Safe to run repeatedly.
///
/// Lookup tables are written before products so foreign keys resolve.
pub fn load_seed_data<R>(repo: &R, data: &SeedData) -> ServiceResult<SeedSummary>
where
    R: BrandWriter + CategoryWriter + PurposeWriter + ProductWriter + ?Sized,
{
    data.check_references()?;

    for purpose in &data.purposes {
        repo.upsert_purpose(purpose)?;
    }
    log::info!("Seeded {} purposes", data.purposes.len());

    for brand in &data.brands {
        repo.upsert_brand(brand)?;
    }
    log::info!("Seeded {} brands", data.brands.len());

    for category in &data.categories {
        repo.upsert_category(category)?;
    }
    log::info!("Seeded {} categories", data.categories.len());

    for product in &data.products {
        repo.upsert_product(product).map_err(|err| {
            log::error!("Failed to seed product {}: {err}", product.id);
            err
        })?;
    }
    log::info!("Seeded {} products", data.products.len());

    let keep_ids: Vec<String> = data.products.iter().map(|p| p.id.clone()).collect();
    let removed = repo.delete_products_except(&keep_ids)?;
    if removed > 0 {
        log::info!("Removed {removed} products missing from the seed");
    }

    Ok(SeedSummary {
        purposes: data.purposes.len(),
        brands: data.brands.len(),
        categories: data.categories.len(),
        products: data.products.len(),
        removed,
    })
}
