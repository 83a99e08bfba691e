//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use royal_catalog::db::{DbPool, establish_connection_pool};
use royal_catalog::domain::{
    brand::NewBrand,
    category::NewCategory,
    product::{NewProduct, NewProductImage, ProductStatus},
    purpose::NewPurpose,
};
use royal_catalog::repository::{
    BrandWriter, CategoryWriter, DieselRepository, ProductWriter, PurposeWriter,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    // Dropped before `dir` so connections close before the files go away.
    pool: DbPool,
    path: PathBuf,
    dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("temp path is valid UTF-8").to_string();

        let pool = establish_connection_pool(&url).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb { pool, path, dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Small catalog covering every filter dimension and status.
///
/// Visible products by priority: loctite-518 (90), loctite-243 (80),
/// loctite-454 (70), crc-2-26 (60), crc-brakleen (40, draft),
/// loctite-sf-7063 (30, no purpose). loctite-old (100) is archived.
pub fn seed_sample_catalog(repo: &DieselRepository) {
    for (id, name) in [
        ("bonding", "Bonding & Assembly"),
        ("sealing", "Sealing & Gasketing"),
        ("cleaning", "Cleaning & Degreasing"),
    ] {
        repo.upsert_purpose(&NewPurpose::new(id, name))
            .expect("upsert purpose");
    }

    for (id, name) in [("loctite", "Loctite"), ("crc", "CRC")] {
        repo.upsert_brand(&NewBrand::new(id, name))
            .expect("upsert brand");
    }

    for (id, name) in [
        ("adhesives", "Adhesives"),
        ("sealants", "Sealants"),
        ("sprays", "Industrial Sprays"),
    ] {
        repo.upsert_category(&NewCategory::new(id, name))
            .expect("upsert category");
    }

    let item = |id: &str, name: &str, priority: i32, brand: &str, category: &str| {
        NewProduct::new(id, name)
            .with_priority(priority)
            .with_price(500)
            .with_status(ProductStatus::Published)
            .with_brand_id(brand)
            .with_category_id(category)
    };

    let products = vec![
        item("loctite-454", "Loctite 454 Gel", 70, "loctite", "adhesives")
            .with_purpose_id("bonding")
            .with_image(NewProductImage::new("https://img/454-front.jpg"))
            .with_image(NewProductImage::new("https://img/454-back.jpg")),
        item("loctite-518", "Loctite 518 Gasket Eliminator", 90, "loctite", "sealants")
            .with_purpose_id("sealing")
            .with_description("Flexible anaerobic GEL for rigid flanges"),
        item("loctite-old", "Loctite Gel Legacy", 100, "loctite", "adhesives")
            .with_purpose_id("bonding")
            .with_status(ProductStatus::Archived),
        item("crc-brakleen", "CRC Brakleen", 40, "crc", "sprays")
            .with_purpose_id("cleaning")
            .with_status(ProductStatus::Draft),
        item("loctite-243", "Loctite 243", 80, "loctite", "adhesives").with_purpose_id("bonding"),
        item("loctite-sf-7063", "Loctite SF 7063 Cleaner", 30, "loctite", "sprays"),
        item("crc-2-26", "CRC 2-26", 60, "crc", "sprays").with_purpose_id("cleaning"),
    ];

    for product in &products {
        repo.upsert_product(product).expect("upsert product");
    }
}
