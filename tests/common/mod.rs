//! Helpers for integration tests.

use chrono::Utc;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use store_catalog::db::{DbPool, establish_connection_pool};
use store_catalog::domain::company::NewCompany;
use store_catalog::domain::image::NewImage;
use store_catalog::domain::product::NewProduct;
use store_catalog::domain::types::{
    CompanyId, CompanyName, ImageIndex, ImageName, ProductCode, ProductName, Quantity,
};
use store_catalog::domain::warehouse::NewWarehouseProductInfo;
use store_catalog::repository::{DieselRepository, StoreWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Builds a `NewProduct` with its images and warehouse stock.
pub fn new_product(
    company_id: CompanyId,
    code: &str,
    name: &str,
    images: &[(&str, i32)],
    quantity: i32,
) -> NewProduct {
    NewProduct {
        company_id,
        code: ProductCode::new(code).expect("valid product code"),
        name: ProductName::new(name).expect("valid product name"),
        created_at: Utc::now().naive_utc(),
        images: images
            .iter()
            .map(|(name, index)| NewImage {
                name: ImageName::new(*name).expect("valid image name"),
                index: ImageIndex::new(*index).expect("valid image index"),
            })
            .collect(),
        warehouse: NewWarehouseProductInfo {
            quantity: Quantity::new(quantity).expect("valid quantity"),
        },
    }
}

/// Seeds the catalog used by the query scenarios: a TV, a TV Set and a
/// CD Player, with their images and warehouse stock, in one unit of work.
pub fn seed_store(repo: &DieselRepository) -> CompanyId {
    let company = repo
        .create_company(&NewCompany {
            name: CompanyName::new("TV Company").expect("valid company name"),
        })
        .expect("should create company");

    let products = vec![
        new_product(
            company.id,
            "tvCode",
            "TV",
            &[("front image 1", 0), ("side image 1", 1)],
            101,
        ),
        new_product(
            company.id,
            "tvSetCode",
            "TV Set",
            &[("front image 2", 2), ("side image 2", 3)],
            55,
        ),
        new_product(company.id, "cdPlayerCode", "CD Player", &[], 11),
    ];
    repo.create_products(&products)
        .expect("should create products");

    company.id
}
