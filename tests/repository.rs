use diesel::prelude::*;
use store_catalog::domain::product::Product;
use store_catalog::domain::types::ProductCode;
use store_catalog::repository::criteria::ProductCriteria;
use store_catalog::repository::errors::RepositoryError;
use store_catalog::repository::{DieselRepository, ImageReader, ProductReader, StoreWriter};
use store_catalog::schema::products;

mod common;

fn setup() -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    // Scenarios start from an empty store, even on a reused database file.
    repo.clear().expect("should clear store");
    (test_db, repo)
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

fn ids(products: &[Product]) -> Vec<i32> {
    products.iter().map(|p| p.id.get()).collect()
}

#[test]
fn all_three_search_formulations_agree() {
    let (_test_db, repo) = setup();
    common::seed_store(&repo);

    let criteria = ProductCriteria::new()
        .name_contains("tv")
        .with_image_above_index(0);

    let by_criteria = repo.search_products(&criteria).unwrap();
    let by_raw = repo.search_products_raw("tv", 0).unwrap();
    let by_builder = repo.search_products_built("tv", 0).unwrap();

    assert_eq!(names(&by_criteria), ["TV", "TV Set"]);
    assert_eq!(names(&by_raw), ["TV", "TV Set"]);
    assert_eq!(names(&by_builder), ["TV", "TV Set"]);

    assert_eq!(ids(&by_criteria), ids(&by_raw));
    assert_eq!(ids(&by_criteria), ids(&by_builder));
}

#[test]
fn search_is_idempotent_against_unchanged_data() {
    let (_test_db, repo) = setup();
    common::seed_store(&repo);

    let criteria = ProductCriteria::new()
        .name_contains("tv")
        .with_image_above_index(0);

    let first = repo.search_products(&criteria).unwrap();
    let second = repo.search_products(&criteria).unwrap();

    assert_eq!(ids(&first), ids(&second));
    assert_eq!(names(&first), names(&second));
}

#[test]
fn raising_the_index_threshold_narrows_all_formulations() {
    let (_test_db, repo) = setup();
    common::seed_store(&repo);

    let criteria = ProductCriteria::new()
        .name_contains("tv")
        .with_image_above_index(2);

    assert_eq!(names(&repo.search_products(&criteria).unwrap()), ["TV Set"]);
    assert_eq!(names(&repo.search_products_raw("tv", 2).unwrap()), ["TV Set"]);
    assert_eq!(
        names(&repo.search_products_built("tv", 2).unwrap()),
        ["TV Set"]
    );
}

#[test]
fn criteria_compose_code_and_stock_predicates() {
    let (_test_db, repo) = setup();
    common::seed_store(&repo);

    let criteria = ProductCriteria::new()
        .code_equals(ProductCode::new("tvCode").unwrap())
        .stocked_above(50);

    let found = repo.search_products(&criteria).unwrap();
    assert_eq!(names(&found), ["TV"]);
}

#[test]
fn product_lookup_requires_exactly_one_row() {
    let (_test_db, repo) = setup();
    common::seed_store(&repo);

    let code = ProductCode::new("tvCode").unwrap();

    let product = repo.get_product_in_stock(&code, 50).unwrap();
    assert_eq!(product.name, "TV");

    assert!(matches!(
        repo.get_product_in_stock(&code, 1000),
        Err(RepositoryError::NotFound)
    ));

    let unknown = ProductCode::new("noSuchCode").unwrap();
    assert!(matches!(
        repo.get_product_in_stock(&unknown, 0),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn duplicate_product_codes_are_rejected() {
    let (_test_db, repo) = setup();
    let company_id = common::seed_store(&repo);

    let duplicate = common::new_product(company_id, "tvCode", "Other TV", &[], 5);
    let result = repo.create_products(&[duplicate]);

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[test]
fn failed_unit_of_work_rolls_back_all_writes() {
    let (test_db, repo) = setup();
    let company_id = common::seed_store(&repo);

    let batch = vec![
        common::new_product(company_id, "radioCode", "Radio", &[("front", 1)], 7),
        common::new_product(company_id, "tvCode", "Other TV", &[], 5),
    ];
    assert!(repo.create_products(&batch).is_err());

    // The radio from the same unit of work must be gone too.
    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    let total: i64 = products::table.count().get_result(&mut conn).unwrap();
    assert_eq!(total, 3);

    assert!(repo.search_products_raw("radio", 0).unwrap().is_empty());
}

#[test]
fn both_projection_formulations_agree() {
    let (_test_db, repo) = setup();
    common::seed_store(&repo);

    let by_dsl = repo.list_image_products("tv", 0).unwrap();
    let by_builder = repo.list_image_products_built("tv", 0).unwrap();

    let pairs: Vec<(&str, &str)> = by_dsl
        .iter()
        .map(|r| (r.image_name.as_str(), r.product_name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("front image 2", "TV Set"),
            ("side image 1", "TV"),
            ("side image 2", "TV Set"),
        ]
    );

    assert_eq!(by_dsl, by_builder);
}
