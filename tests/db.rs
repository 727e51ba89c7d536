use diesel::prelude::*;
use store_catalog::repository::{DieselRepository, StoreWriter};
use store_catalog::schema::{companies, images, products, warehouse_product_info};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn images_require_an_existing_product() {
    let test_db = common::TestDb::new();

    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    let inserted = diesel::insert_into(images::table)
        .values((
            images::product_id.eq(999),
            images::name.eq("orphan image"),
            images::index.eq(1),
        ))
        .execute(&mut conn);

    assert!(inserted.is_err());
}

#[test]
fn clear_removes_every_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    common::seed_store(&repo);

    repo.clear().expect("should clear store");

    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    let companies: i64 = companies::table.count().get_result(&mut conn).unwrap();
    let products: i64 = products::table.count().get_result(&mut conn).unwrap();
    let images: i64 = images::table.count().get_result(&mut conn).unwrap();
    let stock: i64 = warehouse_product_info::table
        .count()
        .get_result(&mut conn)
        .unwrap();

    assert_eq!((companies, products, images, stock), (0, 0, 0, 0));
}
