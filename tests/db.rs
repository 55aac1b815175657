use diesel::prelude::*;
use kecinfor_store::schema::{banners, categories};

mod common;

#[test]
fn migrations_create_storefront_tables() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let banner_count: i64 = banners::table
        .count()
        .get_result(&mut conn)
        .expect("banners table should exist");
    let category_count: i64 = categories::table
        .count()
        .get_result(&mut conn)
        .expect("categories table should exist");

    assert_eq!(banner_count, 0);
    assert_eq!(category_count, 0);
}
