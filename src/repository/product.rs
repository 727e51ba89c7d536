use diesel::prelude::*;

use crate::domain::product::Product;
use crate::domain::types::{ProductCode, TypeConstraintError};
use crate::models::product::Product as DbProduct;
use crate::repository::criteria::{ProductCriteria, ProductPredicate};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::sql::{Images, Products};
use crate::repository::{DieselRepository, ProductReader, exactly_one, like_pattern, lower};

impl ProductReader for DieselRepository {
    fn search_products(&self, criteria: &ProductCriteria) -> RepositoryResult<Vec<Product>> {
        use crate::schema::{images, products, warehouse_product_info};

        let mut conn = self.conn()?;

        conn.transaction::<Vec<Product>, RepositoryError, _>(|conn| {
            let mut query = products::table
                .distinct()
                .into_boxed::<diesel::sqlite::Sqlite>();

            for predicate in criteria.predicates() {
                query = match predicate {
                    ProductPredicate::NameContains(needle) => {
                        query.filter(lower(products::name).like(like_pattern(needle)))
                    }
                    ProductPredicate::HasImageAboveIndex(index) => query.filter(
                        products::id.eq_any(
                            images::table
                                .filter(images::index.gt(*index))
                                .select(images::product_id),
                        ),
                    ),
                    ProductPredicate::CodeEquals(code) => {
                        query.filter(products::code.eq(code.as_str().to_string()))
                    }
                    ProductPredicate::StockedAbove(quantity) => query.filter(
                        products::id.eq_any(
                            warehouse_product_info::table
                                .filter(warehouse_product_info::quantity.gt(*quantity))
                                .select(warehouse_product_info::product_id),
                        ),
                    ),
                };
            }

            let items = query
                .order(products::id.asc())
                .load::<DbProduct>(conn)?
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<Product>, TypeConstraintError>>()?;

            Ok(items)
        })
    }

    fn search_products_raw(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> RepositoryResult<Vec<Product>> {
        use diesel::sql_types::{Integer, Text};

        let mut conn = self.conn()?;

        conn.transaction::<Vec<Product>, RepositoryError, _>(|conn| {
            let items = diesel::sql_query(
                "SELECT DISTINCT p.id, p.company_id, p.code, p.name, p.created_at \
                 FROM products p \
                 INNER JOIN images i ON i.product_id = p.id \
                 WHERE lower(p.name) LIKE ? AND i.\"index\" > ? \
                 ORDER BY p.id ASC",
            )
            .bind::<Text, _>(like_pattern(needle))
            .bind::<Integer, _>(min_image_index)
            .load::<DbProduct>(conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, TypeConstraintError>>()?;

            Ok(items)
        })
    }

    fn search_products_built(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> RepositoryResult<Vec<Product>> {
        use sea_query::{Expr, Func, Order, Query, SqliteQueryBuilder};

        let sql = Query::select()
            .distinct()
            .columns([
                (Products::Table, Products::Id),
                (Products::Table, Products::CompanyId),
                (Products::Table, Products::Code),
                (Products::Table, Products::Name),
                (Products::Table, Products::CreatedAt),
            ])
            .from(Products::Table)
            .inner_join(
                Images::Table,
                Expr::col((Images::Table, Images::ProductId))
                    .equals((Products::Table, Products::Id)),
            )
            .and_where(
                Expr::expr(Func::lower(Expr::col((Products::Table, Products::Name))))
                    .like(like_pattern(needle)),
            )
            .and_where(Expr::col((Images::Table, Images::Index)).gt(min_image_index))
            .order_by((Products::Table, Products::Id), Order::Asc)
            .to_string(SqliteQueryBuilder);

        let mut conn = self.conn()?;

        conn.transaction::<Vec<Product>, RepositoryError, _>(|conn| {
            let items = diesel::sql_query(sql)
                .load::<DbProduct>(conn)?
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<Product>, TypeConstraintError>>()?;

            Ok(items)
        })
    }

    fn get_product_in_stock(
        &self,
        code: &ProductCode,
        min_quantity: i32,
    ) -> RepositoryResult<Product> {
        use crate::schema::{products, warehouse_product_info};

        let mut conn = self.conn()?;

        conn.transaction::<Product, RepositoryError, _>(|conn| {
            // limit 2: distinguishes a unique match from an ambiguous one
            let items = products::table
                .inner_join(warehouse_product_info::table)
                .filter(products::code.eq(code.as_str()))
                .filter(warehouse_product_info::quantity.gt(min_quantity))
                .select(products::all_columns)
                .limit(2)
                .load::<DbProduct>(conn)?;

            let product = exactly_one(items)?;
            Ok(product.try_into()?)
        })
    }
}
