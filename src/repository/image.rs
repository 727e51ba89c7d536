use diesel::prelude::*;

use crate::dto::image_product::ImageProductDto;
use crate::models::image::ImageProductRow;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::sql::{Images, Products};
use crate::repository::{DieselRepository, ImageReader, like_pattern, lower};

impl ImageReader for DieselRepository {
    fn list_image_products(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> RepositoryResult<Vec<ImageProductDto>> {
        use crate::schema::{images, products};

        let mut conn = self.conn()?;

        conn.transaction::<Vec<ImageProductDto>, RepositoryError, _>(|conn| {
            let rows = images::table
                .inner_join(products::table)
                .filter(lower(products::name).like(like_pattern(needle)))
                .filter(images::index.gt(min_image_index))
                .select((images::name, products::name))
                .distinct()
                .order(images::name.asc())
                .load::<(String, String)>(conn)?;

            Ok(rows.into_iter().map(Into::into).collect())
        })
    }

    fn list_image_products_built(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> RepositoryResult<Vec<ImageProductDto>> {
        use sea_query::{Alias, Expr, Func, Order, Query, SqliteQueryBuilder};

        let sql = Query::select()
            .distinct()
            .expr_as(
                Expr::col((Images::Table, Images::Name)),
                Alias::new("image_name"),
            )
            .expr_as(
                Expr::col((Products::Table, Products::Name)),
                Alias::new("product_name"),
            )
            .from(Images::Table)
            .inner_join(
                Products::Table,
                Expr::col((Images::Table, Images::ProductId))
                    .equals((Products::Table, Products::Id)),
            )
            .and_where(
                Expr::expr(Func::lower(Expr::col((Products::Table, Products::Name))))
                    .like(like_pattern(needle)),
            )
            .and_where(Expr::col((Images::Table, Images::Index)).gt(min_image_index))
            .order_by(Alias::new("image_name"), Order::Asc)
            .to_string(SqliteQueryBuilder);

        let mut conn = self.conn()?;

        conn.transaction::<Vec<ImageProductDto>, RepositoryError, _>(|conn| {
            let rows = diesel::sql_query(sql).load::<ImageProductRow>(conn)?;

            Ok(rows.into_iter().map(Into::into).collect())
        })
    }
}
