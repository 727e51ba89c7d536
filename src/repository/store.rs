use diesel::prelude::*;

use crate::domain::company::{Company, NewCompany};
use crate::domain::product::NewProduct;
use crate::domain::types::CompanyId;
use crate::models::company::NewCompany as DbNewCompany;
use crate::models::image::NewImage as DbNewImage;
use crate::models::product::NewProduct as DbNewProduct;
use crate::models::warehouse::NewWarehouseProductInfo as DbNewWarehouseProductInfo;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, StoreWriter};

impl StoreWriter for DieselRepository {
    fn create_company(&self, company: &NewCompany) -> RepositoryResult<Company> {
        use crate::schema::companies;

        let mut conn = self.conn()?;

        conn.transaction::<Company, RepositoryError, _>(|conn| {
            let db_company: DbNewCompany = company.into();

            let id = diesel::insert_into(companies::table)
                .values(db_company)
                .returning(companies::id)
                .get_result::<i32>(conn)?;

            Ok(Company {
                id: CompanyId::new(id)?,
                name: company.name.clone(),
            })
        })
    }

    fn create_products(&self, products: &[NewProduct]) -> RepositoryResult<usize> {
        use crate::schema::{images, products, warehouse_product_info};

        let mut conn = self.conn()?;

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let mut affected = 0;

            for product in products {
                let db_product: DbNewProduct = product.into();

                let product_id = diesel::insert_into(products::table)
                    .values(db_product)
                    .returning(products::id)
                    .get_result::<i32>(conn)?;

                let db_images = product
                    .images
                    .iter()
                    .map(|image| DbNewImage {
                        product_id,
                        name: image.name.as_str().to_string(),
                        index: image.index.get(),
                    })
                    .collect::<Vec<_>>();

                if !db_images.is_empty() {
                    diesel::insert_into(images::table)
                        .values(&db_images)
                        .execute(conn)?;
                }

                diesel::insert_into(warehouse_product_info::table)
                    .values(DbNewWarehouseProductInfo {
                        product_id,
                        quantity: product.warehouse.quantity.get(),
                    })
                    .execute(conn)?;

                affected += 1;
            }

            Ok(affected)
        })
    }

    fn clear(&self) -> RepositoryResult<()> {
        use crate::schema::{companies, images, products, warehouse_product_info};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(images::table).execute(conn)?;
            diesel::delete(warehouse_product_info::table).execute(conn)?;
            diesel::delete(products::table).execute(conn)?;
            diesel::delete(companies::table).execute(conn)?;
            Ok(())
        })
    }
}
