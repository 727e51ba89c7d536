use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{CompanyId, ProductCode, ProductId, ProductName, TypeConstraintError};

/// Diesel model representing the `products` table.
///
/// Derives `QueryableByName` as well so the same struct can be loaded from
/// raw and builder-generated SQL.
#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub company_id: i32,
    pub code: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            company_id: CompanyId::new(product.company_id)?,
            code: ProductCode::new(product.code)?,
            name: ProductName::new(product.name)?,
            created_at: product.created_at,
        })
    }
}

/// Insertable form of [`Product`].
///
/// Images and the warehouse record travel separately; the repository inserts
/// them in the same transaction as the product row.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub company_id: i32,
    pub code: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<&DomainNewProduct> for NewProduct {
    fn from(product: &DomainNewProduct) -> Self {
        Self {
            company_id: product.company_id.get(),
            code: product.code.as_str().to_string(),
            name: product.name.as_str().to_string(),
            created_at: product.created_at,
        }
    }
}
