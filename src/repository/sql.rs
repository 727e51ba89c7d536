//! sea-query table and column identifiers mirroring [`crate::schema`].

use sea_query::Iden;

/// Columns of the `products` table.
#[derive(Iden)]
pub enum Products {
    Table,
    Id,
    CompanyId,
    Code,
    Name,
    CreatedAt,
}

/// Columns of the `images` table.
#[derive(Iden)]
pub enum Images {
    Table,
    Id,
    ProductId,
    Name,
    Index,
}
