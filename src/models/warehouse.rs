use diesel::prelude::*;

use crate::domain::types::{ProductId, Quantity, TypeConstraintError, WarehouseId};
use crate::domain::warehouse::WarehouseProductInfo as DomainWarehouseProductInfo;

/// Diesel model representing the `warehouse_product_info` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::warehouse_product_info)]
pub struct WarehouseProductInfo {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl TryFrom<WarehouseProductInfo> for DomainWarehouseProductInfo {
    type Error = TypeConstraintError;

    fn try_from(info: WarehouseProductInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            id: WarehouseId::new(info.id)?,
            product_id: ProductId::new(info.product_id)?,
            quantity: Quantity::new(info.quantity)?,
        })
    }
}

/// Insertable form of [`WarehouseProductInfo`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::warehouse_product_info)]
pub struct NewWarehouseProductInfo {
    pub product_id: i32,
    pub quantity: i32,
}
