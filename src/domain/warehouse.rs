use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, Quantity, WarehouseId};

/// Warehouse stock record, one-to-one with a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarehouseProductInfo {
    pub id: WarehouseId,
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Stock information supplied when creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewWarehouseProductInfo {
    pub quantity: Quantity,
}
