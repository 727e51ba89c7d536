use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::image::NewImage;
use crate::domain::types::{CompanyId, ProductCode, ProductId, ProductName};
use crate::domain::warehouse::NewWarehouseProductInfo;

/// A catalog product belonging to a company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub company_id: CompanyId,
    /// Unique business key.
    pub code: ProductCode,
    pub name: ProductName,
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`Product`] together with its
/// images and warehouse stock record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub company_id: CompanyId,
    pub code: ProductCode,
    pub name: ProductName,
    pub created_at: NaiveDateTime,
    pub images: Vec<NewImage>,
    pub warehouse: NewWarehouseProductInfo,
}
