use serde::{Deserialize, Serialize};

use crate::domain::types::{ImageId, ImageIndex, ImageName, ProductId};

/// An image attached to a product.
///
/// The `index` orders images within one product and is only ever used as a
/// filter predicate, never as a sort key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    pub id: ImageId,
    pub product_id: ProductId,
    pub name: ImageName,
    pub index: ImageIndex,
}

/// Information required to attach a new [`Image`] to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewImage {
    pub name: ImageName,
    pub index: ImageIndex,
}
