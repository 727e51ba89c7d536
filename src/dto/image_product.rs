use serde::{Deserialize, Serialize};

use crate::models::image::ImageProductRow;

/// Flattened read-only projection of an image joined to its product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProductDto {
    pub image_name: String,
    pub product_name: String,
}

impl From<ImageProductRow> for ImageProductDto {
    fn from(row: ImageProductRow) -> Self {
        Self {
            image_name: row.image_name,
            product_name: row.product_name,
        }
    }
}

impl From<(String, String)> for ImageProductDto {
    fn from((image_name, product_name): (String, String)) -> Self {
        Self {
            image_name,
            product_name,
        }
    }
}
