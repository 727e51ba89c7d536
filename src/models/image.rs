use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::image::Image as DomainImage;
use crate::domain::types::{ImageId, ImageIndex, ImageName, ProductId, TypeConstraintError};

/// Diesel model representing the `images` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::images)]
pub struct Image {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub index: i32,
}

impl TryFrom<Image> for DomainImage {
    type Error = TypeConstraintError;

    fn try_from(image: Image) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ImageId::new(image.id)?,
            product_id: ProductId::new(image.product_id)?,
            name: ImageName::new(image.name)?,
            index: ImageIndex::new(image.index)?,
        })
    }
}

/// Insertable form of [`Image`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::images)]
pub struct NewImage {
    pub product_id: i32,
    pub name: String,
    pub index: i32,
}

/// Joined image/product row produced by the raw and builder-generated
/// projection queries.
#[derive(Debug, Clone, QueryableByName)]
pub struct ImageProductRow {
    #[diesel(sql_type = Text)]
    pub image_name: String,
    #[diesel(sql_type = Text)]
    pub product_name: String,
}
