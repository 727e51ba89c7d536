pub mod image_product;
