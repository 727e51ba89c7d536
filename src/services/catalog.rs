//! Catalog lookups exposed to application callers.
//!
//! `CatalogService` stays a thin wrapper: it records the invocation, builds
//! the criteria, delegates to the repository and converts errors so callers
//! never see repository internals.

use crate::domain::product::Product;
use crate::domain::types::ProductCode;
use crate::dto::image_product::ImageProductDto;
use crate::repository::criteria::ProductCriteria;
use crate::repository::errors::RepositoryError;
use crate::repository::{ImageReader, ProductReader};
use crate::services::calls::CallCounter;
use crate::services::{ServiceError, ServiceResult};

/// Service façade over a catalog repository.
///
/// Every public lookup records one invocation on the shared counter before
/// delegating, so callers can observe how many requests an instance served.
pub struct CatalogService<R> {
    repo: R,
    calls: CallCounter,
}

impl<R> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            calls: CallCounter::new(),
        }
    }

    /// Number of service calls handled by this instance.
    pub fn registered_calls(&self) -> usize {
        self.calls.registered_calls()
    }
}

impl<R> CatalogService<R>
where
    R: ProductReader + ImageReader,
{
    /// Products whose name contains `needle` and that own at least one image
    /// with an ordering key above `min_image_index`.
    pub fn search_products(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> ServiceResult<Vec<Product>> {
        self.calls.increment();

        let criteria = ProductCriteria::new()
            .name_contains(needle)
            .with_image_above_index(min_image_index);

        self.repo.search_products(&criteria).map_err(|e| {
            log::error!("Failed to search products: {e}");
            ServiceError::from(e)
        })
    }

    /// The unique product with the given code stocked above `min_quantity`.
    pub fn find_product_in_stock(
        &self,
        code: &ProductCode,
        min_quantity: i32,
    ) -> ServiceResult<Product> {
        self.calls.increment();

        self.repo
            .get_product_in_stock(code, min_quantity)
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::NotFound,
                RepositoryError::NonUnique => ServiceError::NonUnique,
                other => {
                    log::error!("Failed to load product {code}: {other}");
                    ServiceError::from(other)
                }
            })
    }

    /// Distinct image/product name pairs ordered by image name.
    pub fn list_image_products(
        &self,
        needle: &str,
        min_image_index: i32,
    ) -> ServiceResult<Vec<ImageProductDto>> {
        self.calls.increment();

        self.repo
            .list_image_products(needle, min_image_index)
            .map_err(|e| {
                log::error!("Failed to list image projections: {e}");
                ServiceError::from(e)
            })
    }
}
