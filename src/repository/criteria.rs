//! Runtime-composed query predicates for product searches.
//!
//! A [`ProductCriteria`] is an explicit list of typed predicates combined
//! with logical AND. The Diesel-backed repository interprets each predicate
//! into a filter on a boxed query; the in-memory test repository interprets
//! the same list over plain vectors.

use crate::domain::types::ProductCode;

/// A single typed predicate over products.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductPredicate {
    /// Case-insensitive substring match on the product name.
    NameContains(String),
    /// The product owns at least one image with an ordering key above the
    /// given value.
    HasImageAboveIndex(i32),
    /// Exact match on the unique business code.
    CodeEquals(ProductCode),
    /// The warehouse holds strictly more units than the given value.
    StockedAbove(i32),
}

/// An AND-combined list of [`ProductPredicate`]s built at runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCriteria {
    predicates: Vec<ProductPredicate>,
}

impl ProductCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.predicates
            .push(ProductPredicate::NameContains(needle.into()));
        self
    }

    pub fn with_image_above_index(mut self, index: i32) -> Self {
        self.predicates
            .push(ProductPredicate::HasImageAboveIndex(index));
        self
    }

    pub fn code_equals(mut self, code: ProductCode) -> Self {
        self.predicates.push(ProductPredicate::CodeEquals(code));
        self
    }

    pub fn stocked_above(mut self, quantity: i32) -> Self {
        self.predicates
            .push(ProductPredicate::StockedAbove(quantity));
        self
    }

    /// Predicates in the order they were added.
    pub fn predicates(&self) -> &[ProductPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
