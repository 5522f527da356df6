//! Allocation outcomes callers are expected to handle.

use thiserror::Error;

use stockroom_core::Sku;

pub type AllocationResult<T> = Result<T, AllocationError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// No batch could take the whole line: none supplied, none for the
    /// product, or none with enough stock left.
    #[error("out of stock for product {0}")]
    OutOfStock(Sku),
}

impl AllocationError {
    pub fn out_of_stock(sku: Sku) -> Self {
        Self::OutOfStock(sku)
    }

    /// The product that could not be supplied.
    pub fn sku(&self) -> &Sku {
        match self {
            AllocationError::OutOfStock(sku) => sku,
        }
    }
}
