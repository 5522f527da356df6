//! Stock allocation domain module.
//!
//! Decides which batch of stock fulfils an order line: warehouse stock before
//! shipments, earlier shipments before later ones, and never more than a batch
//! has left. Pure domain logic (no IO, no storage, no locking); callers load
//! batches, call [`allocate`], and persist the result.

pub mod allocator;
pub mod batch;
pub mod error;
pub mod order;
pub mod product;

pub use allocator::allocate;
pub use batch::{Batch, Priority};
pub use error::{AllocationError, AllocationResult};
pub use order::{Order, OrderLine};
pub use product::Product;
