use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{BatchReference, DomainError, DomainResult, Entity};

use crate::order::OrderLine;
use crate::product::Product;

/// Where a batch ranks when choosing stock for an order line.
///
/// Variant order is the ranking: stock already in the warehouse first, then
/// shipments by arrival date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    InWarehouse,
    Shipment(NaiveDate),
}

impl From<Option<NaiveDate>> for Priority {
    fn from(eta: Option<NaiveDate>) -> Self {
        match eta {
            None => Priority::InWarehouse,
            Some(date) => Priority::Shipment(date),
        }
    }
}

/// Entity: Batch.
///
/// A quantity of one product, either in the warehouse (`eta == None`) or
/// expected on a shipment. Available stock is always derived from the set of
/// allocated lines, never stored.
///
/// Equality and hashing use the reference only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BatchRecord", into = "BatchRecord")]
pub struct Batch {
    reference: BatchReference,
    product: Product,
    initial_quantity: i64,
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    pub fn new(
        reference: BatchReference,
        product: Product,
        quantity: i64,
        eta: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        if quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        Ok(Self {
            reference,
            product,
            initial_quantity: quantity,
            eta,
            allocations: HashSet::new(),
        })
    }

    pub fn reference(&self) -> &BatchReference {
        &self.reference
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    pub fn is_in_warehouse(&self) -> bool {
        self.eta.is_none()
    }

    pub fn initial_quantity(&self) -> i64 {
        self.initial_quantity
    }

    pub fn allocated_quantity(&self) -> i64 {
        self.allocations.iter().map(OrderLine::quantity).sum()
    }

    pub fn available_quantity(&self) -> i64 {
        self.initial_quantity - self.allocated_quantity()
    }

    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        line.product() == &self.product && line.quantity() <= self.available_quantity()
    }

    /// Allocate `line` to this batch.
    ///
    /// Re-allocating a line already held is a no-op. A line the batch cannot
    /// take is ignored rather than rejected; callers pick an eligible batch
    /// first (see [`crate::allocate`]).
    ///
    /// Returns whether the line is allocated to this batch after the call.
    pub fn allocate(&mut self, line: &OrderLine) -> bool {
        if self.allocations.contains(line) {
            return true;
        }
        if !self.can_allocate(line) {
            tracing::debug!(
                batch = %self.reference,
                order = %line.order_reference(),
                sku = %line.sku(),
                quantity = line.quantity(),
                available = self.available_quantity(),
                "batch cannot take order line; ignoring"
            );
            return false;
        }
        self.allocations.insert(line.clone());
        true
    }

    /// Returns whether `line` was allocated (and is now released).
    pub fn deallocate(&mut self, line: &OrderLine) -> bool {
        self.allocations.remove(line)
    }

    pub fn priority(&self) -> Priority {
        Priority::from(self.eta)
    }

    /// Ranking used when choosing a batch. Not related to equality.
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl Entity for Batch {
    type Id = BatchReference;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl core::hash::Hash for Batch {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

/// Wire shape of a batch. Allocations are sorted so snapshots are stable.
#[derive(Serialize, Deserialize)]
struct BatchRecord {
    reference: BatchReference,
    product: Product,
    quantity: i64,
    eta: Option<NaiveDate>,
    allocations: Vec<OrderLine>,
}

impl From<Batch> for BatchRecord {
    fn from(batch: Batch) -> Self {
        let mut allocations: Vec<OrderLine> = batch.allocations.into_iter().collect();
        allocations.sort();
        Self {
            reference: batch.reference,
            product: batch.product,
            quantity: batch.initial_quantity,
            eta: batch.eta,
            allocations,
        }
    }
}

impl TryFrom<BatchRecord> for Batch {
    type Error = DomainError;

    fn try_from(r: BatchRecord) -> Result<Self, Self::Error> {
        let mut batch = Batch::new(r.reference, r.product, r.quantity, r.eta)?;
        for line in r.allocations {
            if !batch.allocate(&line) {
                return Err(DomainError::invariant(format!(
                    "batch {} cannot hold line for order {} ({} x {})",
                    batch.reference,
                    line.order_reference(),
                    line.quantity(),
                    line.sku()
                )));
            }
        }
        Ok(batch)
    }
}
