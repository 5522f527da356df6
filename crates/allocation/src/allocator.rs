use stockroom_core::BatchReference;

use crate::batch::Batch;
use crate::error::{AllocationError, AllocationResult};
use crate::order::OrderLine;

/// Allocate `line` to the best batch that can take all of it.
///
/// Batches are ranked by [`Batch::priority`] (warehouse stock, then the
/// earliest shipment); ties keep their input order. The first batch in that
/// ranking that can allocate the line gets it, and its reference is returned.
///
/// The caller's collection order is left as is. On
/// [`AllocationError::OutOfStock`] no batch is touched.
///
/// Lines are never split across batches.
#[tracing::instrument(
    level = "debug",
    skip(line, batches),
    fields(order = %line.order_reference(), sku = %line.sku(), quantity = line.quantity())
)]
pub fn allocate<'a, I>(line: &OrderLine, batches: I) -> AllocationResult<BatchReference>
where
    I: IntoIterator<Item = &'a mut Batch>,
{
    let mut ranked: Vec<&mut Batch> = batches.into_iter().collect();
    // Stable: equal priorities stay in caller order.
    ranked.sort_by_key(|batch| batch.priority());

    let Some(batch) = ranked.into_iter().find(|batch| batch.can_allocate(line)) else {
        tracing::warn!("no batch can take order line");
        return Err(AllocationError::out_of_stock(line.sku().clone()));
    };

    batch.allocate(line);
    tracing::info!(batch = %batch.reference(), "order line allocated");
    Ok(batch.reference().clone())
}
