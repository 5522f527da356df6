use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, OrderReference, Sku, ValueObject};

use crate::product::Product;

/// Order line: one product and quantity requested by one order.
///
/// Immutable value object. Equal (and hashed) by all three fields, so the same
/// line allocated twice to a batch counts once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "OrderLineRecord")]
pub struct OrderLine {
    order_reference: OrderReference,
    product: Product,
    quantity: i64,
}

impl OrderLine {
    pub fn new(
        order_reference: OrderReference,
        product: Product,
        quantity: i64,
    ) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self {
            order_reference,
            product,
            quantity,
        })
    }

    pub fn order_reference(&self) -> &OrderReference {
        &self.order_reference
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn sku(&self) -> &Sku {
        self.product.sku()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl ValueObject for OrderLine {}

#[derive(Deserialize)]
struct OrderLineRecord {
    order_reference: OrderReference,
    product: Product,
    quantity: i64,
}

impl TryFrom<OrderLineRecord> for OrderLine {
    type Error = DomainError;

    fn try_from(r: OrderLineRecord) -> Result<Self, Self::Error> {
        Self::new(r.order_reference, r.product, r.quantity)
    }
}

/// Customer order: a reference and its lines, in the order they were taken.
///
/// Allocation works line by line; the order only groups them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    reference: OrderReference,
    lines: Vec<OrderLine>,
}

impl Order {
    /// Every line must carry the order's own reference.
    pub fn new(reference: OrderReference, lines: Vec<OrderLine>) -> DomainResult<Self> {
        if let Some(line) = lines.iter().find(|l| l.order_reference != reference) {
            return Err(DomainError::invariant(format!(
                "line for order {} cannot belong to order {}",
                line.order_reference, reference
            )));
        }
        Ok(Self { reference, lines })
    }

    pub fn reference(&self) -> &OrderReference {
        &self.reference
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(OrderLine::quantity).sum()
    }
}

#[derive(Deserialize)]
struct OrderRecord {
    reference: OrderReference,
    lines: Vec<OrderLine>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = DomainError;

    fn try_from(r: OrderRecord) -> Result<Self, Self::Error> {
        Self::new(r.reference, r.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn test_order_ref(raw: &str) -> OrderReference {
        OrderReference::new(raw).unwrap()
    }

    fn test_product(sku: &str) -> Product {
        Product::try_from(sku).unwrap()
    }

    #[test]
    fn order_line_requires_positive_quantity() {
        for quantity in [0, -1] {
            let err = OrderLine::new(test_order_ref("order-1"), test_product("RED-CHAIR"), quantity)
                .unwrap_err();
            match err {
                DomainError::Validation(msg) if msg.contains("quantity must be positive") => {}
                _ => panic!("Expected Validation error for quantity {quantity}"),
            }
        }
    }

    #[test]
    fn order_lines_compare_by_all_fields() {
        let line = |order: &str, sku: &str, qty: i64| {
            OrderLine::new(test_order_ref(order), test_product(sku), qty).unwrap()
        };

        assert_eq!(line("o1", "RED-CHAIR", 10), line("o1", "RED-CHAIR", 10));
        assert_ne!(line("o1", "RED-CHAIR", 10), line("o2", "RED-CHAIR", 10));
        assert_ne!(line("o1", "RED-CHAIR", 10), line("o1", "BLUE-CHAIR", 10));
        assert_ne!(line("o1", "RED-CHAIR", 10), line("o1", "RED-CHAIR", 11));

        let set: HashSet<_> = [line("o1", "RED-CHAIR", 10), line("o1", "RED-CHAIR", 10)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn order_rejects_lines_of_other_orders() {
        let own = OrderLine::new(test_order_ref("order-1"), test_product("RED-CHAIR"), 1).unwrap();
        let foreign =
            OrderLine::new(test_order_ref("order-2"), test_product("RED-CHAIR"), 1).unwrap();

        let err = Order::new(test_order_ref("order-1"), vec![own, foreign]).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("order-2") => {}
            _ => panic!("Expected InvariantViolation for foreign line"),
        }
    }

    #[test]
    fn order_keeps_line_order_and_sums_quantities() {
        let reference = test_order_ref("order-1");
        let lines = vec![
            OrderLine::new(reference.clone(), test_product("RED-CHAIR"), 2).unwrap(),
            OrderLine::new(reference.clone(), test_product("TASTELESS-LAMP"), 5).unwrap(),
        ];
        let order = Order::new(reference, lines.clone()).unwrap();

        assert_eq!(order.lines(), lines.as_slice());
        assert_eq!(order.total_quantity(), 7);
    }

    #[test]
    fn deserializing_validates_lines() {
        let json = r#"{"order_reference":"order-1","product":"RED-CHAIR","quantity":0}"#;
        assert!(serde_json::from_str::<OrderLine>(json).is_err());

        let json = r#"{"order_reference":"order-1","product":"RED-CHAIR","quantity":3}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.quantity(), 3);
        assert_eq!(line.sku(), &Sku::new("RED-CHAIR").unwrap());
    }
}
