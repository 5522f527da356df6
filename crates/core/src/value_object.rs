//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `OrderLine { order_reference: "order-1", product: "RED-CHAIR", quantity: 10 }` is a value object
/// - `Batch { reference: "batch-001", .. }` is an entity
///
/// ## Design Constraints
///
/// The trait requires `Eq + Hash` on top of `Clone + Debug` so value objects
/// can be stored in hash sets, where inserting an equal value is a no-op.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Product {
///     sku: Sku,
/// }
///
/// impl ValueObject for Product {}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
