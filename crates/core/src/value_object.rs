//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances holding the same attributes are
/// interchangeable. In this workspace that covers things like a display color or
/// the min/max stock thresholds of a product.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct StockThresholds { min: u32, max: u32 }
///
/// impl ValueObject for StockThresholds {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
