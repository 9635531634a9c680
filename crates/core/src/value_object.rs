//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity: two instances holding the same attributes are
/// the same value. A product's price is a value object; the product itself is an
/// entity keyed by its name.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(Decimal);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
