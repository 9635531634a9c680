//! Warehouse inventory domain module.
//!
//! This crate contains business rules for stocked products, implemented purely
//! as deterministic domain logic (no IO, no GUI, no storage).

pub mod product;
pub mod valuation;
pub mod warehouse;

pub use product::{Price, Product};
pub use valuation::{Valuation, ValuationLine, ValuationSummary};
pub use warehouse::{
    AddProduct, AdjustQuantity, ProductAdded, ProductRemoved, QuantityAdjusted, RemoveProduct,
    Warehouse, WarehouseCommand, WarehouseEvent, WarehouseId,
};
