//! Inventory valuation read model.
//!
//! Derived on demand from the warehouse's current products (quantity × price).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::product::{Price, Product};

/// Value of a single stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationLine {
    pub name: String,
    pub quantity: u64,
    pub price: Price,
    /// quantity × price
    pub value: Decimal,
}

/// Totals across the whole warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub product_count: usize,
    pub total_quantity: u128,
    pub total_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    pub lines: Vec<ValuationLine>,
    pub summary: ValuationSummary,
}

impl Valuation {
    /// Value every product exactly.
    ///
    /// The warehouse refuses stock whose value would not fit a `Decimal`, so an
    /// overflow here means that invariant was broken.
    pub fn of(products: &[Product]) -> DomainResult<Self> {
        let mut lines = Vec::with_capacity(products.len());
        let mut total_quantity: u128 = 0;
        let mut total_value = Decimal::ZERO;

        for p in products {
            let value = p.checked_value().ok_or_else(|| overflow(p.name()))?;
            total_quantity = total_quantity
                .checked_add(u128::from(p.quantity()))
                .ok_or_else(|| overflow(p.name()))?;
            total_value = total_value
                .checked_add(value)
                .ok_or_else(|| overflow(p.name()))?;

            lines.push(ValuationLine {
                name: p.name().to_string(),
                quantity: p.quantity(),
                price: p.price(),
                value,
            });
        }

        Ok(Self {
            summary: ValuationSummary {
                product_count: lines.len(),
                total_quantity,
                total_value,
            },
            lines,
        })
    }
}

fn overflow(name: &str) -> DomainError {
    DomainError::invariant(format!("stock value overflows at '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Warehouse;

    #[test]
    fn summary_totals_every_line() {
        let mut warehouse = Warehouse::default();
        warehouse.add("Bolt", 10, Decimal::new(25, 1)).unwrap();
        warehouse.add("Nut", 4, Decimal::new(5, 1)).unwrap();

        let valuation = warehouse.valuation().unwrap();

        assert_eq!(valuation.lines.len(), 2);
        assert_eq!(valuation.lines[0].value, Decimal::new(25, 0));
        assert_eq!(valuation.lines[1].value, Decimal::new(2, 0));
        assert_eq!(
            valuation.summary,
            ValuationSummary {
                product_count: 2,
                total_quantity: 14,
                total_value: Decimal::new(27, 0),
            }
        );
    }

    #[test]
    fn empty_warehouse_has_zero_summary() {
        let valuation = Valuation::of(&[]).unwrap();
        assert!(valuation.lines.is_empty());
        assert_eq!(valuation.summary.total_value, Decimal::ZERO);
        assert_eq!(valuation.summary.total_quantity, 0);
    }

    #[test]
    fn overflowing_stock_is_an_invariant_violation() {
        let ingot = Product::new("Ingot".to_string(), 2, Price::new(Decimal::MAX).unwrap());

        match Valuation::of(&[ingot]).unwrap_err() {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("Ingot")),
            other => panic!("Expected InvariantViolation, got {other:?}"),
        }
    }
}
