use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Aggregate, AggregateRoot, DomainError, DomainResult};
use stockroom_events::Event;

use crate::product::{Price, Product, line_value};
use crate::valuation::Valuation;

/// Warehouse identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(String);

impl WarehouseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Default for WarehouseId {
    fn default() -> Self {
        Self::new("main")
    }
}

impl core::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aggregate root: Warehouse.
///
/// Products are kept in insertion order and looked up by linear scan on name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    id: WarehouseId,
    products: Vec<Product>,
    version: u64,
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::new(WarehouseId::default())
    }
}

impl Warehouse {
    pub fn new(id: WarehouseId) -> Self {
        Self {
            id,
            products: Vec::new(),
            version: 0,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Stock a new product under a name not used yet.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        quantity: u64,
        price: Decimal,
    ) -> DomainResult<()> {
        let command = WarehouseCommand::AddProduct(AddProduct {
            name: name.into(),
            quantity,
            price: Price::new(price)?,
            occurred_at: Utc::now(),
        });
        self.execute(&command).map(|_| ())
    }

    pub fn remove(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let command = WarehouseCommand::RemoveProduct(RemoveProduct {
            name: name.into(),
            occurred_at: Utc::now(),
        });
        self.execute(&command).map(|_| ())
    }

    /// Change a product's stock by `delta` units (negative to take stock out).
    pub fn adjust_quantity(&mut self, name: impl Into<String>, delta: i64) -> DomainResult<()> {
        let command = WarehouseCommand::AdjustQuantity(AdjustQuantity {
            name: name.into(),
            delta,
            occurred_at: Utc::now(),
        });
        self.execute(&command).map(|_| ())
    }

    /// Display lines for every product, in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.products.iter().map(ToString::to_string).collect()
    }

    /// Sum of quantity × price over all products. Zero when empty.
    pub fn total_value(&self) -> DomainResult<Decimal> {
        Ok(self.valuation()?.summary.total_value)
    }

    pub fn valuation(&self) -> DomainResult<Valuation> {
        Valuation::of(&self.products)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name() == name)
    }

    /// Reject stock whose value (or the warehouse total) would not fit a `Decimal`
    /// once `name` holds `quantity` units at `price`.
    fn ensure_valuable(&self, name: &str, quantity: u64, price: Price) -> Result<(), DomainError> {
        let total = self
            .products
            .iter()
            .filter(|p| p.name() != name)
            .try_fold(Decimal::ZERO, |acc, p| {
                p.checked_value().and_then(|v| acc.checked_add(v))
            })
            .and_then(|others| line_value(quantity, price).and_then(|v| others.checked_add(v)));

        match total {
            Some(_) => Ok(()),
            None => Err(DomainError::validation("stock value too large")),
        }
    }
}

impl AggregateRoot for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProduct {
    pub name: String,
    pub quantity: u64,
    pub price: Price,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveProduct {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AdjustQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustQuantity {
    pub name: String,
    pub delta: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarehouseCommand {
    AddProduct(AddProduct),
    RemoveProduct(RemoveProduct),
    AdjustQuantity(AdjustQuantity),
}

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub name: String,
    pub quantity: u64,
    pub price: Price,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityAdjusted.
///
/// Carries the resulting quantity so replay never re-does arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityAdjusted {
    pub name: String,
    pub delta: i64,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarehouseEvent {
    ProductAdded(ProductAdded),
    ProductRemoved(ProductRemoved),
    QuantityAdjusted(QuantityAdjusted),
}

impl Event for WarehouseEvent {
    fn event_type(&self) -> &'static str {
        match self {
            WarehouseEvent::ProductAdded(_) => "warehouse.product.added",
            WarehouseEvent::ProductRemoved(_) => "warehouse.product.removed",
            WarehouseEvent::QuantityAdjusted(_) => "warehouse.product.quantity_adjusted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            WarehouseEvent::ProductAdded(e) => e.occurred_at,
            WarehouseEvent::ProductRemoved(e) => e.occurred_at,
            WarehouseEvent::QuantityAdjusted(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Warehouse {
    type Command = WarehouseCommand;
    type Event = WarehouseEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            WarehouseEvent::ProductAdded(e) => {
                self.products
                    .push(Product::new(e.name.clone(), e.quantity, e.price));
            }
            WarehouseEvent::ProductRemoved(e) => {
                self.products.retain(|p| p.name() != e.name);
            }
            WarehouseEvent::QuantityAdjusted(e) => {
                if let Some(idx) = self.position(&e.name) {
                    self.products[idx].set_quantity(e.quantity);
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            WarehouseCommand::AddProduct(cmd) => self.handle_add(cmd),
            WarehouseCommand::RemoveProduct(cmd) => self.handle_remove(cmd),
            WarehouseCommand::AdjustQuantity(cmd) => self.handle_adjust(cmd),
        }
    }
}

impl Warehouse {
    fn handle_add(&self, cmd: &AddProduct) -> Result<Vec<WarehouseEvent>, DomainError> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.get(name).is_some() {
            return Err(DomainError::duplicate_name(name));
        }
        self.ensure_valuable(name, cmd.quantity, cmd.price)?;

        Ok(vec![WarehouseEvent::ProductAdded(ProductAdded {
            name: name.to_string(),
            quantity: cmd.quantity,
            price: cmd.price,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveProduct) -> Result<Vec<WarehouseEvent>, DomainError> {
        let name = cmd.name.trim();
        if self.get(name).is_none() {
            return Err(DomainError::not_found(name));
        }

        Ok(vec![WarehouseEvent::ProductRemoved(ProductRemoved {
            name: name.to_string(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_adjust(&self, cmd: &AdjustQuantity) -> Result<Vec<WarehouseEvent>, DomainError> {
        let name = cmd.name.trim();
        let product = self
            .get(name)
            .ok_or_else(|| DomainError::not_found(name))?;

        if cmd.delta == 0 {
            return Ok(Vec::new());
        }

        let quantity = match product.quantity().checked_add_signed(cmd.delta) {
            Some(q) => q,
            None if cmd.delta < 0 => {
                return Err(DomainError::insufficient_stock(
                    name,
                    product.quantity(),
                    cmd.delta.unsigned_abs(),
                ));
            }
            None => return Err(DomainError::validation("quantity overflow")),
        };
        self.ensure_valuable(name, quantity, product.price())?;

        Ok(vec![WarehouseEvent::QuantityAdjusted(QuantityAdjusted {
            name: name.to_string(),
            delta: cmd.delta,
            quantity,
            occurred_at: cmd.occurred_at,
        })])
    }
}
