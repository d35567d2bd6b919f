use crate::domain::command::{Command, CommandOutput, CostOutcome};
use crate::domain::ports::PriceStoreRef;
use crate::domain::price::{PriceEntry, Quantity};
use crate::domain::receipt::Receipt;
use crate::error::{EngineError, Result};
use rust_decimal::Decimal;
use tracing::info;

/// The compute engine: the one shared entry point for catalog mutations,
/// cost calculation and receipt generation.
///
/// Constructed once per process and passed by handle; callers never look the
/// engine up through a directory in-process. All operations funnel through
/// [`ComputeEngine::execute`], so the direct methods and the generic command
/// envelope produce identical catalog effects by construction.
pub struct ComputeEngine {
    store: PriceStoreRef,
}

impl ComputeEngine {
    pub fn new(store: PriceStoreRef) -> Self {
        Self { store }
    }

    /// Executes one command against the catalog.
    ///
    /// This is the single dispatch path. Each command runs at most once; a
    /// failed command leaves the catalog exactly as it was.
    pub async fn execute(&self, command: Command) -> Result<CommandOutput> {
        match command {
            Command::AddPrice { name, price } => {
                let entry = PriceEntry::new(name, price)?;
                let name = entry.name.clone();
                self.store.put(entry).await?;
                info!(%name, %price, "price added");
                Ok(CommandOutput::Applied)
            }
            Command::UpdatePrice { name, price } => {
                let entry = PriceEntry::new(name, price)?;
                if self.store.update(entry.clone()).await? {
                    info!(name = %entry.name, price = %price, "price updated");
                    Ok(CommandOutput::Applied)
                } else {
                    Err(EngineError::NotFound(entry.name))
                }
            }
            Command::DeletePrice { name } => {
                Self::check_name(&name)?;
                let removed = self.store.remove(&name).await?;
                info!(name = %name, removed, "price deleted");
                Ok(CommandOutput::Applied)
            }
            Command::CalculateCost { name, quantity } => {
                match self.cost_of(&name, quantity).await? {
                    CostOutcome::Found(total) => Ok(CommandOutput::Cost(total)),
                    CostOutcome::NotFound => Err(EngineError::NotFound(name)),
                }
            }
        }
    }

    /// Inserts or overwrites the price for an item.
    pub async fn add_price(&self, name: impl Into<String>, price: Decimal) -> Result<()> {
        self.execute(Command::AddPrice {
            name: name.into(),
            price,
        })
        .await
        .map(|_| ())
    }

    /// Changes the price of an existing item; `NotFound` if it was never
    /// added.
    pub async fn update_price(&self, name: impl Into<String>, price: Decimal) -> Result<()> {
        self.execute(Command::UpdatePrice {
            name: name.into(),
            price,
        })
        .await
        .map(|_| ())
    }

    /// Removes an item; removing an absent item is a no-op.
    pub async fn delete_price(&self, name: impl Into<String>) -> Result<()> {
        self.execute(Command::DeletePrice { name: name.into() })
            .await
            .map(|_| ())
    }

    /// Computes `price * quantity` as an explicit outcome: a missing item is
    /// `NotFound`, never a sentinel value, so a free item prices as
    /// `Found(0)`.
    pub async fn calculate_cost(
        &self,
        name: impl Into<String>,
        quantity: u32,
    ) -> Result<CostOutcome> {
        self.cost_of(&name.into(), quantity).await
    }

    /// The one cost computation both invocation paths share.
    async fn cost_of(&self, name: &str, quantity: u32) -> Result<CostOutcome> {
        Self::check_name(name)?;
        let quantity = Quantity::new(quantity)?;
        match self.store.get(name).await? {
            Some(price) => {
                let total = price
                    .value()
                    .checked_mul(Decimal::from(quantity.get()))
                    .ok_or_else(|| {
                        EngineError::Validation(
                            "total cost exceeds the representable range".to_string(),
                        )
                    })?;
                Ok(CostOutcome::Found(total))
            }
            None => Ok(CostOutcome::NotFound),
        }
    }

    /// Builds a receipt for an already-computed total. Underpayment is
    /// rejected with `InsufficientPayment`.
    pub async fn generate_receipt(
        &self,
        cashier: impl Into<String>,
        total_cost: Decimal,
        amount_given: Decimal,
    ) -> Result<Receipt> {
        Receipt::new(cashier, total_cost, amount_given)
    }

    /// Prices an item and builds the receipt in one step.
    pub async fn checkout(
        &self,
        name: impl Into<String>,
        quantity: u32,
        cashier: impl Into<String>,
        amount_given: Decimal,
    ) -> Result<Receipt> {
        let name = name.into();
        match self.calculate_cost(name.clone(), quantity).await? {
            CostOutcome::Found(total) => Receipt::new(cashier, total, amount_given),
            CostOutcome::NotFound => Err(EngineError::NotFound(name)),
        }
    }

    fn check_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            Err(EngineError::Validation(
                "item name must not be empty".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
