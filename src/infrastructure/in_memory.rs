use crate::domain::ports::PriceStore;
use crate::domain::price::{Price, PriceEntry};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory price catalog.
///
/// Uses `Arc<RwLock<HashMap<String, Price>>>` for shared concurrent access.
/// Every mutation holds the write lock, so per-key operations are
/// linearizable and `entries` sees a consistent snapshot. State lives for
/// the process lifetime only; a restart yields an empty catalog.
#[derive(Default, Clone)]
pub struct InMemoryPriceStore {
    prices: Arc<RwLock<HashMap<String, Price>>>,
}

impl InMemoryPriceStore {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn put(&self, entry: PriceEntry) -> Result<()> {
        let mut prices = self.prices.write().await;
        prices.insert(entry.name, entry.price);
        Ok(())
    }

    async fn update(&self, entry: PriceEntry) -> Result<bool> {
        let mut prices = self.prices.write().await;
        match prices.get_mut(&entry.name) {
            Some(price) => {
                *price = entry.price;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, name: &str) -> Result<bool> {
        let mut prices = self.prices.write().await;
        Ok(prices.remove(name).is_some())
    }

    async fn get(&self, name: &str) -> Result<Option<Price>> {
        let prices = self.prices.read().await;
        Ok(prices.get(name).copied())
    }

    async fn entries(&self) -> Result<Vec<PriceEntry>> {
        let prices = self.prices.read().await;
        Ok(prices
            .iter()
            .map(|(name, price)| PriceEntry {
                name: name.clone(),
                price: *price,
            })
            .collect())
    }
}
