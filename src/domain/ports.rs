use super::price::{Price, PriceEntry};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Shared handle to the catalog store.
pub type PriceStoreRef = Arc<dyn PriceStore>;

/// The catalog store seam.
///
/// Implementations must be safe under true parallelism: no caller may ever
/// observe a half-written entry, and for a single key the effects of
/// concurrent mutations are serializable.
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Inserts the entry, overwriting any previous price for the same name.
    async fn put(&self, entry: PriceEntry) -> Result<()>;

    /// Atomically replaces the price of an existing entry. Returns `false`
    /// when the name is absent, leaving the catalog untouched.
    async fn update(&self, entry: PriceEntry) -> Result<bool>;

    /// Removes the entry if present. Removing an absent name is a no-op
    /// reported as `false`, not a failure.
    async fn remove(&self, name: &str) -> Result<bool>;

    /// Read-only lookup.
    async fn get(&self, name: &str) -> Result<Option<Price>>;

    /// Consistent snapshot of the whole catalog.
    async fn entries(&self) -> Result<Vec<PriceEntry>>;
}
