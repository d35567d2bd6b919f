#![allow(dead_code)]

use fruit_compute::application::engine::ComputeEngine;
use fruit_compute::domain::ports::PriceStoreRef;
use fruit_compute::infrastructure::in_memory::InMemoryPriceStore;
use fruit_compute::infrastructure::registry::{ENGINE_SERVICE, ServiceRegistry};
use fruit_compute::interfaces::server;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds an engine over a fresh in-memory catalog.
pub fn fresh_engine() -> Arc<ComputeEngine> {
    let store: PriceStoreRef = Arc::new(InMemoryPriceStore::new());
    Arc::new(ComputeEngine::new(store))
}

/// Starts an engine server on an ephemeral port and returns its address.
pub async fn spawn_engine() -> SocketAddr {
    let engine = fresh_engine();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, engine));
    addr
}

/// Starts an engine server and registers it under the well-known name.
pub async fn spawn_registered_engine() -> (SocketAddr, Arc<ServiceRegistry>) {
    let addr = spawn_engine().await;
    let registry = Arc::new(ServiceRegistry::new());
    registry.register(ENGINE_SERVICE, addr).await;
    (addr, registry)
}
