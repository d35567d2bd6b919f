use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::sync::RwLock;

/// Well-known name under which the engine registers its endpoint.
pub const ENGINE_SERVICE: &str = "FruitComputeEngine";

/// Process-topology directory mapping a logical service name to a live
/// endpoint address.
///
/// This exists only at the service-discovery boundary: in-process callers
/// receive the engine handle by construction, remote callers resolve a name
/// here before connecting. A name is registered once per engine lifetime; a
/// re-registration overwrites, which is what a hot-swapped engine process
/// does.
#[derive(Default)]
pub struct ServiceRegistry {
    endpoints: RwLock<HashMap<String, SocketAddr>>,
}

impl ServiceRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an endpoint under a name, overwriting any previous binding.
    pub async fn register(&self, name: impl Into<String>, addr: SocketAddr) {
        let mut endpoints = self.endpoints.write().await;
        endpoints.insert(name.into(), addr);
    }

    /// Resolves a name to its endpoint. `None` means the service is not
    /// registered; callers surface that as `ServiceUnavailable`, distinct
    /// from any domain error.
    pub async fn resolve(&self, name: &str) -> Option<SocketAddr> {
        let endpoints = self.endpoints.read().await;
        endpoints.get(name).copied()
    }

    /// Removes a binding.
    pub async fn deregister(&self, name: &str) {
        let mut endpoints = self.endpoints.write().await;
        endpoints.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(port: u16) -> SocketAddr {
        format!("127.0.0.1:{port}").parse().unwrap()
    }

    #[tokio::test]
    async fn test_register_and_resolve() {
        let registry = ServiceRegistry::new();
        registry.register(ENGINE_SERVICE, addr(1099)).await;
        assert_eq!(registry.resolve(ENGINE_SERVICE).await, Some(addr(1099)));
        assert_eq!(registry.resolve("OtherService").await, None);
    }

    #[tokio::test]
    async fn test_reregistration_overwrites() {
        let registry = ServiceRegistry::new();
        registry.register(ENGINE_SERVICE, addr(1099)).await;
        registry.register(ENGINE_SERVICE, addr(2099)).await;
        assert_eq!(registry.resolve(ENGINE_SERVICE).await, Some(addr(2099)));
    }

    #[tokio::test]
    async fn test_deregister() {
        let registry = ServiceRegistry::new();
        registry.register(ENGINE_SERVICE, addr(1099)).await;
        registry.deregister(ENGINE_SERVICE).await;
        assert_eq!(registry.resolve(ENGINE_SERVICE).await, None);
    }
}
