//! Client-side access to a remote engine.
//!
//! The endpoint is resolved through the [`ServiceRegistry`] when the first
//! call is made; the resulting connection is cached and dropped on any
//! transport failure, so the next call resolves again. That keeps the
//! engine hot-swappable without paying a registry lookup on every call.

use crate::domain::command::{Command, CostOutcome};
use crate::domain::receipt::Receipt;
use crate::error::{EngineError, Result};
use crate::infrastructure::registry::ServiceRegistry;
use crate::interfaces::wire::{Request, Response, WireError};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::Mutex;
use tracing::debug;

struct Connection {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

/// Handle to a named engine service.
pub struct EngineClient {
    registry: Arc<ServiceRegistry>,
    service: String,
    connection: Mutex<Option<Connection>>,
}

impl EngineClient {
    pub fn new(registry: Arc<ServiceRegistry>, service: impl Into<String>) -> Self {
        Self {
            registry,
            service: service.into(),
            connection: Mutex::new(None),
        }
    }

    /// Sends one request and waits for its response line.
    ///
    /// Resolution or transport failure surfaces as `ServiceUnavailable`;
    /// domain failures arrive inside [`Response::Error`].
    pub async fn call(&self, request: &Request) -> Result<Response> {
        let mut guard = self.connection.lock().await;
        let mut connection = match guard.take() {
            Some(connection) => connection,
            None => self.connect().await?,
        };
        match Self::round_trip(&mut connection, request).await {
            Ok(response) => {
                *guard = Some(connection);
                Ok(response)
            }
            // Connection stays invalidated; the next call resolves afresh.
            Err(e) => Err(EngineError::ServiceUnavailable(format!(
                "call to '{}' failed: {e}",
                self.service
            ))),
        }
    }

    async fn connect(&self) -> Result<Connection> {
        let addr = self.registry.resolve(&self.service).await.ok_or_else(|| {
            EngineError::ServiceUnavailable(format!("service '{}' is not registered", self.service))
        })?;
        let stream = TcpStream::connect(addr).await.map_err(|e| {
            EngineError::ServiceUnavailable(format!(
                "cannot reach '{}' at {addr}: {e}",
                self.service
            ))
        })?;
        debug!(service = %self.service, %addr, "connected");
        let (read_half, write_half) = stream.into_split();
        Ok(Connection {
            reader: BufReader::new(read_half),
            writer: write_half,
        })
    }

    async fn round_trip(connection: &mut Connection, request: &Request) -> Result<Response> {
        let mut payload = serde_json::to_vec(request)?;
        payload.push(b'\n');
        connection.writer.write_all(&payload).await?;

        let mut line = String::new();
        let read = connection.reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(EngineError::Protocol(
                "connection closed by engine".to_string(),
            ));
        }
        Ok(serde_json::from_str(&line)?)
    }

    pub async fn add_price(&self, name: impl Into<String>, price: Decimal) -> Result<()> {
        let request = Request::Execute(Command::AddPrice {
            name: name.into(),
            price,
        });
        Self::expect_applied(self.call(&request).await?)
    }

    pub async fn update_price(&self, name: impl Into<String>, price: Decimal) -> Result<()> {
        let request = Request::Execute(Command::UpdatePrice {
            name: name.into(),
            price,
        });
        Self::expect_applied(self.call(&request).await?)
    }

    pub async fn delete_price(&self, name: impl Into<String>) -> Result<()> {
        let request = Request::Execute(Command::DeletePrice { name: name.into() });
        Self::expect_applied(self.call(&request).await?)
    }

    pub async fn calculate_cost(
        &self,
        name: impl Into<String>,
        quantity: u32,
    ) -> Result<CostOutcome> {
        let request = Request::Execute(Command::CalculateCost {
            name: name.into(),
            quantity,
        });
        match self.call(&request).await? {
            Response::Cost(total) => Ok(CostOutcome::Found(total)),
            Response::Error(WireError::NotFound { .. }) => Ok(CostOutcome::NotFound),
            Response::Error(e) => Err(e.into()),
            other => Err(Self::unexpected(other)),
        }
    }

    pub async fn generate_receipt(
        &self,
        cashier: impl Into<String>,
        total_cost: Decimal,
        amount_given: Decimal,
    ) -> Result<Receipt> {
        let request = Request::GenerateReceipt {
            cashier: cashier.into(),
            total_cost,
            amount_given,
        };
        Self::expect_receipt(self.call(&request).await?)
    }

    pub async fn checkout(
        &self,
        name: impl Into<String>,
        quantity: u32,
        cashier: impl Into<String>,
        amount_given: Decimal,
    ) -> Result<Receipt> {
        let request = Request::Checkout {
            name: name.into(),
            quantity,
            cashier: cashier.into(),
            amount_given,
        };
        Self::expect_receipt(self.call(&request).await?)
    }

    fn expect_applied(response: Response) -> Result<()> {
        match response {
            Response::Ok => Ok(()),
            Response::Error(e) => Err(e.into()),
            other => Err(Self::unexpected(other)),
        }
    }

    fn expect_receipt(response: Response) -> Result<Receipt> {
        match response {
            Response::Receipt(receipt) => Ok(receipt),
            Response::Error(e) => Err(e.into()),
            other => Err(Self::unexpected(other)),
        }
    }

    fn unexpected(response: Response) -> EngineError {
        EngineError::Protocol(format!("unexpected response: {response:?}"))
    }
}
