//! TCP service loop for the engine.
//!
//! One tokio task per connection, one JSON request per line. A malformed
//! line is answered with a `protocol` error and the connection stays open;
//! the caller decides whether to keep going.

use crate::application::engine::ComputeEngine;
use crate::domain::command::CommandOutput;
use crate::error::Result;
use crate::interfaces::wire::{Request, Response, WireError};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// Accepts connections until the listener fails, serving each on its own
/// task against the shared engine.
pub async fn serve(listener: TcpListener, engine: Arc<ComputeEngine>) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        debug!(%peer, "connection accepted");
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, engine).await {
                warn!(%peer, error = %e, "connection closed with error");
            } else {
                debug!(%peer, "connection closed");
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, engine: Arc<ComputeEngine>) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => dispatch(&engine, request).await,
            Err(e) => Response::Error(WireError::Protocol {
                message: format!("malformed request: {e}"),
            }),
        };
        let mut payload = serde_json::to_vec(&response)?;
        payload.push(b'\n');
        write_half.write_all(&payload).await?;
    }
    Ok(())
}

async fn dispatch(engine: &ComputeEngine, request: Request) -> Response {
    let result = match request {
        Request::Execute(command) => engine.execute(command).await.map(|output| match output {
            CommandOutput::Applied => Response::Ok,
            CommandOutput::Cost(total) => Response::Cost(total),
        }),
        Request::GenerateReceipt {
            cashier,
            total_cost,
            amount_given,
        } => engine
            .generate_receipt(cashier, total_cost, amount_given)
            .await
            .map(Response::Receipt),
        Request::Checkout {
            name,
            quantity,
            cashier,
            amount_given,
        } => engine
            .checkout(name, quantity, cashier, amount_given)
            .await
            .map(Response::Receipt),
    };
    match result {
        Ok(response) => response,
        Err(e) => {
            info!(error = %e, "request failed");
            Response::Error(WireError::from(&e))
        }
    }
}
