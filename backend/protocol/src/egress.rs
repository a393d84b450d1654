//! Fire-and-forget handoff of outbound messages to the transport.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::message::ProtocolMessage;

/// Sending half handed to the command router.
///
/// `send` returns as soon as the message is queued; the router never learns
/// whether it was delivered.
#[derive(Debug, Clone)]
pub struct NetworkEgress {
    tx: mpsc::UnboundedSender<ProtocolMessage>,
}

impl NetworkEgress {
    /// Create an egress and the receiver a transport pump drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProtocolMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, message: ProtocolMessage) {
        let name = message.name();
        match self.tx.send(message) {
            Ok(()) => debug!(packet = name, "Queued outbound packet"),
            Err(_) => warn!(packet = name, "Transport closed; dropping outbound packet"),
        }
    }
}

/// Delivers queued messages to the server.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Human-readable name of this transport.
    fn name(&self) -> &str;

    async fn deliver(&self, message: &ProtocolMessage) -> Result<()>;
}

/// Drain `rx` into `transport` in FIFO order until every egress is dropped.
pub fn spawn_transport(
    mut rx: mpsc::UnboundedReceiver<ProtocolMessage>,
    transport: Arc<dyn Transport>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(transport = transport.name(), "Transport pump started");
        while let Some(message) = rx.recv().await {
            if let Err(e) = transport.deliver(&message).await {
                warn!(
                    transport = transport.name(),
                    packet = message.name(),
                    error = %e,
                    "Delivery failed"
                );
            }
        }
        info!(transport = transport.name(), "Transport pump stopped");
    })
}
