//! Console stand-ins for the client subsystems the router talks to.

use std::io::Write;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chatline_core::{ClientEffect, ClientEffects, MapInfo, SubsystemCall, SubsystemGateway};
use chatline_protocol::{ProtocolMessage, Transport};
use tracing::info;

/// Writes every outbound message as one JSON line.
pub struct JsonLineTransport {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonLineTransport {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

#[async_trait]
impl Transport for JsonLineTransport {
    fn name(&self) -> &str {
        "json-lines"
    }

    async fn deliver(&self, message: &ProtocolMessage) -> Result<()> {
        let line = serde_json::to_string(message)?;
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("transport writer poisoned"))?;
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

/// Logs sound, music, and label effects.
pub struct LoggedEffects;

impl ClientEffects for LoggedEffects {
    fn apply(&self, effect: ClientEffect) {
        info!(?effect, "Client effect");
    }
}

/// Logs subsystem entry points instead of opening their UIs.
pub struct LoggedSubsystems;

impl SubsystemGateway for LoggedSubsystems {
    fn invoke(&self, call: SubsystemCall) {
        info!(
            subsystem = ?call.subsystem(),
            argument = call.argument().unwrap_or(""),
            "Subsystem call"
        );
    }
}

/// A single fixed map.
pub struct StaticMap {
    name: String,
}

impl StaticMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MapInfo for StaticMap {
    fn current_map(&self) -> String {
        self.name.clone()
    }

    fn display_name(&self, map: &str) -> String {
        let mut chars = map.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
