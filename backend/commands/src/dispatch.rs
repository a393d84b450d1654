/// Command dispatch: route detected commands to handler values.
use std::collections::HashMap;
use std::sync::Arc;

use chatline_core::{
    BonusWindow, ClientEffects, Clock, EmotionTable, MapInfo, MessageTable, PreferenceStore,
    Preferences, Session, SubsystemGateway,
};
use chatline_protocol::{NetworkEgress, PacketVersion};
use serde::Serialize;
use tracing::debug;

use crate::types::CommandInvocation;

// ---------------------------------------------------------------------------
// State and collaborators
// ---------------------------------------------------------------------------

/// Mutable state the router owns for the whole client session.
#[derive(Debug, Clone)]
pub struct ClientState {
    pub session: Session,
    pub prefs: Preferences,
    pub packet_version: PacketVersion,
    pub bonus_window: BonusWindow,
}

impl ClientState {
    pub fn new(packet_version: PacketVersion) -> Self {
        Self {
            session: Session::new(),
            prefs: Preferences::default(),
            packet_version,
            bonus_window: BonusWindow::default(),
        }
    }
}

/// Everything outside the router that handlers call into.
#[derive(Clone)]
pub struct Collaborators {
    pub messages: Arc<dyn MessageTable>,
    pub emotions: Arc<dyn EmotionTable>,
    pub store: Arc<dyn PreferenceStore>,
    pub effects: Arc<dyn ClientEffects>,
    pub subsystems: Arc<dyn SubsystemGateway>,
    pub map: Arc<dyn MapInfo>,
    pub clock: Arc<dyn Clock>,
    pub egress: NetworkEgress,
}

/// Context passed to every command handler.
pub struct CommandContext<'a> {
    pub state: &'a mut ClientState,
    pub env: &'a Collaborators,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Info,
}

/// One line for the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    pub kind: LineKind,
    /// Also shown under the public log filter.
    pub public_log: bool,
}

/// The lines a command writes back to the chat log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    pub lines: Vec<StatusLine>,
}

impl CommandResponse {
    /// No output.
    pub fn silent() -> Self {
        Self::default()
    }

    /// One info line tagged for the public log.
    pub fn public(text: impl Into<String>) -> Self {
        let mut r = Self::silent();
        r.push(text, true);
        r
    }

    /// One info line kept out of the public log.
    pub fn local(text: impl Into<String>) -> Self {
        let mut r = Self::silent();
        r.push(text, false);
        r
    }

    pub fn push(&mut self, text: impl Into<String>, public_log: bool) {
        self.lines.push(StatusLine {
            text: text.into(),
            kind: LineKind::Info,
            public_log,
        });
    }

    /// Line texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

/// What a handler did with an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Handled(CommandResponse),
    /// The invocation was not usable (e.g. missing argument); the router
    /// continues with its fallback stages.
    FallThrough,
}

// ---------------------------------------------------------------------------
// Handler trait
// ---------------------------------------------------------------------------

pub trait CommandHandler: Send + Sync {
    fn handle(&self, ctx: &mut CommandContext<'_>, inv: &CommandInvocation) -> Outcome;
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

pub struct CommandDispatcher {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    pub fn register(&mut self, key: impl Into<String>, handler: Arc<dyn CommandHandler>) {
        self.handlers.insert(key.into(), handler);
    }

    pub fn has_handler(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Run the handler registered for `inv.key`. A missing handler falls through.
    pub fn dispatch(&self, ctx: &mut CommandContext<'_>, inv: &CommandInvocation) -> Outcome {
        match self.handlers.get(&inv.key) {
            Some(handler) => {
                debug!(key = %inv.key, keyword = %inv.keyword, "Dispatching command");
                handler.handle(ctx, inv)
            }
            None => {
                debug!(key = %inv.key, "No handler registered");
                Outcome::FallThrough
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
