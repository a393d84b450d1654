//! Recording fakes for router tests.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chatline_core::{
    ChatlineError, ClientEffect, ClientEffects, Clock, MapInfo, MessageCatalog, Namespace,
    PreferenceStore, Preferences, SubsystemCall, SubsystemGateway,
};
use chatline_protocol::{NetworkEgress, PacketVersion, ProtocolMessage};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::dispatch::{ClientState, Collaborators, CommandResponse};
use crate::emotion::EmotionDictionary;
use crate::router::CommandRouter;

#[derive(Default)]
pub struct RecordingStore {
    saves: Mutex<Vec<Namespace>>,
    fail: AtomicBool,
}

impl PreferenceStore for RecordingStore {
    fn save(&self, namespace: Namespace, _prefs: &Preferences) -> Result<(), ChatlineError> {
        self.saves.lock().unwrap().push(namespace);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ChatlineError::Persistence {
                namespace: namespace.to_string(),
                message: "disk full".into(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingEffects {
    applied: Mutex<Vec<ClientEffect>>,
}

impl ClientEffects for RecordingEffects {
    fn apply(&self, effect: ClientEffect) {
        self.applied.lock().unwrap().push(effect);
    }
}

#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<SubsystemCall>>,
}

impl SubsystemGateway for RecordingGateway {
    fn invoke(&self, call: SubsystemCall) {
        self.calls.lock().unwrap().push(call);
    }
}

pub struct FixedMap;

impl MapInfo for FixedMap {
    fn current_map(&self) -> String {
        "prontera".into()
    }

    fn display_name(&self, _map: &str) -> String {
        "Prontera".into()
    }
}

#[derive(Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn set(&self, tick: u64) {
        self.now.store(tick, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn tick(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Router wired to recording fakes. Message lookups miss unless seeded, so
/// lines read `msg#<id>`.
pub struct Harness {
    pub router: CommandRouter,
    pub env: Collaborators,
    pub clock: Arc<ManualClock>,
    store: Arc<RecordingStore>,
    effects: Arc<RecordingEffects>,
    gateway: Arc<RecordingGateway>,
    rx: UnboundedReceiver<ProtocolMessage>,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(PacketVersion(20180307), &[])
    }

    pub fn with_version(version: PacketVersion) -> Self {
        Self::build(version, &[])
    }

    pub fn with_messages(messages: &[(u32, &str)]) -> Self {
        Self::build(PacketVersion(20180307), messages)
    }

    fn build(version: PacketVersion, messages: &[(u32, &str)]) -> Self {
        let (egress, rx) = NetworkEgress::channel();
        let clock = Arc::new(ManualClock::default());
        let store = Arc::new(RecordingStore::default());
        let effects = Arc::new(RecordingEffects::default());
        let gateway = Arc::new(RecordingGateway::default());
        let catalog: MessageCatalog = messages
            .iter()
            .map(|(id, text)| (*id, text.to_string()))
            .collect();

        let env = Collaborators {
            messages: Arc::new(catalog),
            emotions: Arc::new(EmotionDictionary::builtin()),
            store: store.clone(),
            effects: effects.clone(),
            subsystems: gateway.clone(),
            map: Arc::new(FixedMap),
            clock: clock.clone(),
            egress,
        };
        let router = CommandRouter::new(ClientState::new(version), env.clone());

        Self {
            router,
            env,
            clock,
            store,
            effects,
            gateway,
            rx,
        }
    }

    pub fn process(&mut self, text: &str) -> CommandResponse {
        self.router.process(text)
    }

    pub fn fail_saves(&self) {
        self.store.fail.store(true, Ordering::SeqCst);
    }

    /// Drain messages queued since the last call.
    pub fn sent(&mut self) -> Vec<ProtocolMessage> {
        let mut out = Vec::new();
        while let Ok(message) = self.rx.try_recv() {
            out.push(message);
        }
        out
    }

    pub fn saves(&self) -> Vec<Namespace> {
        self.store.saves.lock().unwrap().clone()
    }

    pub fn effects(&self) -> Vec<ClientEffect> {
        self.effects.applied.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<SubsystemCall> {
        self.gateway.calls.lock().unwrap().clone()
    }
}
