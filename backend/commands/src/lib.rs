//! `chatline-commands`: chat command tokenizer and router.

pub mod detection;
pub mod dispatch;
pub mod emotion;
pub mod gesture;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod toggle;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use detection::{detect_command, keyword, parse_attribute_increase};
pub use dispatch::{
    ClientState, Collaborators, CommandContext, CommandDispatcher, CommandHandler,
    CommandResponse, LineKind, Outcome, StatusLine,
};
pub use emotion::EmotionDictionary;
pub use handlers::{
    Companion, CompanionAiHandler, HeadShakeHandler, NamedSubsystemHandler, PacketHandler,
    PostureHandler, SubsystemHandler, ToggleHandler, TurnHandler, WhereHandler,
};
pub use registry::{CommandRegistry, builtin_commands};
pub use router::{CommandRouter, NOT_FOUND_MESSAGE};
pub use toggle::{ToggleSpec, builtin_toggles};
pub use types::{AttributeIncrease, CommandCategory, CommandDef, CommandInvocation};

use std::sync::Arc;

use chatline_core::SubsystemCall;
use chatline_protocol::ProtocolMessage;

/// Build a dispatcher pre-wired with all built-in handlers.
pub fn build_default_dispatcher() -> CommandDispatcher {
    let mut dispatcher = CommandDispatcher::new();

    for (key, spec) in builtin_toggles() {
        dispatcher.register(key, Arc::new(ToggleHandler { spec }));
    }

    dispatcher.register("sit", Arc::new(PostureHandler));
    dispatcher.register("doridori", Arc::new(HeadShakeHandler));
    dispatcher.register("bangbang", Arc::new(TurnHandler { steps: 1 }));
    dispatcher.register("bingbing", Arc::new(TurnHandler { steps: 7 }));
    dispatcher.register("where", Arc::new(WhereHandler));

    let packets = [
        ("who", ProtocolMessage::ReqUserCount),
        ("memo", ProtocolMessage::RememberWarpPoint),
        ("alchemist", ProtocolMessage::AlchemistRank),
        ("blacksmith", ProtocolMessage::BlacksmithRank),
        ("taekwon", ProtocolMessage::TaekwonRank),
    ];
    for (key, message) in packets {
        dispatcher.register(key, Arc::new(PacketHandler { message }));
    }

    let calls = [
        ("chat", SubsystemCall::ChatRoomCreate),
        ("q", SubsystemCall::ChatRoomLeave),
        ("leave", SubsystemCall::GroupLeave),
        ("hi", SubsystemCall::FriendsSayHi),
    ];
    for (key, call) in calls {
        dispatcher.register(key, Arc::new(SubsystemHandler { call }));
    }

    dispatcher.register("invite", Arc::new(NamedSubsystemHandler {
        build: |name| SubsystemCall::GroupInvite { name },
    }));
    dispatcher.register("organize", Arc::new(NamedSubsystemHandler {
        build: |name| SubsystemCall::GroupCreate { name },
    }));
    dispatcher.register("guild", Arc::new(NamedSubsystemHandler {
        build: |name| SubsystemCall::GuildCreate { name },
    }));
    dispatcher.register("breakguild", Arc::new(NamedSubsystemHandler {
        build: |name| SubsystemCall::GuildBreak { name },
    }));

    dispatcher.register("hoai", Arc::new(CompanionAiHandler { companion: Companion::Homunculus }));
    dispatcher.register("merai", Arc::new(CompanionAiHandler { companion: Companion::Mercenary }));

    dispatcher
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_command_has_a_handler() {
        let registry = CommandRegistry::new();
        let dispatcher = build_default_dispatcher();
        for def in registry.all() {
            assert!(dispatcher.has_handler(&def.key), "no handler for {}", def.key);
        }
    }
}
