//! Top-level chat command router.
//!
//! Stages, in order: exact keyword, attribute increase, emotion dictionary,
//! then the fixed "command not found" line.

use chatline_logging::{CommandEvent, CommandEventLogger, DispatchStage};
use chatline_protocol::ProtocolMessage;
use tracing::debug;

use crate::detection::{detect_command, keyword, parse_attribute_increase};
use crate::dispatch::{
    ClientState, Collaborators, CommandContext, CommandDispatcher, CommandResponse, Outcome,
};
use crate::registry::CommandRegistry;

/// Message id of the "command not found" line.
pub const NOT_FOUND_MESSAGE: u32 = 95;

pub struct CommandRouter {
    registry: CommandRegistry,
    dispatcher: CommandDispatcher,
    state: ClientState,
    env: Collaborators,
}

impl CommandRouter {
    /// Router over the built-in command table.
    pub fn new(state: ClientState, env: Collaborators) -> Self {
        Self::with_dispatcher(CommandRegistry::new(), crate::build_default_dispatcher(), state, env)
    }

    pub fn with_dispatcher(
        registry: CommandRegistry,
        dispatcher: CommandDispatcher,
        state: ClientState,
        env: Collaborators,
    ) -> Self {
        Self {
            registry,
            dispatcher,
            state,
            env,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Session and preference state for the map engine to update.
    pub fn state_mut(&mut self) -> &mut ClientState {
        &mut self.state
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Route one chat line (without its leading slash).
    pub fn process(&mut self, text: &str) -> CommandResponse {
        let keyword = keyword(text);

        if let Some(inv) = detect_command(text, &self.registry) {
            let mut ctx = CommandContext {
                state: &mut self.state,
                env: &self.env,
            };
            match self.dispatcher.dispatch(&mut ctx, &inv) {
                Outcome::Handled(response) => {
                    log_dispatched(keyword, DispatchStage::Keyword);
                    return response;
                }
                Outcome::FallThrough => {
                    debug!(keyword, "Command fell through");
                }
            }
        }

        if let Some(inc) = parse_attribute_increase(text) {
            self.env.egress.send(ProtocolMessage::StatusChange {
                status_id: inc.status_id,
                amount: inc.amount,
            });
            log_dispatched(keyword, DispatchStage::Attribute);
            return CommandResponse::silent();
        }

        if let Some(kind) = self.env.emotions.emotion(keyword) {
            self.env.egress.send(ProtocolMessage::ReqEmotion { kind });
            log_dispatched(keyword, DispatchStage::Emotion);
            return CommandResponse::silent();
        }

        CommandEventLogger::log_event(CommandEvent::NotFound {
            keyword: keyword.to_string(),
        });
        CommandResponse::public(self.env.messages.message(NOT_FOUND_MESSAGE))
    }
}

fn log_dispatched(keyword: &str, stage: DispatchStage) {
    CommandEventLogger::log_event(CommandEvent::Dispatched {
        keyword: keyword.to_string(),
        stage,
    });
}
