/// Built-in command handlers.
///
/// Each handler is a concrete struct implementing `CommandHandler`. Anything
/// beyond the session and preference fields is delegated to a collaborator.
use chatline_core::SubsystemCall;
use chatline_logging::{CommandEvent, CommandEventLogger};
use chatline_protocol::{ActRequest, ProtocolMessage};
use tracing::info;

use crate::dispatch::{CommandContext, CommandHandler, CommandResponse, Outcome};
use crate::gesture::record_head_shake;
use crate::toggle::{self, ToggleSpec};
use crate::types::CommandInvocation;

// ---------------------------------------------------------------------------
// Preference toggles
// ---------------------------------------------------------------------------

pub struct ToggleHandler {
    pub spec: ToggleSpec,
}

impl CommandHandler for ToggleHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, _inv: &CommandInvocation) -> Outcome {
        Outcome::Handled(toggle::execute(&self.spec, &mut ctx.state.prefs, ctx.env))
    }
}

// ---------------------------------------------------------------------------
// /sit, /stand
// ---------------------------------------------------------------------------

pub struct PostureHandler;

impl CommandHandler for PostureHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, _inv: &CommandInvocation) -> Outcome {
        let act = if ctx.state.session.is_sitting() {
            ActRequest::StandUp
        } else {
            ActRequest::SitDown
        };
        ctx.env
            .egress
            .send(ProtocolMessage::request_act(ctx.state.packet_version, act));
        Outcome::Handled(CommandResponse::silent())
    }
}

// ---------------------------------------------------------------------------
// /doridori
// ---------------------------------------------------------------------------

pub struct HeadShakeHandler;

impl CommandHandler for HeadShakeHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, _inv: &CommandInvocation) -> Outcome {
        let session = &mut ctx.state.session;
        session.swing_head();
        ctx.env.egress.send(ProtocolMessage::change_direction(
            ctx.state.packet_version,
            session.head_dir,
            session.direction,
        ));

        let tick = ctx.env.clock.tick();
        if let Some(elapsed_ms) = record_head_shake(session, tick, ctx.state.bonus_window) {
            info!(elapsed_ms, "Head-shake bonus triggered");
            CommandEventLogger::log_event(CommandEvent::HeadShakeBonus { elapsed_ms });
            ctx.env.egress.send(ProtocolMessage::Doridori);
        }
        Outcome::Handled(CommandResponse::silent())
    }
}

// ---------------------------------------------------------------------------
// /bangbang, /bingbing
// ---------------------------------------------------------------------------

/// Rotate the body by a fixed number of eighth-turns.
pub struct TurnHandler {
    pub steps: u8,
}

impl CommandHandler for TurnHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, _inv: &CommandInvocation) -> Outcome {
        let session = &mut ctx.state.session;
        session.turn(self.steps);
        ctx.env.egress.send(ProtocolMessage::change_direction(
            ctx.state.packet_version,
            session.head_dir,
            session.direction,
        ));
        Outcome::Handled(CommandResponse::silent())
    }
}

// ---------------------------------------------------------------------------
// /where
// ---------------------------------------------------------------------------

pub struct WhereHandler;

impl CommandHandler for WhereHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, _inv: &CommandInvocation) -> Outcome {
        let map = ctx.env.map.current_map();
        let (x, y) = ctx.state.session.position;
        Outcome::Handled(CommandResponse::public(format!(
            "{}({}) : {}, {}",
            ctx.env.map.display_name(&map),
            map,
            x.floor() as i64,
            y.floor() as i64
        )))
    }
}

// ---------------------------------------------------------------------------
// Argument-free packets: /who, /memo, rankings
// ---------------------------------------------------------------------------

pub struct PacketHandler {
    pub message: ProtocolMessage,
}

impl CommandHandler for PacketHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, _inv: &CommandInvocation) -> Outcome {
        ctx.env.egress.send(self.message.clone());
        Outcome::Handled(CommandResponse::silent())
    }
}

// ---------------------------------------------------------------------------
// Subsystem entry points
// ---------------------------------------------------------------------------

/// Argument-free subsystem call: /chat, /q, /leave, /hi.
pub struct SubsystemHandler {
    pub call: SubsystemCall,
}

impl CommandHandler for SubsystemHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, _inv: &CommandInvocation) -> Outcome {
        ctx.env.subsystems.invoke(self.call.clone());
        Outcome::Handled(CommandResponse::silent())
    }
}

/// Subsystem call that needs the command's free-text argument:
/// /invite, /organize, /guild, /breakguild. Without one it falls through.
pub struct NamedSubsystemHandler {
    pub build: fn(String) -> SubsystemCall,
}

impl CommandHandler for NamedSubsystemHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, inv: &CommandInvocation) -> Outcome {
        let Some(name) = inv.argument.clone() else {
            return Outcome::FallThrough;
        };
        ctx.env.subsystems.invoke((self.build)(name));
        Outcome::Handled(CommandResponse::silent())
    }
}

// ---------------------------------------------------------------------------
// /hoai, /merai
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Companion {
    Homunculus,
    Mercenary,
}

pub struct CompanionAiHandler {
    pub companion: Companion,
}

impl CommandHandler for CompanionAiHandler {
    fn handle(&self, ctx: &mut CommandContext<'_>, _inv: &CommandInvocation) -> Outcome {
        let session = &mut ctx.state.session;
        let messages = &ctx.env.messages;

        let response = match self.companion {
            Companion::Homunculus => {
                session.homunculus_custom_ai = !session.homunculus_custom_ai;
                ctx.env.subsystems.invoke(SubsystemCall::HomunculusResetAi);
                let id = if session.homunculus_custom_ai { 1023 } else { 1024 };
                CommandResponse::public(messages.message(id))
            }
            Companion::Mercenary => {
                session.mercenary_custom_ai = !session.mercenary_custom_ai;
                let id = if session.mercenary_custom_ai { 1273 } else { 1274 };
                let mut r = CommandResponse::public(messages.message(id));
                r.push("(Mercenary not supported yet)", true);
                r
            }
        };
        Outcome::Handled(response)
    }
}
