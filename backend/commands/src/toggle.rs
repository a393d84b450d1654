//! Preference toggle executor.
//!
//! Order per toggle: status line from the pre-toggle state, flip, persist the
//! owning namespace, then side effects from the post-toggle value. Fog is the
//! one flag whose line describes the new value instead.

use chatline_core::{
    AURA_FULL, AURA_OFF, AURA_SIMPLIFIED, ClientEffect, Namespace, PreferenceKey, Preferences,
};
use chatline_logging::{CommandEvent, CommandEventLogger};
use tracing::{info, warn};

use crate::dispatch::{Collaborators, CommandResponse};

/// How a boolean flag reports its change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagMessage {
    /// Message `base + old value`.
    PreToggle { base: u32 },
    /// Literal text picked by the new value.
    PostToggleLiteral { on: &'static str, off: &'static str },
    Silent,
}

/// Side effect run after a boolean flag flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    /// Stop whatever sound effects are playing when sound is switched on.
    StopSoundsWhenEnabled,
    /// Start or stop background music to match the flag.
    FollowBgm,
    RefreshNameLabels,
}

impl FlagEffect {
    fn effect_for(&self, value: bool) -> Option<ClientEffect> {
        match self {
            FlagEffect::StopSoundsWhenEnabled => value.then_some(ClientEffect::StopSounds),
            FlagEffect::FollowBgm => Some(if value {
                ClientEffect::PlayBgm
            } else {
                ClientEffect::StopBgm
            }),
            FlagEffect::RefreshNameLabels => Some(ClientEffect::RefreshNameLabels),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Flag {
        key: PreferenceKey,
        message: FlagMessage,
        effect: Option<FlagEffect>,
    },
    /// Full <-> simplified aura. Message `base + (aura > simplified)`.
    AuraSimplified { base: u32 },
    /// Aura on <-> off. Message `base + aura level`.
    AuraSwitch { base: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSpec {
    pub toggle: Toggle,
    pub public_log: bool,
}

impl ToggleSpec {
    fn flag(key: PreferenceKey, base: u32) -> Self {
        Self {
            toggle: Toggle::Flag {
                key,
                message: FlagMessage::PreToggle { base },
                effect: None,
            },
            public_log: true,
        }
    }

    fn with_effect(mut self, effect: FlagEffect) -> Self {
        if let Toggle::Flag { key, message, .. } = self.toggle {
            self.toggle = Toggle::Flag {
                key,
                message,
                effect: Some(effect),
            };
        }
        self
    }

    fn private(mut self) -> Self {
        self.public_log = false;
        self
    }

    pub fn namespace(&self) -> Namespace {
        match self.toggle {
            Toggle::Flag { key, .. } => key.namespace(),
            Toggle::AuraSimplified { .. } | Toggle::AuraSwitch { .. } => Namespace::Map,
        }
    }
}

/// Toggle specs keyed by command key.
pub fn builtin_toggles() -> Vec<(&'static str, ToggleSpec)> {
    use PreferenceKey::*;

    vec![
        ("sound", ToggleSpec::flag(Sound, 27).with_effect(FlagEffect::StopSoundsWhenEnabled)),
        ("bgm", ToggleSpec::flag(Bgm, 31).with_effect(FlagEffect::FollowBgm)),
        ("effect", ToggleSpec::flag(Effect, 23)),
        ("mineffect", ToggleSpec::flag(MinEffect, 687)),
        ("miss", ToggleSpec::flag(Miss, 317)),
        (
            "aura",
            ToggleSpec {
                toggle: Toggle::AuraSimplified { base: 711 },
                public_log: true,
            },
        ),
        (
            "aura2",
            ToggleSpec {
                toggle: Toggle::AuraSwitch { base: 2994 },
                public_log: true,
            },
        ),
        (
            "showname",
            ToggleSpec::flag(ShowName, 722)
                .with_effect(FlagEffect::RefreshNameLabels)
                .private(),
        ),
        ("camera", ToggleSpec::flag(CameraSmooth, 319)),
        (
            "fog",
            ToggleSpec {
                toggle: Toggle::Flag {
                    key: Fog,
                    message: FlagMessage::PostToggleLiteral { on: "fog on", off: "fog off" },
                    effect: None,
                },
                public_log: true,
            },
        ),
        (
            "lightmap",
            ToggleSpec {
                toggle: Toggle::Flag {
                    key: Lightmap,
                    message: FlagMessage::Silent,
                    effect: None,
                },
                public_log: true,
            },
        ),
        ("noctrl", ToggleSpec::flag(NoCtrl, 717)),
        ("noshift", ToggleSpec::flag(NoShift, 701)),
        ("snap", ToggleSpec::flag(Snap, 271)),
        ("itemsnap", ToggleSpec::flag(ItemSnap, 276)),
    ]
}

/// Apply one toggle to `prefs`.
pub fn execute(spec: &ToggleSpec, prefs: &mut Preferences, env: &Collaborators) -> CommandResponse {
    let mut response = CommandResponse::silent();

    let (name, value) = match spec.toggle {
        Toggle::Flag { key, message, effect } => {
            let old = prefs.flag(key);
            if let FlagMessage::PreToggle { base } = message {
                response.push(env.messages.message(base + old as u32), spec.public_log);
            }

            let new = !old;
            *prefs.flag_mut(key) = new;

            if let FlagMessage::PostToggleLiteral { on, off } = message {
                response.push(if new { on } else { off }, spec.public_log);
            }

            persist(env, key.namespace(), prefs);

            if let Some(client_effect) = effect.and_then(|e| e.effect_for(new)) {
                env.effects.apply(client_effect);
            }
            (key.name(), new.to_string())
        }
        Toggle::AuraSimplified { base } => {
            let simplified = prefs.map.aura > AURA_SIMPLIFIED;
            response.push(env.messages.message(base + simplified as u32), spec.public_log);
            prefs.map.aura = if simplified { AURA_SIMPLIFIED } else { AURA_FULL };
            persist(env, Namespace::Map, prefs);
            ("aura", prefs.map.aura.to_string())
        }
        Toggle::AuraSwitch { base } => {
            let level = prefs.map.aura;
            let fallback = if level != AURA_OFF {
                "Aura effect is OFF"
            } else {
                "Aura effect is ON"
            };
            response.push(
                env.messages.message_or(base + level as u32, fallback),
                spec.public_log,
            );
            prefs.map.aura = if level != AURA_OFF { AURA_OFF } else { AURA_SIMPLIFIED };
            persist(env, Namespace::Map, prefs);
            ("aura", prefs.map.aura.to_string())
        }
    };

    CommandEventLogger::log_event(CommandEvent::PreferenceToggled {
        namespace: spec.namespace().to_string(),
        name: name.to_string(),
        value,
    });
    response
}

fn persist(env: &Collaborators, namespace: Namespace, prefs: &Preferences) {
    match env.store.save(namespace, prefs) {
        Ok(()) => info!(namespace = %namespace, "Preferences saved"),
        Err(e) => warn!(namespace = %namespace, error = %e, "Failed to save preferences"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;

    fn spec(key: &str) -> ToggleSpec {
        builtin_toggles()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, s)| s)
            .unwrap()
    }

    #[test]
    fn pre_toggle_message_uses_old_value() {
        let h = Harness::new();
        let mut prefs = Preferences::default();
        assert!(!prefs.controls.noctrl);

        let first = execute(&spec("noctrl"), &mut prefs, &h.env);
        assert_eq!(first.texts(), vec!["msg#717"]);
        assert!(prefs.controls.noctrl);

        let second = execute(&spec("noctrl"), &mut prefs, &h.env);
        assert_eq!(second.texts(), vec!["msg#718"]);
        assert!(!prefs.controls.noctrl);
        assert_eq!(h.saves(), vec![Namespace::Controls, Namespace::Controls]);
    }

    #[test]
    fn sound_stops_effects_when_switched_on() {
        let h = Harness::new();
        let mut prefs = Preferences::default();

        execute(&spec("sound"), &mut prefs, &h.env);
        assert!(!prefs.audio.sound);
        assert!(h.effects().is_empty());

        execute(&spec("sound"), &mut prefs, &h.env);
        assert!(prefs.audio.sound);
        assert_eq!(h.effects(), vec![ClientEffect::StopSounds]);
    }

    #[test]
    fn sound_off_to_on_issues_stop() {
        let h = Harness::new();
        let mut prefs = Preferences::default();
        prefs.audio.sound = false;

        let r = execute(&spec("sound"), &mut prefs, &h.env);
        assert_eq!(r.texts(), vec!["msg#27"]);
        assert!(prefs.audio.sound);
        assert_eq!(h.effects(), vec![ClientEffect::StopSounds]);
    }

    #[test]
    fn bgm_follows_new_value() {
        let h = Harness::new();
        let mut prefs = Preferences::default();
        let off = execute(&spec("bgm"), &mut prefs, &h.env);
        let on = execute(&spec("bgm"), &mut prefs, &h.env);
        assert_eq!(off.texts(), vec!["msg#32"]);
        assert_eq!(on.texts(), vec!["msg#31"]);
        assert_eq!(h.effects(), vec![ClientEffect::StopBgm, ClientEffect::PlayBgm]);
        assert_eq!(h.saves(), vec![Namespace::Audio, Namespace::Audio]);
    }

    #[test]
    fn showname_is_private_and_refreshes_labels() {
        let h = Harness::new();
        let mut prefs = Preferences::default();
        let r = execute(&spec("showname"), &mut prefs, &h.env);
        assert_eq!(r.texts(), vec!["msg#723"]);
        assert!(!r.lines[0].public_log);
        assert_eq!(h.effects(), vec![ClientEffect::RefreshNameLabels]);
    }

    #[test]
    fn fog_reports_new_value() {
        let h = Harness::new();
        let mut prefs = Preferences::default();
        assert_eq!(execute(&spec("fog"), &mut prefs, &h.env).texts(), vec!["fog off"]);
        assert_eq!(execute(&spec("fog"), &mut prefs, &h.env).texts(), vec!["fog on"]);
    }

    #[test]
    fn lightmap_is_silent_but_persisted() {
        let h = Harness::new();
        let mut prefs = Preferences::default();
        let r = execute(&spec("lightmap"), &mut prefs, &h.env);
        assert!(r.lines.is_empty());
        assert!(!prefs.map.lightmap);
        assert_eq!(h.saves(), vec![Namespace::Map]);
    }

    #[test]
    fn aura_alternates_full_and_simplified() {
        let h = Harness::new();
        let mut prefs = Preferences::default();
        assert_eq!(prefs.map.aura, AURA_FULL);

        assert_eq!(execute(&spec("aura"), &mut prefs, &h.env).texts(), vec!["msg#712"]);
        assert_eq!(prefs.map.aura, AURA_SIMPLIFIED);
        assert_eq!(execute(&spec("aura"), &mut prefs, &h.env).texts(), vec!["msg#711"]);
        assert_eq!(prefs.map.aura, AURA_FULL);
    }

    #[test]
    fn aura_from_off_goes_full() {
        let h = Harness::new();
        let mut prefs = Preferences::default();
        prefs.map.aura = AURA_OFF;
        assert_eq!(execute(&spec("aura"), &mut prefs, &h.env).texts(), vec!["msg#711"]);
        assert_eq!(prefs.map.aura, AURA_FULL);
    }

    #[test]
    fn aura_switch_indexes_by_level_with_fallback() {
        let h = Harness::new();
        let mut prefs = Preferences::default();

        let off = execute(&spec("aura2"), &mut prefs, &h.env);
        assert_eq!(off.texts(), vec!["Aura effect is OFF"]);
        assert_eq!(prefs.map.aura, AURA_OFF);

        let on = execute(&spec("aura2"), &mut prefs, &h.env);
        assert_eq!(on.texts(), vec!["Aura effect is ON"]);
        assert_eq!(prefs.map.aura, AURA_SIMPLIFIED);
    }

    #[test]
    fn aura_switch_prefers_table_entry() {
        let h = Harness::with_messages(&[(2996, "Aura off (full)")]);
        let mut prefs = Preferences::default();
        let r = execute(&spec("aura2"), &mut prefs, &h.env);
        assert_eq!(r.texts(), vec!["Aura off (full)"]);
    }

    #[test]
    fn failed_save_still_flips_flag() {
        let h = Harness::new();
        h.fail_saves();
        let mut prefs = Preferences::default();
        let r = execute(&spec("miss"), &mut prefs, &h.env);
        assert_eq!(r.texts(), vec!["msg#317"]);
        assert!(prefs.map.miss);
    }
}
