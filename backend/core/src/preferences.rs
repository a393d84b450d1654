//! Client-side preference namespaces.
//!
//! Each namespace is persisted on its own; a toggle only rewrites the
//! namespace that owns the flag.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Namespaces
// ---------------------------------------------------------------------------

/// An independently persisted preference group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Audio,
    Controls,
    Map,
    Camera,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::Audio,
        Namespace::Controls,
        Namespace::Map,
        Namespace::Camera,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Audio => "audio",
            Namespace::Controls => "controls",
            Namespace::Map => "map",
            Namespace::Camera => "camera",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioPreferences {
    pub sound: bool,
    pub bgm: bool,
}

impl Default for AudioPreferences {
    fn default() -> Self {
        Self { sound: true, bgm: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlPreferences {
    pub noctrl: bool,
    pub noshift: bool,
    pub snap: bool,
    pub itemsnap: bool,
}

/// Aura rendering levels.
pub const AURA_OFF: u8 = 0;
pub const AURA_SIMPLIFIED: u8 = 1;
pub const AURA_FULL: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapPreferences {
    pub effect: bool,
    pub mineffect: bool,
    pub miss: bool,
    /// One of [`AURA_OFF`], [`AURA_SIMPLIFIED`], [`AURA_FULL`].
    pub aura: u8,
    pub showname: bool,
    pub fog: bool,
    pub lightmap: bool,
}

impl Default for MapPreferences {
    fn default() -> Self {
        Self {
            effect: true,
            mineffect: false,
            miss: false,
            aura: AURA_FULL,
            showname: true,
            fog: true,
            lightmap: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraPreferences {
    pub smooth: bool,
}

impl Default for CameraPreferences {
    fn default() -> Self {
        Self { smooth: true }
    }
}

/// All preference namespaces of one client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub audio: AudioPreferences,
    pub controls: ControlPreferences,
    pub map: MapPreferences,
    pub camera: CameraPreferences,
}

// ---------------------------------------------------------------------------
// Boolean flags
// ---------------------------------------------------------------------------

/// A boolean preference field, addressed by namespace and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Sound,
    Bgm,
    Effect,
    MinEffect,
    Miss,
    ShowName,
    Fog,
    Lightmap,
    NoCtrl,
    NoShift,
    Snap,
    ItemSnap,
    CameraSmooth,
}

impl PreferenceKey {
    pub fn namespace(&self) -> Namespace {
        match self {
            PreferenceKey::Sound | PreferenceKey::Bgm => Namespace::Audio,
            PreferenceKey::NoCtrl
            | PreferenceKey::NoShift
            | PreferenceKey::Snap
            | PreferenceKey::ItemSnap => Namespace::Controls,
            PreferenceKey::CameraSmooth => Namespace::Camera,
            _ => Namespace::Map,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PreferenceKey::Sound => "sound",
            PreferenceKey::Bgm => "bgm",
            PreferenceKey::Effect => "effect",
            PreferenceKey::MinEffect => "mineffect",
            PreferenceKey::Miss => "miss",
            PreferenceKey::ShowName => "showname",
            PreferenceKey::Fog => "fog",
            PreferenceKey::Lightmap => "lightmap",
            PreferenceKey::NoCtrl => "noctrl",
            PreferenceKey::NoShift => "noshift",
            PreferenceKey::Snap => "snap",
            PreferenceKey::ItemSnap => "itemsnap",
            PreferenceKey::CameraSmooth => "smooth",
        }
    }
}

impl Preferences {
    pub fn flag(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::Sound => self.audio.sound,
            PreferenceKey::Bgm => self.audio.bgm,
            PreferenceKey::Effect => self.map.effect,
            PreferenceKey::MinEffect => self.map.mineffect,
            PreferenceKey::Miss => self.map.miss,
            PreferenceKey::ShowName => self.map.showname,
            PreferenceKey::Fog => self.map.fog,
            PreferenceKey::Lightmap => self.map.lightmap,
            PreferenceKey::NoCtrl => self.controls.noctrl,
            PreferenceKey::NoShift => self.controls.noshift,
            PreferenceKey::Snap => self.controls.snap,
            PreferenceKey::ItemSnap => self.controls.itemsnap,
            PreferenceKey::CameraSmooth => self.camera.smooth,
        }
    }

    pub fn flag_mut(&mut self, key: PreferenceKey) -> &mut bool {
        match key {
            PreferenceKey::Sound => &mut self.audio.sound,
            PreferenceKey::Bgm => &mut self.audio.bgm,
            PreferenceKey::Effect => &mut self.map.effect,
            PreferenceKey::MinEffect => &mut self.map.mineffect,
            PreferenceKey::Miss => &mut self.map.miss,
            PreferenceKey::ShowName => &mut self.map.showname,
            PreferenceKey::Fog => &mut self.map.fog,
            PreferenceKey::Lightmap => &mut self.map.lightmap,
            PreferenceKey::NoCtrl => &mut self.controls.noctrl,
            PreferenceKey::NoShift => &mut self.controls.noshift,
            PreferenceKey::Snap => &mut self.controls.snap,
            PreferenceKey::ItemSnap => &mut self.controls.itemsnap,
            PreferenceKey::CameraSmooth => &mut self.camera.smooth,
        }
    }

    /// Serialize a single namespace.
    pub fn namespace_value(&self, namespace: Namespace) -> serde_json::Result<serde_json::Value> {
        match namespace {
            Namespace::Audio => serde_json::to_value(&self.audio),
            Namespace::Controls => serde_json::to_value(&self.controls),
            Namespace::Map => serde_json::to_value(&self.map),
            Namespace::Camera => serde_json::to_value(&self.camera),
        }
    }

    /// Replace a single namespace from its serialized form.
    pub fn set_namespace_value(
        &mut self,
        namespace: Namespace,
        value: serde_json::Value,
    ) -> serde_json::Result<()> {
        match namespace {
            Namespace::Audio => self.audio = serde_json::from_value(value)?,
            Namespace::Controls => self.controls = serde_json::from_value(value)?,
            Namespace::Map => self.map = serde_json::from_value(value)?,
            Namespace::Camera => self.camera = serde_json::from_value(value)?,
        }
        Ok(())
    }
}
