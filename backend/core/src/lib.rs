//! `chatline-core`: session state and the collaborator traits the router calls into.

pub mod catalog;
pub mod error;
pub mod gesture;
pub mod preferences;
pub mod session;
pub mod traits;

pub use catalog::MessageCatalog;
pub use error::ChatlineError;
pub use gesture::{BonusWindow, GestureWindow, WINDOW_CAPACITY};
pub use preferences::{
    AudioPreferences, CameraPreferences, ControlPreferences, MapPreferences, Namespace,
    PreferenceKey, Preferences, AURA_FULL, AURA_OFF, AURA_SIMPLIFIED,
};
pub use session::{ActionState, Session, DIRECTIONS};
pub use traits::{
    ClientEffect, ClientEffects, Clock, EmotionTable, MapInfo, MessageTable, PreferenceStore,
    Subsystem, SubsystemCall, SubsystemGateway, SystemClock,
};
