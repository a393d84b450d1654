//! `chatline-protocol`: messages the command router sends to the server.

pub mod egress;
pub mod message;
pub mod version;

pub use egress::{spawn_transport, NetworkEgress, Transport};
pub use message::{ActRequest, ProtocolMessage};
pub use version::{Encoding, LogicalAction, PacketVersion, VersionCutover, VERSION_TABLE};
