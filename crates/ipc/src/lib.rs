//! IPC message protocol for fingerpaint
//!
//! Defines the messages an input host sends to a canvas session: pointer
//! events and toolbar commands, serialized as tagged JSON.

mod commands;
mod error;
mod input;
mod messages;
mod session;

pub use commands::*;
pub use error::IpcError;
pub use input::*;
pub use messages::*;
pub use session::*;
