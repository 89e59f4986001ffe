//! Main IPC message enum for driving a canvas session.

use serde::{Deserialize, Serialize};

use crate::commands::CanvasCommand;
use crate::error::IpcError;
use crate::input::PointerMessage;

/// Messages from an input host to the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionMessage {
    /// Touch or mouse input
    Pointer(PointerMessage),

    /// Toolbar and dialog actions
    Command(CanvasCommand),
}

impl SessionMessage {
    /// Serialize to a single line of JSON
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a single JSON message
    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<PointerMessage> for SessionMessage {
    fn from(pointer: PointerMessage) -> Self {
        Self::Pointer(pointer)
    }
}

impl From<CanvasCommand> for SessionMessage {
    fn from(command: CanvasCommand) -> Self {
        Self::Command(command)
    }
}
