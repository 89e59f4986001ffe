//! JSON-lines session scripts.
//!
//! A session is one [`SessionMessage`] per line. Blank lines and lines
//! starting with `//` are skipped.

use crate::error::IpcError;
use crate::messages::SessionMessage;

/// Parse a session script
pub fn parse_session(source: &str) -> Result<Vec<SessionMessage>, IpcError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with("//")
        })
        .map(|(index, line)| {
            serde_json::from_str::<SessionMessage>(line.trim())
                .map_err(|e| IpcError::InvalidFormat(format!("line {}: {}", index + 1, e)))
        })
        .collect()
}

/// Render messages as a session script
pub fn write_session(messages: &[SessionMessage]) -> Result<String, IpcError> {
    let mut out = String::new();
    for message in messages {
        out.push_str(&message.to_json()?);
        out.push('\n');
    }
    Ok(out)
}
