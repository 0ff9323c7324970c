//! Text protocol for interactive collision sessions.
//!
//! Client -> server:
//!   `UPDATE_BOX:{"id": "...", "position": [x, y, z], "dimensions": [w, h, d]}`
//!   `REMOVE_BOX:<id>`
//!   `CHECK`
//!   `CLEAR`
//!
//! Server -> client:
//!   `COLLISION_UPDATE:<CollisionResult JSON>` after every valid command
//!   `ERROR_UPDATE:{"code", "message", "severity"}` for unparsable input

use crate::error::format_error;
use layout_core::collision::{CollisionEngine, CollisionResult};
use layout_core::geometry::{Point3, Vector3};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoxUpdate {
    pub id: String,
    pub position: [f64; 3],
    pub dimensions: [f64; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    UpdateBox(BoxUpdate),
    RemoveBox(String),
    Check,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("invalid box payload: {0}")]
    InvalidPayload(String),

    #[error("missing box id")]
    MissingId,
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text == "CHECK" {
            Ok(Self::Check)
        } else if text == "CLEAR" {
            Ok(Self::Clear)
        } else if let Some(json_str) = text.strip_prefix("UPDATE_BOX:") {
            serde_json::from_str(json_str)
                .map(Self::UpdateBox)
                .map_err(|e| CommandError::InvalidPayload(e.to_string()))
        } else if let Some(id) = text.strip_prefix("REMOVE_BOX:") {
            let id = id.trim();
            if id.is_empty() {
                Err(CommandError::MissingId)
            } else {
                Ok(Self::RemoveBox(id.to_string()))
            }
        } else {
            Err(CommandError::Unknown(text.to_string()))
        }
    }
}

/// Apply a command to the session's engine and return the current snapshot.
pub fn apply(engine: &mut CollisionEngine, command: SessionCommand) -> CollisionResult {
    match command {
        SessionCommand::UpdateBox(update) => {
            let [x, y, z] = update.position;
            let [w, h, d] = update.dimensions;
            engine.update_box(&update.id, Point3::new(x, y, z), Vector3::new(w, h, d));
        }
        SessionCommand::RemoveBox(id) => engine.remove_box(&id),
        SessionCommand::Clear => engine.clear(),
        SessionCommand::Check => {}
    }
    engine.detect_collisions().clone()
}

/// Handle one text frame, producing the reply frame.
pub fn respond(engine: &mut CollisionEngine, text: &str) -> String {
    match text.parse::<SessionCommand>() {
        Ok(command) => {
            let result = apply(engine, command);
            let json = serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string());
            format!("COLLISION_UPDATE:{}", json)
        }
        Err(e) => format_error("BAD_COMMAND", &e.to_string(), "warning"),
    }
}
