//! Error taxonomy
//!
//! Every variant is local and recoverable: the interaction that caused it
//! is rejected and nothing is appended to the throw log.

use thiserror::Error;

use crate::game::Game;

#[derive(Error, Debug)]
pub enum DartsError {
    #[error("invalid notation: {0:?}")]
    InvalidNotation(String),
    #[error("segment {segment} in {token:?} is not on the board")]
    OutOfRangeSegment { token: String, segment: u32 },
    #[error("board geometry not established: {0}")]
    GeometryDegenerate(String),
    #[error("game already finished")]
    GameFinished,
    #[error("game {0} is not supported")]
    UnsupportedGame(Game),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DartsError>;
