//! Game state
//!
//! The throw log is the single source of truth; everything shown on the
//! scoreboard is recomputed from it by `derive`.

pub mod record;
pub mod scorekeeper;
pub mod session;
pub mod throw_log;

pub use record::{CanvasSize, ThrowRecord};
pub use scorekeeper::{
    Scoreboard, Slot, SlotOutcome, THROWS_PER_VISIT, Visit, derive, is_double_out,
};
pub use session::Classic301;
pub use throw_log::ThrowLog;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::CLASSIC_301_START;

/// Game variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Game {
    #[default]
    #[serde(rename = "301")]
    Classic301,
    #[serde(rename = "501")]
    Classic501,
    Cricket,
}

impl Game {
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Classic301 => "301",
            Game::Classic501 => "501",
            Game::Cricket => "Cricket",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "301" => Some(Game::Classic301),
            "501" => Some(Game::Classic501),
            "cricket" => Some(Game::Cricket),
            _ => None,
        }
    }

    /// Starting score, None for variants whose rules are not implemented
    pub fn starting_score(&self) -> Option<u32> {
        match self {
            Game::Classic301 => Some(CLASSIC_301_START),
            Game::Classic501 | Game::Cricket => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
