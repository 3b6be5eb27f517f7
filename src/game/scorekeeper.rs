//! Turn scorekeeper for the 01 game family
//!
//! `derive` replays an ordered list of throws from scratch and returns the
//! whole scoreboard. Nothing is carried between calls, so undo is just
//! "drop the last throw and derive again".
//!
//! Rules, per throw:
//! - Floor scores nothing and uses up a dart.
//! - Landing on exactly 0 with a double (or bullseye) checks out and ends the
//!   game; later throws are ignored.
//! - Anything leaving less than 2 (including exactly 0 without a double) is
//!   a bust: the visit ends and the remaining score reverts to the value at
//!   the start of the visit.
//! - A visit is three darts, or fewer if it ends in a bust or checkout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::notation::{Throw, ThrowKind};

/// Darts per visit
pub const THROWS_PER_VISIT: usize = 3;

/// What a single dart did to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotOutcome {
    Scored,
    Floor,
    Bust,
    Checkout,
}

/// One dart within a visit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub throw: Throw,
    pub outcome: SlotOutcome,
    /// Remaining before this dart was a finish on a single double
    pub on_double: bool,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            SlotOutcome::Floor => f.write_str("FLOOR"),
            SlotOutcome::Scored => f.write_str(&self.throw.label()),
            SlotOutcome::Bust => write!(f, "{} (BUST)", self.throw.label()),
            SlotOutcome::Checkout => write!(f, "{} (OUT)", self.throw.label()),
        }
    }
}

/// Up to three darts thrown in one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Zero-based visit index
    pub index: usize,
    pub remaining_at_start: u32,
    /// Remaining after the last dart of the visit so far
    pub remaining: u32,
    pub slots: Vec<Slot>,
}

impl Visit {
    fn new(index: usize, remaining: u32) -> Self {
        Self {
            index,
            remaining_at_start: remaining,
            remaining,
            slots: Vec::with_capacity(THROWS_PER_VISIT),
        }
    }

    /// One-based visit number for display
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn is_bust(&self) -> bool {
        self.last_outcome() == Some(SlotOutcome::Bust)
    }

    pub fn is_checkout(&self) -> bool {
        self.last_outcome() == Some(SlotOutcome::Checkout)
    }

    /// True once the visit can take no more darts
    pub fn is_complete(&self) -> bool {
        self.slots.len() == THROWS_PER_VISIT || self.is_bust() || self.is_checkout()
    }

    /// Points taken off during this visit (0 for a bust)
    pub fn scored(&self) -> u32 {
        self.remaining_at_start - self.remaining
    }

    fn last_outcome(&self) -> Option<SlotOutcome> {
        self.slots.last().map(|s| s.outcome)
    }
}

/// Derived game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub starting_score: u32,
    pub visits: Vec<Visit>,
    pub remaining: u32,
    pub finished: bool,
    /// Throws in the log after checkout, not scored
    pub ignored: usize,
}

impl Scoreboard {
    fn new(starting_score: u32) -> Self {
        Self {
            starting_score,
            visits: Vec::new(),
            remaining: starting_score,
            finished: false,
            ignored: 0,
        }
    }

    /// Number of darts that were scored (excludes ignored throws)
    pub fn darts_thrown(&self) -> usize {
        self.visits.iter().map(|v| v.slots.len()).sum()
    }

    /// Darts left in the visit in progress (3 if a new visit starts next)
    pub fn darts_left_in_visit(&self) -> usize {
        match self.visits.last() {
            Some(v) if !v.is_complete() => THROWS_PER_VISIT - v.slots.len(),
            _ => THROWS_PER_VISIT,
        }
    }

    /// Points scored per three darts
    pub fn three_dart_average(&self) -> f64 {
        let darts = self.darts_thrown();
        if darts == 0 {
            return 0.0;
        }
        let scored = self.starting_score - self.remaining;
        scored as f64 / darts as f64 * THROWS_PER_VISIT as f64
    }
}

/// True if `remaining` can be finished with a single double or the bullseye
pub fn is_double_out(remaining: u32) -> bool {
    remaining == 50 || (remaining > 0 && remaining <= 40 && remaining % 2 == 0)
}

/// Replay `throws` from `starting_score`
pub fn derive(throws: impl IntoIterator<Item = Throw>, starting_score: u32) -> Scoreboard {
    let mut board = Scoreboard::new(starting_score);
    let mut current: Option<Visit> = None;
    let mut throws = throws.into_iter();

    for throw in throws.by_ref() {
        let mut visit = current
            .take()
            .unwrap_or_else(|| Visit::new(board.visits.len(), board.remaining));

        let on_double = is_double_out(board.remaining);
        let outcome = if throw.kind() == ThrowKind::Floor {
            SlotOutcome::Floor
        } else {
            match board.remaining.checked_sub(throw.points()) {
                Some(0) if throw.kind().is_double() => SlotOutcome::Checkout,
                Some(candidate) if candidate >= 2 => SlotOutcome::Scored,
                _ => SlotOutcome::Bust,
            }
        };

        match outcome {
            SlotOutcome::Scored => board.remaining -= throw.points(),
            SlotOutcome::Checkout => board.remaining = 0,
            SlotOutcome::Bust => board.remaining = visit.remaining_at_start,
            SlotOutcome::Floor => {}
        }

        visit.slots.push(Slot {
            throw,
            outcome,
            on_double,
        });
        visit.remaining = board.remaining;

        if visit.is_complete() {
            board.visits.push(visit);
        } else {
            current = Some(visit);
        }

        if outcome == SlotOutcome::Checkout {
            board.finished = true;
            break;
        }
    }

    if let Some(visit) = current {
        board.visits.push(visit);
    }
    board.ignored = throws.count();
    board
}
