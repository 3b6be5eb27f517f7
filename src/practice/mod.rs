//! Practice simulator
//!
//! A seeded thrower that aims at a target and scatters around it, plus a
//! checkout helper to pick targets. Deterministic for a given seed, so a
//! simulated leg can be replayed exactly.

pub mod checkout;
pub mod thrower;

pub use checkout::suggest;
pub use thrower::Thrower;

use crate::error::{DartsError, Result};
use crate::game::{Classic301, Scoreboard};

/// Throw at `session` until it checks out or `max_darts` have been thrown
pub fn play_leg(
    session: &mut Classic301,
    thrower: &mut Thrower,
    max_darts: usize,
) -> Result<Scoreboard> {
    let mut scoreboard = session.scoreboard();
    for dart in 0..max_darts {
        if scoreboard.finished {
            break;
        }
        let Some(target) = suggest(scoreboard.remaining) else {
            break;
        };
        let point = thrower.throw_at(session.board(), &target);
        log::debug!("dart {}: aiming {} from {}", dart + 1, target, scoreboard.remaining);
        scoreboard = match session.throw_at(point, dart as f64) {
            Ok(board) => board,
            Err(DartsError::GameFinished) => break,
            Err(e) => return Err(e),
        };
    }
    Ok(scoreboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_thrower_finishes() {
        let mut session = Classic301::new(451.0, "bot").unwrap();
        let mut thrower = Thrower::new(1, 0.0);
        let board = play_leg(&mut session, &mut thrower, 30).unwrap();
        assert!(board.finished);
        // T20 x4, T7, D20
        assert_eq!(board.darts_thrown(), 6);
        assert_eq!(session.log().len(), 6);
    }

    #[test]
    fn test_leg_is_deterministic() {
        let run = |seed| {
            let mut session = Classic301::new(500.0, "bot").unwrap();
            let mut thrower = Thrower::new(seed, 15.0);
            play_leg(&mut session, &mut thrower, 45).unwrap();
            session.log().clone()
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_dart_budget() {
        let mut session = Classic301::new(500.0, "bot").unwrap();
        let mut thrower = Thrower::new(3, 80.0);
        play_leg(&mut session, &mut thrower, 5).unwrap();
        assert!(session.log().len() <= 5);
    }
}
