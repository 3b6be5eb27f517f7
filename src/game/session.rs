//! A 301 leg in progress
//!
//! Ties a placed board to a throw log. Every interaction goes through the
//! pure pipeline (hit test -> notation -> append) and the returned
//! scoreboard is derived fresh from the log.

use crate::board::{Board, Point};
use crate::error::{DartsError, Result};
use crate::settings::Settings;

use super::Game;
use super::record::{CanvasSize, ThrowRecord};
use super::scorekeeper::{Scoreboard, derive};
use super::throw_log::ThrowLog;

#[derive(Debug, Clone)]
pub struct Classic301 {
    board: Board,
    log: ThrowLog,
    game: Game,
    player: String,
    starting_score: u32,
}

impl Classic301 {
    /// New leg on a square canvas of `size` pixels
    pub fn new(size: f64, player: impl Into<String>) -> Result<Self> {
        Self::for_game(Game::Classic301, size, player)
    }

    /// New leg from user settings
    pub fn from_settings(settings: &Settings, size: f64) -> Result<Self> {
        Self::for_game(settings.game, size, settings.player.clone())
    }

    fn for_game(game: Game, size: f64, player: impl Into<String>) -> Result<Self> {
        let starting_score = game
            .starting_score()
            .ok_or(DartsError::UnsupportedGame(game))?;
        Ok(Self {
            board: Board::for_canvas(size)?,
            log: ThrowLog::new(),
            game,
            player: player.into(),
            starting_score,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn log(&self) -> &ThrowLog {
        &self.log
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Name tagged onto throws from now on; earlier records keep theirs
    pub fn set_player(&mut self, player: impl Into<String>) {
        self.player = player.into();
    }

    /// Current scoreboard, derived from the whole log
    pub fn scoreboard(&self) -> Scoreboard {
        derive(self.log.throws(), self.starting_score)
    }

    pub fn is_finished(&self) -> bool {
        self.scoreboard().finished
    }

    /// Throw a dart at a canvas point
    ///
    /// Rejected (and nothing is logged) if the leg is already finished or
    /// the point cannot be scored.
    pub fn throw_at(&mut self, point: Point, timestamp: f64) -> Result<Scoreboard> {
        if self.is_finished() {
            log::warn!("Ignoring throw at ({:.1}, {:.1}): game finished", point.x, point.y);
            return Err(DartsError::GameFinished);
        }

        let throw = self.board.hit(point)?.throw()?;
        self.log.push(ThrowRecord {
            timestamp,
            canvas: CanvasSize::square(self.board.size()),
            point,
            game: self.game,
            player: self.player.clone(),
            throw,
        });

        let scoreboard = self.scoreboard();
        log::info!("{} threw {} ({} left)", self.player, throw, scoreboard.remaining);
        if scoreboard.finished {
            log::info!(
                "{} checked out in {} darts",
                self.player,
                scoreboard.darts_thrown()
            );
        }
        Ok(scoreboard)
    }

    /// Remove the last throw
    pub fn undo(&mut self) -> Option<ThrowRecord> {
        let record = self.log.undo();
        if let Some(r) = &record {
            log::info!("Undid {}", r.throw);
        }
        record
    }

    /// Start the leg over
    pub fn reset(&mut self) {
        log::info!("Reset ({} throws cleared)", self.log.len());
        self.log.reset();
    }

    /// Re-fit to a new canvas size, rescaling stored points
    pub fn resize(&mut self, size: f64) -> Result<()> {
        self.board.resize(size)?;
        self.log.rescale(size)
    }

    /// Replace the log (e.g. from an imported file)
    pub fn load(&mut self, mut log: ThrowLog) -> Result<()> {
        log.rescale(self.board.size())?;
        log::info!("Loaded {} throws", log.len());
        self.log = log;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Ring, segment_angle};
    use crate::consts::OVERALL_DIAMETER;
    use crate::polar_to_cartesian;

    /// Canvas point in the middle of `ring` of segment `number`
    fn aim(session: &Classic301, ring: Ring, number: u8) -> Point {
        let angle = segment_angle(number).unwrap();
        session
            .board()
            .to_canvas(polar_to_cartesian(ring.mid_radius(), angle))
    }

    #[test]
    fn test_throws_are_logged() {
        let mut game = Classic301::new(OVERALL_DIAMETER, "jdb").unwrap();
        let board = game.throw_at(aim(&game, Ring::Treble, 20), 1.0).unwrap();
        assert_eq!(board.remaining, 241);
        assert_eq!(game.log().len(), 1);
        let record = game.log().last().unwrap();
        assert_eq!(record.player, "jdb");
        assert_eq!(record.game, Game::Classic301);
        assert_eq!(record.canvas, CanvasSize::square(OVERALL_DIAMETER));
        assert_eq!(record.throw.to_string(), "t20");
    }

    #[test]
    fn test_finished_game_rejects_throws() {
        let mut game = Classic301::new(600.0, "p").unwrap();
        // 301 = 180 + 81 + 40
        for (ring, n) in [
            (Ring::Treble, 20),
            (Ring::Treble, 20),
            (Ring::Treble, 20),
            (Ring::Treble, 20),
            (Ring::Treble, 7),
        ] {
            game.throw_at(aim(&game, ring, n), 0.0).unwrap();
        }
        game.throw_at(Point::new(-10.0, -10.0), 0.0).unwrap();
        assert_eq!(game.scoreboard().remaining, 40);

        // Bullseye would leave -10: bust, still 40
        let board = game.throw_at(game.board().center(), 0.0).unwrap();
        assert!(board.visits.last().unwrap().is_bust());
        assert_eq!(board.remaining, 40);

        let board = game.throw_at(aim(&game, Ring::Double, 20), 0.0).unwrap();
        assert!(board.finished);
        assert!(matches!(
            game.throw_at(aim(&game, Ring::Double, 20), 0.0),
            Err(DartsError::GameFinished)
        ));
        assert_eq!(game.log().len(), 8);

        // Undo reopens the leg
        game.undo();
        assert!(!game.is_finished());
        assert_eq!(game.scoreboard().remaining, 40);
    }

    #[test]
    fn test_undo_restores_scoreboard() {
        let mut game = Classic301::new(451.0, "p").unwrap();
        for (ring, n) in [
            (Ring::Treble, 20),
            (Ring::OuterSingle, 5),
            (Ring::Double, 1),
            (Ring::Treble, 19),
        ] {
            let before = game.scoreboard();
            game.throw_at(aim(&game, ring, n), 0.0).unwrap();
            assert_ne!(game.scoreboard(), before);
            game.undo().unwrap();
            assert_eq!(game.scoreboard(), before);
            // Throw it again for real and move on
            game.throw_at(aim(&game, ring, n), 0.0).unwrap();
        }
        assert_eq!(game.scoreboard().remaining, 301 - 60 - 5 - 2 - 57);
    }

    #[test]
    fn test_set_player_tags_later_throws() {
        let mut game = Classic301::new(451.0, "first").unwrap();
        game.throw_at(aim(&game, Ring::Treble, 20), 0.0).unwrap();
        game.set_player("second");
        game.throw_at(aim(&game, Ring::Treble, 20), 0.0).unwrap();
        let players: Vec<&str> = game.log().records().iter().map(|r| r.player.as_str()).collect();
        assert_eq!(players, ["first", "second"]);
    }

    #[test]
    fn test_bad_point_is_not_logged() {
        let mut game = Classic301::new(400.0, "p").unwrap();
        assert!(game.throw_at(Point::new(f64::NAN, 1.0), 0.0).is_err());
        assert!(game.log().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut game = Classic301::new(400.0, "p").unwrap();
        game.throw_at(Point::new(-10.0, -10.0), 0.0).unwrap();
        assert_eq!(game.scoreboard().visits[0].slots[0].to_string(), "FLOOR");
        game.reset();
        assert!(game.log().is_empty());
        assert_eq!(game.scoreboard().remaining, 301);
    }

    #[test]
    fn test_resize_keeps_scores() {
        let mut game = Classic301::new(400.0, "p").unwrap();
        game.throw_at(aim(&game, Ring::Double, 16), 0.0).unwrap();
        game.resize(800.0).unwrap();

        let record = game.log().last().unwrap();
        assert_eq!(record.canvas, CanvasSize::square(800.0));
        let rescored = game.board().score(record.point).unwrap();
        assert_eq!(rescored, "d16");
    }

    #[test]
    fn test_load_replaces_log() {
        let mut source = Classic301::new(400.0, "p").unwrap();
        source.throw_at(aim(&source, Ring::Treble, 19), 0.0).unwrap();
        let json = source.log().to_json().unwrap();

        let mut game = Classic301::new(800.0, "p").unwrap();
        game.load(ThrowLog::from_json(&json).unwrap()).unwrap();
        assert_eq!(game.scoreboard().remaining, 301 - 57);
        assert_eq!(game.log().records()[0].canvas.width, 800.0);
    }

    #[test]
    fn test_unsupported_game() {
        let settings = Settings {
            game: Game::Cricket,
            ..Settings::default()
        };
        assert!(matches!(
            Classic301::from_settings(&settings, 400.0),
            Err(DartsError::UnsupportedGame(Game::Cricket))
        ));
    }
}
