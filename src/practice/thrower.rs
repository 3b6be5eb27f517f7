//! Seeded thrower with a circular gaussian grouping

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::board::{Board, Point, Ring, segment_angle};
use crate::notation::{Throw, ThrowKind};
use crate::polar_to_cartesian;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Thrower {
    rng: Pcg32,
    /// Standard deviation of the grouping on each axis (mm)
    spread_mm: f64,
}

impl Thrower {
    pub fn new(seed: u64, spread_mm: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            spread_mm: spread_mm.max(0.0),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.seed, settings.spread_mm)
    }

    /// Board-relative aim point (mm) for a target
    pub fn aim_offset(target: &Throw) -> DVec2 {
        let ring = match target.kind() {
            ThrowKind::Single => Ring::OuterSingle,
            ThrowKind::Double => Ring::Double,
            ThrowKind::Treble => Ring::Treble,
            ThrowKind::Out => Ring::Out,
            ThrowKind::OuterBull => Ring::OuterBull,
            ThrowKind::InnerBull => Ring::InnerBull,
            ThrowKind::Floor => Ring::Floor,
        };
        let angle = u8::try_from(target.segment())
            .ok()
            .and_then(segment_angle)
            .unwrap_or(-FRAC_PI_2);
        polar_to_cartesian(ring.mid_radius(), angle)
    }

    /// Canvas point where a dart aimed at `target` lands
    pub fn throw_at(&mut self, board: &Board, target: &Throw) -> Point {
        let offset = Self::aim_offset(target) + self.scatter();
        board.to_canvas(offset)
    }

    /// Gaussian miss vector (Box-Muller)
    fn scatter(&mut self) -> DVec2 {
        if self.spread_mm == 0.0 {
            return DVec2::ZERO;
        }
        // u1 in (0, 1] so ln is finite
        let u1 = 1.0 - self.rng.random::<f64>();
        let u2 = self.rng.random::<f64>();
        let r = (-2.0 * u1.ln()).sqrt() * self.spread_mm;
        polar_to_cartesian(r, TAU * u2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SEGMENT_ORDER;
    use crate::notation::parse;

    #[test]
    fn test_aim_hits_target_without_spread() {
        let board = Board::for_canvas(640.0).unwrap();
        let mut thrower = Thrower::new(0, 0.0);
        let mut targets = vec!["b50".to_string(), "b25".to_string(), "f".to_string()];
        for n in SEGMENT_ORDER {
            for prefix in ["", "d", "t", "o"] {
                targets.push(format!("{prefix}{n}"));
            }
        }
        for token in targets {
            let target = parse(&token).unwrap();
            let point = thrower.throw_at(&board, &target);
            assert_eq!(board.score(point).unwrap(), token);
        }
    }

    #[test]
    fn test_same_seed_same_darts() {
        let board = Board::for_canvas(451.0).unwrap();
        let target = parse("t20").unwrap();
        let mut a = Thrower::new(42, 10.0);
        let mut b = Thrower::new(42, 10.0);
        for _ in 0..20 {
            assert_eq!(a.throw_at(&board, &target), b.throw_at(&board, &target));
        }
    }

    #[test]
    fn test_grouping_is_centred() {
        let board = Board::for_canvas(451.0).unwrap();
        let target = Throw::inner_bull();
        let mut thrower = Thrower::new(9, 10.0);
        let n = 2000;
        let mut sum = DVec2::ZERO;
        for _ in 0..n {
            sum += DVec2::from(thrower.throw_at(&board, &target)) - DVec2::from(board.center());
        }
        let mean = sum / n as f64;
        assert!(mean.length() < 1.5, "mean offset {mean}");
    }
}
