//! Target selection for a remaining score

use crate::game::is_double_out;
use crate::notation::{Throw, ThrowKind};

/// Leaves worth setting up, best first
const PREFERRED_LEAVES: [u32; 10] = [40, 32, 36, 24, 16, 20, 8, 12, 4, 2];

/// Pick a target for the next dart, None if nothing can be scored
pub fn suggest(remaining: u32) -> Option<Throw> {
    if remaining == 50 {
        return Some(Throw::inner_bull());
    }
    if is_double_out(remaining) {
        return Throw::new(ThrowKind::Double, remaining / 2).ok();
    }

    for leave in PREFERRED_LEAVES {
        if remaining <= leave {
            continue;
        }
        let rest = remaining - leave;
        if rest <= 20 {
            return Throw::new(ThrowKind::Single, rest).ok();
        }
        if rest % 3 == 0 && rest / 3 <= 20 {
            return Throw::new(ThrowKind::Treble, rest / 3).ok();
        }
    }

    if remaining >= 62 {
        Throw::new(ThrowKind::Treble, 20).ok()
    } else {
        None
    }
}
