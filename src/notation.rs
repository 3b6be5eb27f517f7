//! Throw notation codec
//!
//! A token is case-insensitive and must match completely:
//!
//! ```text
//! f            floor (missed the board)
//! b25 | b50    outer / inner bull
//! [d|o|t]?N    double / out / treble / single of board number N (1-20)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DartsError, Result};

/// Where a dart landed, as far as scoring cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowKind {
    Single,
    Double,
    Treble,
    /// Off the board entirely
    Floor,
    /// On the board surface, outside the double ring (scores zero)
    Out,
    /// 25 ring
    OuterBull,
    /// Bullseye, counts as a double for checkout
    InnerBull,
}

impl ThrowKind {
    /// Score multiplier (fully determined by the kind)
    pub fn multiplier(&self) -> u32 {
        match self {
            ThrowKind::Single | ThrowKind::OuterBull => 1,
            ThrowKind::Double | ThrowKind::InnerBull => 2,
            ThrowKind::Treble => 3,
            ThrowKind::Floor | ThrowKind::Out => 0,
        }
    }

    /// Lowercase token prefix
    pub fn prefix(&self) -> &'static str {
        match self {
            ThrowKind::Single => "",
            ThrowKind::Double => "d",
            ThrowKind::Treble => "t",
            ThrowKind::Floor => "f",
            ThrowKind::Out => "o",
            ThrowKind::OuterBull | ThrowKind::InnerBull => "b",
        }
    }

    /// Uppercase letter used on the scoreboard and in stored records
    pub fn letter(&self) -> char {
        match self {
            ThrowKind::Single => 'S',
            ThrowKind::Double => 'D',
            ThrowKind::Treble => 'T',
            ThrowKind::Floor => 'F',
            ThrowKind::Out => 'O',
            ThrowKind::OuterBull | ThrowKind::InnerBull => 'B',
        }
    }

    /// True if a throw of this kind may finish a leg
    pub fn is_double(&self) -> bool {
        matches!(self, ThrowKind::Double | ThrowKind::InnerBull)
    }

    fn is_numbered(&self) -> bool {
        matches!(
            self,
            ThrowKind::Single | ThrowKind::Double | ThrowKind::Treble | ThrowKind::Out
        )
    }
}

/// Segment sentinel for floor throws
pub const FLOOR_SEGMENT: i32 = -1;
/// Segment number shared by both bull kinds
pub const BULL_SEGMENT: i32 = 25;

/// A resolved throw. The multiplier is derived from the kind, so the two
/// can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawThrow", into = "RawThrow")]
pub struct Throw {
    kind: ThrowKind,
    segment: i32,
}

impl Throw {
    /// Build a throw, checking the segment against the board
    pub fn new(kind: ThrowKind, segment: u32) -> Result<Self> {
        let valid = match kind {
            ThrowKind::Floor => true,
            ThrowKind::OuterBull | ThrowKind::InnerBull => segment == BULL_SEGMENT as u32,
            _ => (1..=20).contains(&segment),
        };
        if !valid {
            return Err(DartsError::OutOfRangeSegment {
                token: format!("{}{}", kind.prefix(), segment),
                segment,
            });
        }
        Ok(match kind {
            ThrowKind::Floor => Self::floor(),
            _ => Self {
                kind,
                segment: segment as i32,
            },
        })
    }

    pub fn floor() -> Self {
        Self {
            kind: ThrowKind::Floor,
            segment: FLOOR_SEGMENT,
        }
    }

    pub fn outer_bull() -> Self {
        Self {
            kind: ThrowKind::OuterBull,
            segment: BULL_SEGMENT,
        }
    }

    pub fn inner_bull() -> Self {
        Self {
            kind: ThrowKind::InnerBull,
            segment: BULL_SEGMENT,
        }
    }

    pub fn kind(&self) -> ThrowKind {
        self.kind
    }

    /// Board number, 25 for either bull, -1 for floor
    pub fn segment(&self) -> i32 {
        self.segment
    }

    pub fn multiplier(&self) -> u32 {
        self.kind.multiplier()
    }

    /// Points scored by this throw
    pub fn points(&self) -> u32 {
        self.segment.max(0) as u32 * self.multiplier()
    }

    /// Scoreboard label: `S20`, `T19`, `D16`, `O5`, `B50`, `F`
    pub fn label(&self) -> String {
        match self.kind {
            ThrowKind::Floor => "F".to_string(),
            ThrowKind::OuterBull | ThrowKind::InnerBull => format!("B{}", self.points()),
            kind => format!("{}{}", kind.letter(), self.segment),
        }
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ThrowKind::Floor => f.write_str("f"),
            ThrowKind::OuterBull => f.write_str("b25"),
            ThrowKind::InnerBull => f.write_str("b50"),
            kind => write!(f, "{}{}", kind.prefix(), self.segment),
        }
    }
}

impl FromStr for Throw {
    type Err = DartsError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Parse a notation token into a throw
pub fn parse(token: &str) -> Result<Throw> {
    let lower = token.to_ascii_lowercase();
    if lower == "f" {
        return Ok(Throw::floor());
    }

    let (prefix, digits) = match lower.as_bytes().first() {
        Some(&p @ (b'd' | b'o' | b't' | b'b')) => (p, &lower[1..]),
        _ => (b's', lower.as_str()),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DartsError::InvalidNotation(token.to_string()));
    }
    // Digit runs too long for u32 are simply off the board
    let segment = digits.parse::<u32>().unwrap_or(u32::MAX);

    let kind = match (prefix, segment) {
        (b'b', 25) => ThrowKind::OuterBull,
        (b'b', 50) => ThrowKind::InnerBull,
        (b'b', _) => {
            return Err(DartsError::OutOfRangeSegment {
                token: token.to_string(),
                segment,
            });
        }
        (b'd', _) => ThrowKind::Double,
        (b't', _) => ThrowKind::Treble,
        (b'o', _) => ThrowKind::Out,
        _ => ThrowKind::Single,
    };
    let segment = if kind.is_numbered() {
        segment
    } else {
        BULL_SEGMENT as u32
    };

    Throw::new(kind, segment).map_err(|err| match err {
        DartsError::OutOfRangeSegment { segment, .. } => DartsError::OutOfRangeSegment {
            token: token.to_string(),
            segment,
        },
        other => other,
    })
}

/// Format a throw as its canonical (lowercase) token
pub fn format(throw: &Throw) -> String {
    throw.to_string()
}

/// Stored shape of a throw: `{"kind": "S", "multiplier": 1, "segment": 20}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawThrow {
    kind: char,
    multiplier: u32,
    segment: i32,
}

impl From<Throw> for RawThrow {
    fn from(throw: Throw) -> Self {
        Self {
            kind: throw.kind.letter(),
            multiplier: throw.multiplier(),
            segment: throw.segment,
        }
    }
}

impl TryFrom<RawThrow> for Throw {
    type Error = DartsError;

    fn try_from(raw: RawThrow) -> Result<Self> {
        let segment = u32::try_from(raw.segment).unwrap_or(0);
        match (raw.kind.to_ascii_uppercase(), raw.segment, raw.multiplier) {
            ('F', _, _) => Ok(Throw::floor()),
            // Older logs stored bulls as plain singles of 25 and 50
            ('S', 25, _) | ('B', 25, 1) => Ok(Throw::outer_bull()),
            ('S', 50, _) | ('B', 50, _) | ('B', 25, 2) => Ok(Throw::inner_bull()),
            ('S', _, _) => Throw::new(ThrowKind::Single, segment),
            ('D', _, _) => Throw::new(ThrowKind::Double, segment),
            ('T', _, _) => Throw::new(ThrowKind::Treble, segment),
            ('O', _, _) => Throw::new(ThrowKind::Out, segment),
            (other, _, _) => Err(DartsError::InvalidNotation(format!(
                "{}{}",
                other, raw.segment
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SEGMENT_ORDER;
    use proptest::prelude::*;

    #[test]
    fn test_parse_kinds() {
        let t = parse("t20").unwrap();
        assert_eq!(t.kind(), ThrowKind::Treble);
        assert_eq!(t.segment(), 20);
        assert_eq!(t.multiplier(), 3);
        assert_eq!(t.points(), 60);

        let s = parse("7").unwrap();
        assert_eq!(s.kind(), ThrowKind::Single);
        assert_eq!(s.points(), 7);

        let o = parse("o5").unwrap();
        assert_eq!(o.kind(), ThrowKind::Out);
        assert_eq!(o.points(), 0);

        let f = parse("f").unwrap();
        assert_eq!(f.kind(), ThrowKind::Floor);
        assert_eq!(f.segment(), FLOOR_SEGMENT);
        assert_eq!(f.multiplier(), 0);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse("D16").unwrap(), parse("d16").unwrap());
        assert_eq!(parse("F").unwrap(), Throw::floor());
        assert_eq!(parse("B50").unwrap(), Throw::inner_bull());
    }

    #[test]
    fn test_bull_tokens_are_first_class() {
        // "b50" used to slip through as a single of segment 50
        let inner = parse("b50").unwrap();
        assert_eq!(inner.kind(), ThrowKind::InnerBull);
        assert_eq!(inner.points(), 50);
        assert!(inner.kind().is_double());

        let outer = parse("b25").unwrap();
        assert_eq!(outer.kind(), ThrowKind::OuterBull);
        assert_eq!(outer.points(), 25);
        assert!(!outer.kind().is_double());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for token in ["", "x", "d", "t2x", "20d", "xd20", "ff", "f1", " 20", "-3"] {
            assert!(
                matches!(parse(token), Err(DartsError::InvalidNotation(ref s)) if s == token),
                "{token:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_parse_rejects_off_board_segments() {
        for token in ["0", "21", "d25", "t0", "50", "b30", "99999999999999"] {
            assert!(
                matches!(parse(token), Err(DartsError::OutOfRangeSegment { .. })),
                "{token:?} should be out of range"
            );
        }
    }

    #[test]
    fn test_engine_tokens_round_trip() {
        let mut tokens = vec!["f".to_string(), "b25".to_string(), "b50".to_string()];
        for n in SEGMENT_ORDER {
            for prefix in ["", "d", "t", "o"] {
                tokens.push(format!("{prefix}{n}"));
            }
        }
        for token in tokens {
            assert_eq!(format(&parse(&token).unwrap()), token);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(parse("20").unwrap().label(), "S20");
        assert_eq!(parse("t19").unwrap().label(), "T19");
        assert_eq!(parse("b25").unwrap().label(), "B25");
        assert_eq!(parse("b50").unwrap().label(), "B50");
        assert_eq!(parse("f").unwrap().label(), "F");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&parse("d16").unwrap()).unwrap();
        assert_eq!(json, r#"{"kind":"D","multiplier":2,"segment":16}"#);
        let floor = serde_json::to_string(&Throw::floor()).unwrap();
        assert_eq!(floor, r#"{"kind":"F","multiplier":0,"segment":-1}"#);
    }

    #[test]
    fn test_serde_legacy_bulls() {
        let inner: Throw =
            serde_json::from_str(r#"{"kind":"S","multiplier":1,"segment":50}"#).unwrap();
        assert_eq!(inner, Throw::inner_bull());
        let outer: Throw =
            serde_json::from_str(r#"{"kind":"S","multiplier":1,"segment":25}"#).unwrap();
        assert_eq!(outer, Throw::outer_bull());
        let bad = serde_json::from_str::<Throw>(r#"{"kind":"T","multiplier":3,"segment":21}"#);
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_numbered_round_trip(segment in 1u32..=20, prefix in prop::sample::select(vec!["", "d", "t", "o"])) {
            let token = format!("{prefix}{segment}");
            let throw = parse(&token).unwrap();
            prop_assert_eq!(format(&throw), token.clone());
            prop_assert_eq!(parse(&token.to_uppercase()).unwrap(), throw);
        }

        #[test]
        fn prop_json_round_trip(segment in 1u32..=20, kind in prop::sample::select(vec![
            ThrowKind::Single, ThrowKind::Double, ThrowKind::Treble, ThrowKind::Out,
        ])) {
            let throw = Throw::new(kind, segment).unwrap();
            let json = serde_json::to_string(&throw).unwrap();
            prop_assert_eq!(serde_json::from_str::<Throw>(&json).unwrap(), throw);
        }
    }
}
