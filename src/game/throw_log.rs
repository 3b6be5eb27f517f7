//! Append-only throw log
//!
//! The log is the only stored game state. Records are appended by the
//! hit-test pipeline and removed only by `undo` (last record) or `reset`
//! (everything); scoreboards are always derived from it.

use serde::{Deserialize, Serialize};

use super::record::ThrowRecord;
use crate::error::{DartsError, Result};
use crate::notation::Throw;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThrowLog {
    records: Vec<ThrowRecord>,
}

impl ThrowLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ThrowRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: ThrowRecord) {
        self.records.push(record);
    }

    /// Remove and return the most recent record
    pub fn undo(&mut self) -> Option<ThrowRecord> {
        self.records.pop()
    }

    /// Clear the whole log
    pub fn reset(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[ThrowRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&ThrowRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Throws in log order
    pub fn throws(&self) -> impl Iterator<Item = Throw> + '_ {
        self.records.iter().map(|r| r.throw)
    }

    /// Rescale every stored point to a square canvas of `size` pixels
    pub fn rescale(&mut self, size: f64) -> Result<()> {
        if !size.is_finite() || size <= 0.0 {
            return Err(DartsError::GeometryDegenerate(format!(
                "canvas size {size} must be positive"
            )));
        }
        for record in &mut self.records {
            *record = record.rescaled(size);
        }
        Ok(())
    }

    /// Serialize as a JSON array of records
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a JSON array of records; blank input is an empty log
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<ThrowRecord> for ThrowLog {
    fn from_iter<I: IntoIterator<Item = ThrowRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;
    use crate::game::{CanvasSize, Game};
    use crate::notation::parse;

    fn record(token: &str, x: f64) -> ThrowRecord {
        ThrowRecord {
            timestamp: x,
            canvas: CanvasSize::square(100.0),
            point: Point::new(x, x),
            game: Game::Classic301,
            player: "p1".to_string(),
            throw: parse(token).unwrap(),
        }
    }

    #[test]
    fn test_push_undo_reset() {
        let mut log = ThrowLog::new();
        log.push(record("20", 1.0));
        log.push(record("t20", 2.0));
        assert_eq!(log.len(), 2);

        let popped = log.undo().unwrap();
        assert_eq!(popped.throw, parse("t20").unwrap());
        assert_eq!(log.len(), 1);

        log.reset();
        assert!(log.is_empty());
        assert!(log.undo().is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let log: ThrowLog = [record("d16", 1.0), record("f", 2.0)].into_iter().collect();
        let json = log.to_json().unwrap();
        assert!(json.starts_with('['));
        assert_eq!(ThrowLog::from_json(&json).unwrap(), log);
    }

    #[test]
    fn test_blank_json_is_empty() {
        assert!(ThrowLog::from_json("").unwrap().is_empty());
        assert!(ThrowLog::from_json("  \n").unwrap().is_empty());
        assert!(matches!(
            ThrowLog::from_json("{not json"),
            Err(DartsError::Json(_))
        ));
    }

    #[test]
    fn test_rescale_all() {
        let mut log: ThrowLog = [record("1", 10.0), record("2", 50.0)].into_iter().collect();
        log.rescale(200.0).unwrap();
        assert_eq!(log.records()[0].point, Point::new(20.0, 20.0));
        assert_eq!(log.records()[1].point, Point::new(100.0, 100.0));
        assert!(log.rescale(0.0).is_err());
    }
}
