use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::level::Level;
use crate::model::topic::Topic;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("malformed progress data: {0}")]
    Malformed(#[from] serde_json::Error),
}

//
// ─── LEVEL STATE ──────────────────────────────────────────────────────────────
//

/// Completion flags for the three levels of one topic.
///
/// Fields missing from persisted data decode as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelState {
    pub easy: bool,
    pub medium: bool,
    pub hard: bool,
}

impl LevelState {
    #[must_use]
    pub fn is_completed(&self, level: Level) -> bool {
        match level {
            Level::Easy => self.easy,
            Level::Medium => self.medium,
            Level::Hard => self.hard,
        }
    }

    /// Marks `level` completed. Returns `true` if the flag changed.
    ///
    /// Flags only ever move from `false` to `true`.
    pub fn mark_completed(&mut self, level: Level) -> bool {
        let flag = match level {
            Level::Easy => &mut self.easy,
            Level::Medium => &mut self.medium,
            Level::Hard => &mut self.hard,
        };
        let changed = !*flag;
        *flag = true;
        changed
    }
}

//
// ─── PROGRESS MAP ─────────────────────────────────────────────────────────────
//

/// Persisted mapping of topic to level state.
///
/// Serializes as a flat JSON object: `{"algebra": {"easy": true, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProgressMap {
    topics: BTreeMap<String, LevelState>,
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the persisted JSON text.
    ///
    /// Entries are decoded one by one: a topic whose value is not an object
    /// reads as all-false, and a flag that is not a boolean reads as `false`,
    /// without affecting any other topic.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Malformed` if the text is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, ProgressError> {
        let entries: BTreeMap<String, Value> = serde_json::from_str(raw)?;
        let topics = entries
            .into_iter()
            .map(|(topic, value)| (topic, decode_entry(&value)))
            .collect();
        Ok(Self { topics })
    }

    /// Encode for persistence.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String, ProgressError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Stored state for `topic`, or all-false when absent.
    #[must_use]
    pub fn topic(&self, topic: &Topic) -> LevelState {
        self.topics.get(topic.as_str()).copied().unwrap_or_default()
    }

    /// Marks `level` completed for `topic`, creating the entry if needed.
    /// Returns `true` if anything changed.
    pub fn complete(&mut self, topic: &Topic, level: Level) -> bool {
        self.topics
            .entry(topic.as_str().to_owned())
            .or_default()
            .mark_completed(level)
    }
}

fn decode_entry(value: &Value) -> LevelState {
    let Some(fields) = value.as_object() else {
        return LevelState::default();
    };
    let flag = |name: &str| fields.get(name).and_then(Value::as_bool).unwrap_or(false);
    LevelState {
        easy: flag("easy"),
        medium: flag("medium"),
        hard: flag("hard"),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn algebra() -> Topic {
        Topic::new("algebra").unwrap()
    }

    #[test]
    fn absent_topic_defaults_to_all_false() {
        let map = ProgressMap::new();
        assert_eq!(map.topic(&algebra()), LevelState::default());
    }

    #[test]
    fn completion_preserves_other_levels_and_is_idempotent() {
        let mut map = ProgressMap::new();
        assert!(map.complete(&algebra(), Level::Easy));
        assert!(map.complete(&algebra(), Level::Medium));
        assert!(!map.complete(&algebra(), Level::Easy));

        let state = map.topic(&algebra());
        assert!(state.easy && state.medium && !state.hard);
        assert_eq!(
            map.to_json().unwrap(),
            r#"{"algebra":{"easy":true,"medium":true,"hard":false}}"#
        );
    }

    #[test]
    fn decodes_persisted_shape_with_missing_fields() {
        let map = ProgressMap::from_json(r#"{"algebra":{"easy":true},"triangles":{}}"#).unwrap();
        assert_eq!(
            map.topic(&algebra()),
            LevelState {
                easy: true,
                medium: false,
                hard: false
            }
        );
        assert_eq!(
            map.topic(&Topic::new("triangles").unwrap()),
            LevelState::default()
        );
    }

    #[test]
    fn bad_entry_does_not_discard_other_topics() {
        let map = ProgressMap::from_json(
            r#"{"algebra":{"easy":true,"medium":true},"triangles":null,"statistics":[1],"stats":{"easy":"yes","hard":true}}"#,
        )
        .unwrap();

        let algebra_state = map.topic(&algebra());
        assert!(algebra_state.easy && algebra_state.medium && !algebra_state.hard);
        assert_eq!(
            map.topic(&Topic::new("triangles").unwrap()),
            LevelState::default()
        );
        assert_eq!(
            map.topic(&Topic::new("statistics").unwrap()),
            LevelState::default()
        );
        assert_eq!(
            map.topic(&Topic::new("stats").unwrap()),
            LevelState {
                easy: false,
                medium: false,
                hard: true
            }
        );
    }

    #[test]
    fn encodes_flat_object() {
        let mut map = ProgressMap::new();
        map.complete(&algebra(), Level::Easy);
        assert_eq!(
            map.to_json().unwrap(),
            r#"{"algebra":{"easy":true,"medium":false,"hard":false}}"#
        );
    }

    #[test]
    fn rejects_non_json_and_non_objects() {
        assert!(matches!(
            ProgressMap::from_json("not json"),
            Err(ProgressError::Malformed(_))
        ));
        assert!(matches!(
            ProgressMap::from_json("[true]"),
            Err(ProgressError::Malformed(_))
        ));
    }
}
