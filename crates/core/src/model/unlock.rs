use url::form_urlencoded;

use crate::model::level::Level;
use crate::model::progress::LevelState;
use crate::model::topic::Topic;

/// Access state of one level as seen by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAccess {
    /// Prerequisite not completed; the level cannot be entered.
    Locked,
    /// Playable but not yet completed.
    Unlocked,
    /// Playable and already completed.
    Completed,
}

impl LevelAccess {
    #[must_use]
    pub fn is_playable(self) -> bool {
        !matches!(self, LevelAccess::Locked)
    }
}

/// Derived access for every level of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockState {
    pub easy: LevelAccess,
    pub medium: LevelAccess,
    pub hard: LevelAccess,
}

impl UnlockState {
    /// Derive access from stored completion flags.
    ///
    /// `Easy` is always playable; every other level is playable only once its
    /// prerequisite is completed. A level whose prerequisite is missing stays
    /// `Locked` even if its own flag is set.
    #[must_use]
    pub fn from_progress(state: &LevelState) -> Self {
        let access = |level: Level| {
            let reachable = level
                .prerequisite()
                .is_none_or(|prev| state.is_completed(prev));
            match (reachable, state.is_completed(level)) {
                (false, _) => LevelAccess::Locked,
                (true, false) => LevelAccess::Unlocked,
                (true, true) => LevelAccess::Completed,
            }
        };
        Self {
            easy: access(Level::Easy),
            medium: access(Level::Medium),
            hard: access(Level::Hard),
        }
    }

    #[must_use]
    pub fn access(&self, level: Level) -> LevelAccess {
        match level {
            Level::Easy => self.easy,
            Level::Medium => self.medium,
            Level::Hard => self.hard,
        }
    }

    #[must_use]
    pub fn is_unlocked(&self, level: Level) -> bool {
        self.access(level).is_playable()
    }
}

impl Default for UnlockState {
    fn default() -> Self {
        Self::from_progress(&LevelState::default())
    }
}

/// Link to the quiz page for `topic` at `level`.
#[must_use]
pub fn quiz_href(topic: &Topic, level: Level) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("topic", topic.as_str())
        .append_pair("level", level.as_str())
        .finish();
    format!("/quiz?{query}")
}
