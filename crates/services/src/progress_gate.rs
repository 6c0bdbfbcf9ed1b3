use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use ispace_core::model::{Level, LevelState, ProgressMap, Topic, UnlockState};
use storage::keys;
use storage::repository::KeyValueStore;

use crate::error::ProgressGateError;

/// Progress and unlock state for one topic, as shown on the topic map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOverview {
    pub topic: Topic,
    pub progress: LevelState,
    pub unlock: UnlockState,
}

/// Tracks completed levels per topic and derives which levels are playable.
///
/// Reads never fail: a missing or unreadable progress blob is treated as
/// "no progress", and a malformed topic entry only affects that topic.
/// Completions go through a single async mutex so concurrent calls on the
/// same gate never drop each other's updates.
pub struct ProgressGate {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl ProgressGate {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Stored level state for `topic`, or all-false when absent.
    pub async fn topic_progress(&self, topic: &Topic) -> LevelState {
        self.load().await.topic(topic)
    }

    /// Which levels of `topic` are currently playable.
    pub async fn unlock_state(&self, topic: &Topic) -> UnlockState {
        UnlockState::from_progress(&self.topic_progress(topic).await)
    }

    /// Whether navigation into `level` of `topic` is allowed right now.
    pub async fn can_enter(&self, topic: &Topic, level: Level) -> bool {
        self.unlock_state(topic).await.is_unlocked(level)
    }

    /// Progress and unlock state for each of `topics`, from a single read.
    pub async fn overview(&self, topics: &[Topic]) -> Vec<TopicOverview> {
        let map = self.load().await;
        topics
            .iter()
            .map(|topic| {
                let progress = map.topic(topic);
                TopicOverview {
                    topic: topic.clone(),
                    progress,
                    unlock: UnlockState::from_progress(&progress),
                }
            })
            .collect()
    }

    /// Mark `level` of `topic` as completed and persist the full mapping.
    ///
    /// Completing an already-completed level leaves the store untouched.
    /// Unreadable topic entries are rewritten as all-false while every other
    /// topic is kept. Only a blob that is not a JSON object at all is
    /// replaced by a fresh mapping holding this completion.
    ///
    /// # Errors
    ///
    /// Returns `ProgressGateError::Storage` if the store cannot be read or
    /// written.
    pub async fn complete_level(
        &self,
        topic: &Topic,
        level: Level,
    ) -> Result<LevelState, ProgressGateError> {
        let _guard = self.write_lock.lock().await;

        let mut map = match self.store.get(keys::PROGRESS).await? {
            None => ProgressMap::new(),
            Some(raw) => ProgressMap::from_json(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "discarding malformed progress data");
                ProgressMap::new()
            }),
        };

        if !map.complete(topic, level) {
            debug!(%topic, %level, "level already completed");
            return Ok(map.topic(topic));
        }

        self.store.set(keys::PROGRESS, &map.to_json()?).await?;
        info!(%topic, %level, "level completed");
        Ok(map.topic(topic))
    }

    async fn load(&self) -> ProgressMap {
        match self.store.get(keys::PROGRESS).await {
            Ok(None) => ProgressMap::new(),
            Ok(Some(raw)) => ProgressMap::from_json(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "malformed progress data, treating as empty");
                ProgressMap::new()
            }),
            Err(err) => {
                warn!(error = %err, "progress store unavailable, treating as empty");
                ProgressMap::new()
            }
        }
    }
}
