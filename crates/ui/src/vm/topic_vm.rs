use ispace_core::model::{Level, Topic};
use services::TopicOverview;

/// A planet on the topic map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub topic: Topic,
    pub name: String,
    pub completed: usize,
    pub total: usize,
}

impl TopicCardVm {
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }
}

#[must_use]
pub fn map_topic_cards(overview: &[TopicOverview]) -> Vec<TopicCardVm> {
    overview
        .iter()
        .map(|item| TopicCardVm {
            topic: item.topic.clone(),
            name: item.topic.display_name().to_owned(),
            completed: Level::ALL
                .iter()
                .filter(|level| item.progress.is_completed(**level))
                .count(),
            total: Level::ALL.len(),
        })
        .collect()
}
