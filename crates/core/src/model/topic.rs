use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic cannot be empty")]
    Empty,
}

/// Identifier of a math subject area, e.g. `algebra`.
///
/// Any trimmed, non-empty string is a valid topic; the built-in catalog only
/// drives what the topic map shows.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// Creates a topic from raw text.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::Empty` if the text is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, TopicError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TopicError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name from the catalog, or the raw identifier for other topics.
    #[must_use]
    pub fn display_name(&self) -> &str {
        CATALOG
            .iter()
            .find(|(id, _)| *id == self.0)
            .map_or(self.0.as_str(), |(_, name)| *name)
    }

    /// Topics shipped with the site, in map order.
    #[must_use]
    pub fn catalog() -> Vec<Topic> {
        CATALOG
            .iter()
            .map(|(id, _)| Topic((*id).to_owned()))
            .collect()
    }
}

const CATALOG: [(&str, &str); 5] = [
    ("algebra", "Algebra"),
    ("real_numbers", "Real Numbers"),
    ("statistics", "Statistics"),
    ("surface_areas_volumes", "Surface Areas and Volumes"),
    ("triangles", "Triangles"),
];

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topic({})", self.0)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Topic {
    type Error = TopicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}
