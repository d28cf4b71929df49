// Episode data model
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::metadata::parse_members;

/// A playable podcast episode. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub url: String,
    /// Length in whole seconds
    pub duration: u64,
    #[serde(default)]
    pub published_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Episode {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        url: impl Into<String>,
        duration: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            url: url.into(),
            duration,
            published_at: None,
            description: None,
        }
    }

    pub fn with_published_at(mut self, published_at: NaiveDateTime) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn member_names(&self) -> Vec<String> {
        parse_members(&self.members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_labels() {
        let episode = Episode::new(
            "ep-1",
            "Open source",
            "Diego e Richard",
            "https://cdn.example/ep-1.jpg",
            "https://cdn.example/ep-1.m4a",
            3981,
        )
        .with_description("<p>About open source</p>");

        assert_eq!(episode.member_names(), vec!["Diego", "Richard"]);
        assert_eq!(episode.description.as_deref(), Some("<p>About open source</p>"));
        assert!(episode.published_at.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let episode = Episode::new("a", "A", "M", "t.jpg", "a.mp3", 10);
        let json = serde_json::to_value(&episode).unwrap();

        assert_eq!(json["duration"], 10);
        assert!(json.get("publishedAt").is_some());
    }
}
