// Episode feed parsing
// Turns the JSON episode documents served to the player into `Episode`s
use chrono::{DateTime, NaiveDateTime};
use log::warn;
use serde::Deserialize;

use super::episode::Episode;
use crate::error::Result;

const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
struct FileRecord {
    url: String,
    #[serde(rename = "type", default)]
    #[allow(dead_code)]
    mime_type: Option<String>,
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct EpisodeRecord {
    id: String,
    title: String,
    #[serde(default)]
    members: String,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    description: Option<String>,
    file: FileRecord,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Wrapped { episodes: Vec<EpisodeRecord> },
    Bare(Vec<EpisodeRecord>),
}

impl EpisodeRecord {
    fn into_episode(self) -> Episode {
        let published_at = self.published_at.as_deref().and_then(|raw| {
            let parsed = parse_published_at(raw);
            if parsed.is_none() {
                warn!("Ignoring unparsable published_at {:?} on episode {}", raw, self.id);
            }
            parsed
        });

        Episode {
            id: self.id,
            title: self.title,
            members: self.members,
            thumbnail: self.thumbnail,
            url: self.file.url,
            duration: self.file.duration.max(0.0).floor() as u64,
            published_at,
            description: self.description,
        }
    }
}

/// Parse a publication date, either `YYYY-MM-DD HH:MM:SS` or RFC 3339.
pub fn parse_published_at(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), PUBLISHED_AT_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|date| date.naive_utc())
        })
}

/// Parse an episode feed, accepting `{ "episodes": [...] }` or a bare array.
pub fn parse_feed(json: &str) -> Result<Vec<Episode>> {
    let document: FeedDocument = serde_json::from_str(json)?;
    let records = match document {
        FeedDocument::Wrapped { episodes } => episodes,
        FeedDocument::Bare(episodes) => episodes,
    };

    Ok(records.into_iter().map(EpisodeRecord::into_episode).collect())
}

/// Order episodes newest first. Undated episodes keep their relative order at the end.
pub fn sort_latest_first(episodes: &mut [Episode]) {
    episodes.sort_by(|a, b| match (a.published_at, b.published_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
