use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codec::{string_bool, string_i64, string_u64, unix_seconds};
use super::enums::{ItemStatus, MediaPresence};

/// A saved bookmark as returned by the retrieve endpoint.
///
/// `tags`, `authors`, `images` and `videos` have no fixed shape on the wire and
/// are kept as the parsed JSON the service sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(with = "string_u64")]
    pub item_id: u64,
    #[serde(with = "string_u64", default)]
    pub resolved_id: u64,
    #[serde(default)]
    pub given_url: String,
    #[serde(default)]
    pub resolved_url: String,
    #[serde(default)]
    pub given_title: String,
    #[serde(default)]
    pub resolved_title: String,
    #[serde(with = "string_bool", default)]
    pub favorite: bool,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub excerpt: String,
    #[serde(with = "string_bool", default)]
    pub is_article: bool,
    #[serde(with = "string_bool", default)]
    pub is_index: bool,
    #[serde(default)]
    pub has_image: MediaPresence,
    #[serde(default)]
    pub has_video: MediaPresence,
    #[serde(with = "string_i64", default)]
    pub word_count: i64,
    #[serde(with = "string_i64", default)]
    pub sort_id: i64,
    #[serde(with = "unix_seconds", default)]
    pub time_added: Option<DateTime<Utc>>,
    #[serde(with = "unix_seconds", default)]
    pub time_updated: Option<DateTime<Utc>>,
    #[serde(with = "unix_seconds", default)]
    pub time_read: Option<DateTime<Utc>>,
    #[serde(with = "unix_seconds", default)]
    pub time_favorited: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Value>,
}

impl Item {
    /// Resolved title, or the title given at save time when the page was never resolved.
    pub fn title(&self) -> &str {
        non_empty(&self.resolved_title).unwrap_or(&self.given_title)
    }

    pub fn url(&self) -> &str {
        non_empty(&self.resolved_url).unwrap_or(&self.given_url)
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn is_article(&self) -> bool {
        self.is_article
    }

    /// Tag names, whichever of the service's shapes `tags` arrived in.
    pub fn tag_names(&self) -> Vec<String> {
        let mut names = match self.tags.as_ref() {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(|value| match value {
                    Value::String(name) => Some(name.clone()),
                    Value::Object(map) => map
                        .get("tag")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        names.sort();
        names
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
