use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::enums::{ContentType, DetailType, FavoriteFilter, Sort, State};
use super::item::Item;

/// Options for the retrieve endpoint. Unset fields are left out of the request
/// entirely, which the service treats differently from an explicit zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RetrieveFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<FavoriteFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(rename = "detailType", skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<DetailType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl RetrieveFilter {
    #[must_use]
    pub fn state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn favorite(mut self, favorite: FavoriteFilter) -> Self {
        self.favorite = Some(favorite);
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn detail_type(mut self, detail_type: DetailType) -> Self {
        self.detail_type = Some(detail_type);
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RetrieveResult {
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub complete: Option<i32>,
    #[serde(default)]
    pub since: Option<i64>,
    /// Keyed by item id. Iteration order carries no meaning.
    #[serde(rename = "list", default, deserialize_with = "deserialize_item_list")]
    pub items: HashMap<u64, Item>,
}

impl RetrieveResult {
    /// Items in the service's own ordering (`sort_id`), ties broken by id.
    pub fn sorted_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by_key(|item| (item.sort_id, item.item_id));
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// An empty result comes back as `[]` rather than `{}`. Items are decoded one
// by one so a bad record reports its own key and field.
fn deserialize_item_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<HashMap<u64, Item>, D::Error> {
    let entries: Vec<(String, Value)> = match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(values) => values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value))
            .collect(),
        other => {
            return Err(de::Error::invalid_type(
                unexpected(&other),
                &"an object or array of items",
            ))
        }
    };

    let mut items = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        let item: Item = serde_json::from_value(value).map_err(|err| {
            <D::Error as de::Error>::custom(format!("list item {key}: {err}"))
        })?;
        items.insert(item.item_id, item);
    }
    Ok(items)
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(flag) => de::Unexpected::Bool(*flag),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(text) => de::Unexpected::Str(text),
        _ => de::Unexpected::Other("json value"),
    }
}
