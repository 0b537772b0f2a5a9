use serde::{Deserialize, Serialize};

use super::codec::string_u64;

/// One entry of a bulk modify request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub action: String,
    #[serde(with = "string_u64")]
    pub item_id: u64,
}

impl Action {
    pub fn new(action: impl Into<String>, item_id: u64) -> Self {
        Self {
            action: action.into(),
            item_id,
        }
    }

    pub fn archive(item_id: u64) -> Self {
        Self::new("archive", item_id)
    }

    pub fn readd(item_id: u64) -> Self {
        Self::new("readd", item_id)
    }

    pub fn favorite(item_id: u64) -> Self {
        Self::new("favorite", item_id)
    }

    pub fn unfavorite(item_id: u64) -> Self {
        Self::new("unfavorite", item_id)
    }

    pub fn delete(item_id: u64) -> Self {
        Self::new("delete", item_id)
    }
}

/// `action_results[i]` reports the outcome of submitted action `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyResult {
    #[serde(default)]
    pub action_results: Vec<bool>,
    #[serde(default)]
    pub status: i32,
}

impl ModifyResult {
    pub fn all_succeeded(&self) -> bool {
        self.action_results.iter().all(|ok| *ok)
    }

    pub fn failed_count(&self) -> usize {
        self.action_results.iter().filter(|ok| !**ok).count()
    }
}
