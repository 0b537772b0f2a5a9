use chrono::{DateTime, Utc};
use clap::Args;
use pocket_core::{ContentType, FavoriteFilter, Sort, State};

use super::format::DEFAULT_TEMPLATE;

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, default_value = DEFAULT_TEMPLATE, help = "Line template, e.g. '{{item_id:9}} {{title}}'")]
    pub format: String,
    #[arg(long, conflicts_with = "format", help = "Print items as JSON")]
    pub json: bool,
    #[arg(long)]
    pub domain: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, help = "unread, archive or all")]
    pub state: Option<State>,
    #[arg(long, help = "favorited or unfavorited")]
    pub favorite: Option<FavoriteFilter>,
    #[arg(long, help = "article, video or image")]
    pub content_type: Option<ContentType>,
    #[arg(long, help = "newest, oldest, title or site")]
    pub sort: Option<Sort>,
    #[arg(long, help = "Only items changed since this RFC 3339 time")]
    pub since: Option<DateTime<Utc>>,
    #[arg(long)]
    pub count: Option<u32>,
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Args)]
pub struct ArchiveArgs {
    #[arg(required = true)]
    pub item_ids: Vec<u64>,
}

#[derive(Args)]
pub struct AddArgs {
    pub url: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}
