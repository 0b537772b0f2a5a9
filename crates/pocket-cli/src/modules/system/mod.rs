pub(crate) mod config;
pub(crate) mod types;

pub(crate) use config::{resolve_consumer_key, resolve_settings};
pub(crate) use types::{CommandContext, ConfigPaths, Settings};
