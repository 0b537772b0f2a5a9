use std::path::PathBuf;
use std::time::Duration;

use pocket_core::Client;

/// Files the CLI keeps under its configuration directory.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub dir: PathBuf,
}

impl ConfigPaths {
    pub fn consumer_key(&self) -> PathBuf {
        self.dir.join("consumer_key")
    }

    pub fn auth_record(&self) -> PathBuf {
        self.dir.join("auth.json")
    }
}

/// Global options resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub paths: ConfigPaths,
    pub origin: String,
    pub request_timeout: Option<Duration>,
    pub auth_timeout: Option<Duration>,
}

pub struct CommandContext<'a> {
    pub client: &'a Client,
}
