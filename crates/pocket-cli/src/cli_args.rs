use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use pocket_core::DEFAULT_ORIGIN;

pub use crate::modules::items::args::*;

#[derive(Parser)]
#[command(name = "pocket")]
#[command(about = "Pocket reading list CLI")]
pub struct Cli {
    #[arg(long, env = "POCKET_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
    #[arg(long, env = "POCKET_CONSUMER_KEY", hide_env_values = true)]
    pub consumer_key: Option<String>,
    #[arg(long, env = "POCKET_ORIGIN", default_value = DEFAULT_ORIGIN, hide = true)]
    pub origin: String,
    #[arg(long, env = "POCKET_TIMEOUT", default_value_t = 30, help = "Request timeout in seconds (0 disables)")]
    pub timeout: u64,
    #[arg(
        long,
        env = "POCKET_AUTH_TIMEOUT",
        default_value_t = 300,
        help = "Seconds to wait for browser authorization (0 waits forever)"
    )]
    pub auth_timeout: u64,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "List saved items")]
    List(ListArgs),
    #[command(about = "Archive items by id")]
    Archive(ArchiveArgs),
    #[command(about = "Save a URL")]
    Add(AddArgs),
    #[command(about = "Authorize again and replace the cached access token")]
    Login,
    #[command(about = "Forget the cached access token")]
    Logout,
}
