use clap::Parser;
use pocket_core::{Client, Credentials, Transport};

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::{ensure_authorization, handle_login, handle_logout};
use crate::modules::system::{resolve_consumer_key, resolve_settings, CommandContext, Settings};
use tracing_subscriber::EnvFilter;

const USER_AGENT: &str = concat!("pocket-cli/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let settings = resolve_settings(&cli)?;
    let consumer_key_arg = cli.consumer_key.clone();
    let command = cli.command;

    if let Command::Logout = command {
        return handle_logout(&settings);
    }

    let transport = build_transport(&settings)?;
    let consumer_key = resolve_consumer_key(consumer_key_arg.as_deref(), &settings.paths)?;

    match command {
        Command::Login => handle_login(&transport, &consumer_key, &settings).await?,
        command => {
            let auth = ensure_authorization(&transport, &consumer_key, &settings).await?;
            let client = Client::new(
                transport,
                Credentials::new(consumer_key, auth.access_token),
            );
            let ctx = CommandContext { client: &client };
            handle_command(command, &ctx).await?;
        }
    }

    Ok(())
}

fn build_transport(settings: &Settings) -> anyhow::Result<Transport> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let transport = Transport::with_client(client, settings.origin.clone())?;
    Ok(match settings.request_timeout {
        Some(timeout) => transport.with_timeout(timeout),
        None => transport,
    })
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
