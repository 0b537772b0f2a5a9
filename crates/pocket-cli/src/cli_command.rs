use crate::cli_args::*;
use crate::modules::items::{handle_add, handle_archive, handle_list};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_command(command: Command, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match command {
        Command::List(args) => handle_list(args, ctx).await?,
        Command::Archive(args) => handle_archive(args, ctx).await?,
        Command::Add(args) => handle_add(args, ctx).await?,
        Command::Login | Command::Logout => {
            unreachable!()
        }
    }

    Ok(())
}
