pub mod serve;
pub mod validate;

use crate::args::CommonArgs;
use crate::command::serve::ServeArgs;
use crate::command::validate::ValidateArgs;
use clap::Subcommand;
use tracing::instrument;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to Discord and assign roles to new members until interrupted
    #[command(name = "serve")]
    Serve(ServeArgs),
    /// Load the role data file and optionally preview the roles of one member
    #[command(name = "validate")]
    Validate(ValidateArgs),
}

impl Command {
    #[instrument(level = "trace", skip(self, common_args))]
    pub async fn run(self, common_args: CommonArgs) -> anyhow::Result<()> {
        match self {
            Command::Serve(args) => serve::run(common_args, args).await,
            Command::Validate(args) => validate::run(common_args, args),
        }
    }
}
