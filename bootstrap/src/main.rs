mod args;
mod command;
mod locator;
mod logging;

use crate::args::CommonArgs;
use crate::command::Command;
use clap::Parser;
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[command(version, about = "Assigns Discord roles to new members from a static role table")]
struct Cli {
    #[command(flatten)]
    common_args: CommonArgs,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let Cli {
        common_args,
        command,
    } = Cli::parse();

    let sentry = logging::init_sentry(&common_args);
    let logging = logging::setup_logging(
        &common_args.log_file,
        matches!(sentry, Ok(Some(_))),
    );

    if let Err(err) = &logging {
        error!("Cannot set up logging: {:#}", err);
    }
    let _sentry_guard = match sentry {
        Ok(guard) => guard,
        Err(err) => {
            warn!("Sentry is disabled: {:#}", err);
            None
        }
    };

    command.run(common_args).await
}
