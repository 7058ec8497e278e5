use crate::args::CommonArgs;
use crate::locator::ApplicationPortLocator;
use application::role_assignment::RoleAssignmentService;
use clap::Args;
use domain::role_directory::{RoleDirectory, RoleDirectorySource};
use infrastructure::discord::DiscordAdapter;
use infrastructure::role_directory::JsonRoleDirectorySource;
use presentation::discord::{start_bot, BotConnection, ConnectionSetupError};
use serenity::http::Http;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, instrument};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// The token for the Discord bot
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub discord_bot_token: Option<String>,
}

/// Runs until SIGINT/SIGTERM. Role data and connection failures are logged and the process
/// keeps waiting for the signal in a degraded state.
#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ServeArgs) -> anyhow::Result<()> {
    let CommonArgs {
        role_data_path,
        log_file: _,
        sentry_dsn: _,
        sentry_environment: _,
        sentry_sample_rate: _,
        sentry_traces_sample_rate: _,
    } = common_args;
    let ServeArgs { discord_bot_token } = args;

    let role_directory = Arc::new(load_role_directory(&role_data_path));

    let connection = match connect(role_directory, discord_bot_token.unwrap_or_default()).await {
        Ok(connection) => Some(connection),
        Err(err) => {
            error!("Error initializing bot: {}", err);
            None
        }
    };

    wait_for_shutdown_signal().await?;
    info!("Shutdown signal received");

    if let Some(connection) = connection {
        connection.shutdown().await;
    }

    Ok(())
}

#[instrument(level = "debug")]
fn load_role_directory(role_data_path: &Path) -> RoleDirectory {
    match JsonRoleDirectorySource::new(role_data_path).load() {
        Ok(role_directory) => role_directory,
        Err(err) => {
            error!("Error loading role data, no roles will be assigned: {}", err);
            RoleDirectory::default()
        }
    }
}

#[instrument(level = "debug", skip_all)]
async fn connect(
    role_directory: Arc<RoleDirectory>,
    discord_bot_token: String,
) -> Result<BotConnection, ConnectionSetupError> {
    let serenity_client = Arc::new(Http::new(&discord_bot_token));
    let discord_adapter = Arc::new(DiscordAdapter::new(serenity_client));
    let member_joined_adapter = Arc::new(RoleAssignmentService::new(
        discord_adapter,
        role_directory,
    ));

    let locator = ApplicationPortLocator::new(member_joined_adapter);

    start_bot(locator, discord_bot_token).await
}

async fn wait_for_shutdown_signal() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result?,
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    Ok(())
}
