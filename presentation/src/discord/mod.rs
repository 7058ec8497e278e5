use crate::application_ports::Locator;
use application_ports::member_joined::RoleAssignmentOutcome;
use poise::serenity_prelude as serenity;
use serenity::all::{validate_token, ClientBuilder, ShardManager};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

pub mod commands;
pub mod member;
mod response;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a, D> = poise::Context<'a, D, Error>;

#[derive(Debug, Error)]
pub enum ConnectionSetupError {
    #[error("Discord bot token is not set")]
    MissingToken,
    #[error("Discord bot token is malformed")]
    InvalidToken,
    #[error("Cannot create Discord client: {0}")]
    Client(#[source] Error),
}

/// A running gateway session. Dropping it leaves the session running; call [`BotConnection::shutdown`].
pub struct BotConnection {
    shard_manager: Arc<ShardManager>,
    client_task: JoinHandle<()>,
}

impl BotConnection {
    #[instrument(level = "info", skip_all)]
    pub async fn shutdown(self) {
        self.shard_manager.shutdown_all().await;

        if let Err(err) = self.client_task.await {
            error!("Discord client task did not finish cleanly: {}", err);
        }

        info!("Bot connection closed");
    }
}

pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_MESSAGES
}

/// Opens the gateway session on a background task and routes its events to `locator`.
#[instrument(level = "info", skip_all)]
pub async fn start_bot<L: Locator + Send + Sync + 'static>(
    locator: L,
    token: String,
) -> Result<BotConnection, ConnectionSetupError> {
    if token.trim().is_empty() {
        return Err(ConnectionSetupError::MissingToken);
    }
    validate_token(&token).map_err(|_| ConnectionSetupError::InvalidToken)?;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::enabled_commands(),
            event_handler: |ctx, event, framework, locator| {
                Box::pin(event_handler(ctx, event, framework, locator))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                let registration =
                    poise::builtins::register_globally(ctx, &framework.options().commands);
                Ok(finish_setup(locator, registration).await)
            })
        })
        .build();

    let mut client = ClientBuilder::new(token, intents())
        .framework(framework)
        .await
        .map_err(|e| ConnectionSetupError::Client(Box::new(e)))?;

    let shard_manager = client.shard_manager.clone();
    let client_task = tokio::spawn(async move {
        if let Err(err) = client.start().await {
            error!("Discord client stopped: {}", err);
        }
    });

    Ok(BotConnection {
        shard_manager,
        client_task,
    })
}

/// Slash command registration is optional: a failure is logged and the locator is still
/// handed to the framework so member events keep flowing.
async fn finish_setup<L, E>(
    locator: L,
    registration: impl Future<Output = Result<(), E>>,
) -> L
where
    E: Display,
{
    if let Err(err) = registration.await {
        error!("Cannot register slash commands: {}", err);
    }

    locator
}

#[instrument(level = "debug", skip(locator, user))]
async fn handle_member_addition<L: Locator>(
    locator: &L,
    guild_id: serenity::GuildId,
    user: &serenity::User,
) -> RoleAssignmentOutcome {
    let member = member::new_member_dto(guild_id, user);
    locator
        .get_member_joined_port()
        .on_member_joined(member)
        .await
}

async fn event_handler<L: Locator>(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, L, Error>,
    locator: &L,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!(
                bot_user_id = data_about_bot.user.id.get(),
                "Bot connection established as {}",
                data_about_bot.user.name,
            );
        }
        serenity::FullEvent::GuildMemberAddition { new_member } => {
            handle_member_addition(locator, new_member.guild_id, &new_member.user).await;
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use application_ports::member_joined::{MemberJoinedPort, NewMemberDto};
    use async_trait::async_trait;
    use domain_shared::discord::{GuildId, RoleId, UserId};

    use std::num::NonZeroU16;
    use std::sync::Mutex;

    struct NoopPort;

    #[async_trait]
    impl MemberJoinedPort for NoopPort {
        async fn on_member_joined(&self, _member: NewMemberDto) -> RoleAssignmentOutcome {
            RoleAssignmentOutcome::NoMatch
        }
    }

    #[derive(Default)]
    struct RecordingPort {
        received: Mutex<Vec<NewMemberDto>>,
    }

    #[async_trait]
    impl MemberJoinedPort for RecordingPort {
        async fn on_member_joined(&self, member: NewMemberDto) -> RoleAssignmentOutcome {
            self.received.lock().unwrap().push(member);
            RoleAssignmentOutcome::Assigned {
                roles: vec![RoleId::from("1")],
            }
        }
    }

    struct RecordingLocator(RecordingPort);

    impl Locator for RecordingLocator {
        fn get_member_joined_port(&self) -> &(dyn MemberJoinedPort + Send + Sync) {
            &self.0
        }
    }

    struct TestLocator(NoopPort);

    impl Locator for TestLocator {
        fn get_member_joined_port(&self) -> &(dyn MemberJoinedPort + Send + Sync) {
            &self.0
        }
    }

    #[tokio::test]
    async fn missing_token_fails_setup() {
        for token in ["", "   "] {
            let result = start_bot(TestLocator(NoopPort), token.to_string()).await;

            assert!(matches!(result, Err(ConnectionSetupError::MissingToken)));
        }
    }

    #[tokio::test]
    async fn malformed_token_fails_setup() {
        let result = start_bot(TestLocator(NoopPort), "not-a-token".to_string()).await;

        assert!(matches!(result, Err(ConnectionSetupError::InvalidToken)));
    }

    #[test]
    fn requests_guild_member_events() {
        assert!(intents().contains(serenity::GatewayIntents::GUILD_MEMBERS));
    }

    #[tokio::test]
    async fn failed_command_registration_still_yields_locator() {
        let locator = RecordingLocator(RecordingPort::default());

        let locator = finish_setup(locator, async { Err::<(), _>("429 Too Many Requests") }).await;
        let outcome = handle_member_addition(
            &locator,
            serenity::GuildId::new(42),
            &serenity::User::default(),
        )
        .await;

        assert!(matches!(outcome, RoleAssignmentOutcome::Assigned { .. }));
        assert_eq!(locator.0.received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn member_addition_is_routed_to_member_joined_port() {
        let locator = RecordingLocator(RecordingPort::default());
        let mut user = serenity::User::default();
        user.id = serenity::UserId::new(999);
        user.name = "alice".to_string();
        user.discriminator = NonZeroU16::new(1);

        handle_member_addition(&locator, serenity::GuildId::new(42), &user).await;

        let received = locator.0.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].guild_id, GuildId(42));
        assert_eq!(received[0].user_id, UserId(999));
        assert_eq!(received[0].username, "alice");
        assert_eq!(received[0].qualified_name, "alice#0001");
    }
}
