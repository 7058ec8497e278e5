mod role_id;
mod user_id;

use crate::discord::role_id::domain_to_serenity_role_id;
use crate::discord::user_id::{domain_to_serenity_guild_id, domain_to_serenity_user_id};
use async_trait::async_trait;
use domain::ports::discord::{DiscordError, DiscordPort};
use domain_shared::discord::{GuildId, RoleId, UserId};
use poise::serenity_prelude as serenity;
use serenity::all::Http;
use std::sync::Arc;
use tracing::instrument;

pub struct DiscordAdapter {
    client: Arc<Http>,
}

impl DiscordAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(client: Arc<Http>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DiscordPort for DiscordAdapter {
    #[instrument(level = "debug", err, skip(self, reason))]
    async fn assign_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: &RoleId,
        reason: &str,
    ) -> Result<(), DiscordError> {
        let role_id = domain_to_serenity_role_id(role_id)?;
        let guild_id = domain_to_serenity_guild_id(guild_id);
        let user_id = domain_to_serenity_user_id(user_id);

        self.client
            .add_member_role(guild_id, user_id, role_id, Some(reason))
            .await
            .map_err(|e| DiscordError::RequestFailed(Box::new(e)))?;

        Ok(())
    }
}
