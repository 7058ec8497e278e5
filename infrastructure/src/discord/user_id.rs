use domain_shared::discord::{GuildId, UserId};
use poise::serenity_prelude as serenity;
use tracing::instrument;

#[instrument(level = "trace", skip(user_id))]
pub fn domain_to_serenity_user_id(user_id: UserId) -> serenity::UserId {
    serenity::UserId::new(user_id.0)
}

#[instrument(level = "trace", skip(guild_id))]
pub fn domain_to_serenity_guild_id(guild_id: GuildId) -> serenity::GuildId {
    serenity::GuildId::new(guild_id.0)
}
