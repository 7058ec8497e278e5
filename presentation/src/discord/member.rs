use application_ports::member_joined::NewMemberDto;
use domain_shared::discord::{GuildId, UserId};
use poise::serenity_prelude as serenity;
use tracing::instrument;

#[instrument(level = "trace", skip_all)]
pub fn new_member_dto(guild_id: serenity::GuildId, user: &serenity::User) -> NewMemberDto {
    NewMemberDto {
        guild_id: GuildId(guild_id.get()),
        user_id: UserId(user.id.get()),
        username: user.name.clone(),
        qualified_name: user.tag(),
    }
}
