use crate::application_ports::Locator;
use crate::discord::member::new_member_dto;
use crate::discord::{response, Context, Error};
use poise::serenity_prelude as serenity;
use tracing::{info, instrument, warn};

/// Runs the new-member role assignment for someone who is already in the server.
#[poise::command(
    slash_command,
    guild_only,
    rename = "refresh-member-roles",
    required_permissions = "MANAGE_ROLES"
)]
#[instrument(level = "info", skip(ctx))]
pub async fn command<D: Sync + Locator>(
    ctx: Context<'_, D>,
    #[description = "Member to assign roles to"] target: serenity::User,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        warn!("Refresh member roles invoked outside of a guild");
        return Ok(());
    };

    info!(
        guild_id = guild_id.get(),
        user_id = ctx.author().id.get(),
        "Requesting role assignment for member {}",
        target.id.get(),
    );

    ctx.defer_ephemeral().await?;

    let member = new_member_dto(guild_id, &target);
    let outcome = ctx
        .data()
        .get_member_joined_port()
        .on_member_joined(member)
        .await;

    ctx.send(response::role_assignment::role_assignment_outcome(
        &target, &outcome,
    ))
    .await?;

    Ok(())
}
