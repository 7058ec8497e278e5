use async_trait::async_trait;
use domain_shared::discord::{GuildId, RoleId, UserId};
use thiserror::Error;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordPort {
    /// Adds `role_id` to the member. Resolves once Discord has acknowledged the change.
    async fn assign_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: &RoleId,
        reason: &str,
    ) -> Result<(), DiscordError>;
}

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Role id {0:?} is not a valid Discord snowflake")]
    InvalidRoleId(String),
    #[error("Discord rejected the request: {0}")]
    RequestFailed(#[source] Error),
}
