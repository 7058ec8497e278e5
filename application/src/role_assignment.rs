use application_ports::member_joined::{MemberJoinedPort, NewMemberDto, RoleAssignmentOutcome};
use async_trait::async_trait;
use domain::member::MemberIdentity;
use domain::ports::discord::DiscordPort;
use domain::role_directory::RoleDirectory;
use domain::roles::resolve_roles;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

const ASSIGN_REASON: &str = "Automatic role assignment for new member";

pub struct RoleAssignmentService {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    role_directory: Arc<RoleDirectory>,
}

impl RoleAssignmentService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        discord_port: Arc<dyn DiscordPort + Send + Sync>,
        role_directory: Arc<RoleDirectory>,
    ) -> Self {
        Self {
            discord_port,
            role_directory,
        }
    }
}

#[async_trait]
impl MemberJoinedPort for RoleAssignmentService {
    #[instrument(level = "info", skip(self))]
    async fn on_member_joined(&self, member: NewMemberDto) -> RoleAssignmentOutcome {
        let NewMemberDto {
            guild_id,
            user_id,
            username,
            qualified_name,
        } = member;

        info!(guild_id = guild_id.0, %username, %qualified_name, "New member");

        let identity = MemberIdentity::new(user_id, username, qualified_name);
        let roles = resolve_roles(&self.role_directory, &identity);

        if roles.is_empty() {
            warn!(
                username = %identity.username,
                qualified_name = %identity.qualified_name,
                "No role found for member",
            );
            return RoleAssignmentOutcome::NoMatch;
        }

        let mut assigned = Vec::with_capacity(roles.len());
        let mut pending = roles.into_iter();

        while let Some(role_id) = pending.next() {
            match self
                .discord_port
                .assign_role(guild_id, user_id, &role_id, ASSIGN_REASON)
                .await
            {
                Ok(()) => {
                    info!(role_id = %role_id, "Assigned role to member");
                    assigned.push(role_id);
                }
                Err(err) => {
                    error!(role_id = %role_id, "Cannot assign role to member: {}", err);
                    return RoleAssignmentOutcome::AssignFailed {
                        assigned,
                        failed_role: role_id,
                        abandoned: pending.collect(),
                        reason: err.to_string(),
                    };
                }
            }
        }

        RoleAssignmentOutcome::Assigned { roles: assigned }
    }
}
