use async_trait::async_trait;
use domain_shared::discord::{GuildId, RoleId, UserId};

#[async_trait]
pub trait MemberJoinedPort {
    /// Assigns every configured role to a member who has just joined `member.guild_id`.
    async fn on_member_joined(&self, member: NewMemberDto) -> RoleAssignmentOutcome;
}

#[derive(Debug, Clone)]
pub struct NewMemberDto {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub username: String,
    pub qualified_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleAssignmentOutcome {
    /// No role entry names the member. Nothing was assigned.
    NoMatch,
    /// Every matched role was assigned, in directory order.
    Assigned { roles: Vec<RoleId> },
    /// Assignment stopped at `failed_role`. Roles after it were not attempted.
    AssignFailed {
        assigned: Vec<RoleId>,
        failed_role: RoleId,
        abandoned: Vec<RoleId>,
        reason: String,
    },
}
