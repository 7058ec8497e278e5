use application_ports::member_joined::RoleAssignmentOutcome;
use domain_shared::discord::RoleId;
use poise::serenity_prelude as serenity;
use poise::serenity_prelude::Mentionable;
use poise::CreateReply;
use tracing::instrument;

#[instrument(level = "debug", skip_all)]
pub fn role_assignment_outcome(
    target: &serenity::User,
    outcome: &RoleAssignmentOutcome,
) -> CreateReply {
    let member = target.mention();

    let response = match outcome {
        RoleAssignmentOutcome::NoMatch => {
            format!("No role in the role data matches {member}. Nothing was assigned.")
        }
        RoleAssignmentOutcome::Assigned { roles } => {
            format!("Assigned {} to {member}.", mention_roles(roles))
        }
        RoleAssignmentOutcome::AssignFailed {
            assigned,
            failed_role,
            abandoned,
            reason,
        } => {
            let mut response = format!(
                "Cannot assign <@&{}> to {member}: {reason}",
                failed_role.0
            );
            if !assigned.is_empty() {
                response.push_str(&format!("\nAlready assigned: {}", mention_roles(assigned)));
            }
            if !abandoned.is_empty() {
                response.push_str(&format!("\nNot attempted: {}", mention_roles(abandoned)));
            }
            response
        }
    };

    CreateReply::default()
        .content(response)
        .ephemeral(true)
        .reply(true)
}

fn mention_roles(roles: &[RoleId]) -> String {
    roles
        .iter()
        .map(|role| format!("<@&{}>", role.0))
        .collect::<Vec<_>>()
        .join(", ")
}
