use crate::args::CommonArgs;
use anyhow::Context;
use clap::Args;
use domain::member::MemberIdentity;
use domain::role_directory::RoleDirectorySource;
use domain::roles::resolve_roles;
use domain_shared::discord::UserId;
use infrastructure::role_directory::JsonRoleDirectorySource;
use tracing::{info, instrument, warn};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub member: Option<MemberArgs>,
}

/// Identity of the member to preview role resolution for.
#[derive(Args, Debug)]
pub struct MemberArgs {
    #[arg(long)]
    pub username: String,
    /// `username#discriminator`, or the username again for accounts without a discriminator
    #[arg(long)]
    pub qualified_name: String,
    #[arg(long)]
    pub id: u64,
}

#[instrument(level = "info", skip(common_args, args))]
pub fn run(common_args: CommonArgs, args: ValidateArgs) -> anyhow::Result<()> {
    let role_directory = JsonRoleDirectorySource::new(&common_args.role_data_path)
        .load()
        .with_context(|| {
            format!(
                "Cannot load role data from {}",
                common_args.role_data_path.display()
            )
        })?;

    for entry in role_directory.entries() {
        info!(
            role = %entry.role_name,
            role_id = %entry.role_id,
            identities = entry.member_identities.len(),
            "Role entry",
        );
    }

    if let Some(MemberArgs {
        username,
        qualified_name,
        id,
    }) = args.member
    {
        let identity = MemberIdentity::new(UserId(id), username, qualified_name);
        let roles = resolve_roles(&role_directory, &identity);

        if roles.is_empty() {
            warn!(?identity, "No role found for member");
        } else {
            info!(?identity, ?roles, "Member would receive {} role(s)", roles.len());
        }
    }

    Ok(())
}
