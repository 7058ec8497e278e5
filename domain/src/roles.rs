use crate::member::MemberIdentity;
use crate::role_directory::{RoleDirectory, RoleEntry};
use domain_shared::discord::RoleId;
use tracing::instrument;

/// Returns the ids of every role whose identity list names the member, in directory order.
///
/// Each identity string is compared, in order, against the qualified name, the user id and
/// the bare username. Comparison is exact and case-sensitive. An entry contributes its role
/// id at most once.
#[instrument(level = "trace", skip_all)]
pub fn resolve_roles(directory: &RoleDirectory, identity: &MemberIdentity) -> Vec<RoleId> {
    if directory.is_empty() {
        return Vec::new();
    }

    let user_id = identity.id.to_string();

    directory
        .entries()
        .iter()
        .filter(|entry| entry_matches(entry, identity, &user_id))
        .map(|entry| entry.role_id.clone())
        .collect()
}

fn entry_matches(entry: &RoleEntry, identity: &MemberIdentity, user_id: &str) -> bool {
    entry.member_identities.iter().map(String::as_str).any(|candidate| {
        candidate == identity.qualified_name
            || candidate == user_id
            || candidate == identity.username
    })
}
