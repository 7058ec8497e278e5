use domain::ports::discord::DiscordError;
use domain_shared::discord::RoleId;
use poise::serenity_prelude as serenity;
use tracing::instrument;

#[instrument(level = "trace", skip(role_id))]
pub fn domain_to_serenity_role_id(role_id: &RoleId) -> Result<serenity::RoleId, DiscordError> {
    match role_id.0.parse::<u64>() {
        Ok(id) if id != 0 => Ok(serenity::RoleId::new(id)),
        _ => Err(DiscordError::InvalidRoleId(role_id.0.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        let role_id = domain_to_serenity_role_id(&RoleId::from("1080851431442071552")).unwrap();

        assert_eq!(role_id.get(), 1080851431442071552);
    }

    #[test]
    fn rejects_empty_and_non_numeric_ids() {
        for raw in ["", "0", "admin", "-5", " 123"] {
            let result = domain_to_serenity_role_id(&RoleId::from(raw));

            assert!(
                matches!(result, Err(DiscordError::InvalidRoleId(ref id)) if id == raw),
                "{raw:?} should be rejected",
            );
        }
    }
}
