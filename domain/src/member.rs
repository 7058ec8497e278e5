use domain_shared::discord::UserId;

/// Identity attributes of a member, as seen at the moment they joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberIdentity {
    pub id: UserId,
    pub username: String,
    /// `username#discriminator`, or the bare username for accounts without a discriminator.
    pub qualified_name: String,
}

impl MemberIdentity {
    pub fn new(id: UserId, username: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            qualified_name: qualified_name.into(),
        }
    }
}
