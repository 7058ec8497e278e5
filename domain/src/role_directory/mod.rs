use domain_shared::discord::RoleId;
use thiserror::Error;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleEntry {
    /// Display label, only used in logs.
    pub role_name: String,
    pub role_id: RoleId,
    /// Bare usernames, `username#discriminator` names or user ids, in file order.
    pub member_identities: Vec<String>,
}

/// Role table loaded once at startup. Never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDirectory {
    entries: Vec<RoleEntry>,
}

impl RoleDirectory {
    pub fn new(entries: Vec<RoleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RoleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub trait RoleDirectorySource {
    fn load(&self) -> Result<RoleDirectory, RoleDirectoryError>;
}

#[derive(Debug, Error)]
pub enum RoleDirectoryError {
    #[error("Role data is unavailable: {0}")]
    DataUnavailable(#[source] Error),
    #[error("Role data is malformed: {0}")]
    MalformedData(#[source] Error),
}
