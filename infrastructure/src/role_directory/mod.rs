use domain::role_directory::{RoleDirectory, RoleDirectoryError, RoleDirectorySource, RoleEntry};
use domain_shared::discord::RoleId;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Role data file of the shape `{ "data": [ { "role", "roleId", "usernames" } ] }`.
pub struct JsonRoleDirectorySource {
    path: PathBuf,
}

impl JsonRoleDirectorySource {
    #[instrument(level = "trace", skip_all)]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RoleDirectorySource for JsonRoleDirectorySource {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<RoleDirectory, RoleDirectoryError> {
        info!("Loading role data...");

        let file =
            File::open(&self.path).map_err(|e| RoleDirectoryError::DataUnavailable(Box::new(e)))?;
        let directory = load_role_directory(file)?;

        info!("{} role data loaded", directory.len());

        Ok(directory)
    }
}

#[derive(Deserialize)]
struct RoleDataDocument {
    data: Vec<RoleUsersRecord>,
}

#[derive(Deserialize)]
struct RoleUsersRecord {
    role: Option<String>,
    #[serde(rename = "roleId")]
    role_id: RoleId,
    usernames: Option<Vec<String>>,
}

impl From<RoleUsersRecord> for RoleEntry {
    fn from(record: RoleUsersRecord) -> Self {
        let RoleUsersRecord {
            role,
            role_id,
            usernames,
        } = record;

        RoleEntry {
            role_name: role.unwrap_or_default(),
            role_id,
            member_identities: usernames.unwrap_or_default(),
        }
    }
}

/// Reads the whole of `source` and parses it into a [`RoleDirectory`], keeping file order.
#[instrument(level = "trace", skip_all)]
pub fn load_role_directory<R: Read>(mut source: R) -> Result<RoleDirectory, RoleDirectoryError> {
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .map_err(|e| RoleDirectoryError::DataUnavailable(Box::new(e)))?;

    let document = serde_json::from_slice::<RoleDataDocument>(&bytes)
        .map_err(|e| RoleDirectoryError::MalformedData(Box::new(e)))?;

    Ok(RoleDirectory::new(
        document.data.into_iter().map(RoleEntry::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn loads_entries_in_file_order() {
        let json = r#"{
            "data": [
                { "role": "Alpha", "roleId": "R1", "usernames": ["alice#0001", "bob"] },
                { "role": "Beta", "roleId": "R2", "usernames": ["999"] },
                { "role": "Gamma", "roleId": "R3", "usernames": [] }
            ]
        }"#;

        let directory = load_role_directory(json.as_bytes()).unwrap();

        assert_eq!(directory.len(), 3);
        let ids: Vec<&str> = directory
            .entries()
            .iter()
            .map(|e| e.role_id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["R1", "R2", "R3"]);
        assert_eq!(directory.entries()[0].role_name, "Alpha");
        assert_eq!(
            directory.entries()[0].member_identities,
            vec!["alice#0001".to_string(), "bob".to_string()]
        );
    }

    #[test]
    fn empty_data_list_is_an_empty_directory() {
        let directory = load_role_directory(r#"{ "data": [] }"#.as_bytes()).unwrap();

        assert!(directory.is_empty());
    }

    #[test]
    fn missing_role_name_and_usernames_are_tolerated() {
        let json = r#"{ "data": [ { "roleId": "R1" }, { "role": "", "roleId": "", "usernames": null } ] }"#;

        let directory = load_role_directory(json.as_bytes()).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.entries()[0].role_name, "");
        assert!(directory.entries()[0].member_identities.is_empty());
        assert_eq!(directory.entries()[1].role_id, RoleId::from(""));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let result = load_role_directory("{ \"data\": [".as_bytes());

        assert!(matches!(result, Err(RoleDirectoryError::MalformedData(_))));
    }

    #[test]
    fn unexpected_shape_is_malformed() {
        for json in [
            r#"{ "data": { "roleId": "R1" } }"#,
            r#"{ "roles": [] }"#,
            r#"{ "data": [ { "role": "Alpha", "usernames": ["bob"] } ] }"#,
            r#"{ "data": [ { "roleId": 17, "usernames": ["bob"] } ] }"#,
            r#"[]"#,
        ] {
            let result = load_role_directory(json.as_bytes());

            assert!(
                matches!(result, Err(RoleDirectoryError::MalformedData(_))),
                "{json} should be malformed",
            );
        }
    }

    #[test]
    fn read_failure_is_unavailable() {
        let result = load_role_directory(BrokenReader);

        assert!(matches!(result, Err(RoleDirectoryError::DataUnavailable(_))));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let source = JsonRoleDirectorySource::new("./this-file-does-not-exist/role_user.json");

        assert!(matches!(
            source.load(),
            Err(RoleDirectoryError::DataUnavailable(_))
        ));
    }
}
