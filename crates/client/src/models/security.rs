//! Payload types for the Elasticsearch security APIs (roles, users).

use serde::Serialize;

/// Index privileges granted to every tenant role.
pub const INDEX_PRIVILEGES: [&str; 2] = ["read", "view_index_metadata"];

/// Application name under which Kibana registers its privileges.
pub const KIBANA_APPLICATION: &str = "kibana-.kibana";

/// Kibana feature privilege allowing read-only dashboard access.
pub const DASHBOARD_READ_PRIVILEGE: &str = "feature_dashboard.read";

/// Body of a `PUT /_security/role/{name}` call.
#[derive(Debug, Serialize)]
pub struct RoleSpec {
    pub indices: Vec<IndexPrivilege>,
    pub applications: Vec<ApplicationPrivilege>,
}

#[derive(Debug, Serialize)]
pub struct IndexPrivilege {
    pub names: Vec<String>,
    pub privileges: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationPrivilege {
    pub application: String,
    pub privileges: Vec<String>,
    pub resources: Vec<String>,
}

impl RoleSpec {
    /// The tenant role shape: read-level access to `indices`, plus
    /// read-only dashboards inside `space_id`.
    pub fn dashboard_reader(indices: &[String], space_id: &str) -> Self {
        Self {
            indices: vec![IndexPrivilege {
                names: indices.to_vec(),
                privileges: INDEX_PRIVILEGES.iter().map(|p| (*p).to_string()).collect(),
            }],
            applications: vec![ApplicationPrivilege {
                application: KIBANA_APPLICATION.to_string(),
                privileges: vec![DASHBOARD_READ_PRIVILEGE.to_string()],
                resources: vec![format!("space:{space_id}")],
            }],
        }
    }
}
