//! Deterministic tenant naming scheme.
//!
//! Every per-tenant resource name is a fixed template over the client
//! identifier, so repeated invocations for the same tenant address the
//! same remote objects and two tenants can only collide if their client
//! identifiers collide.

/// Resource names derived from one client identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantNames {
    /// `client_{id}` — also used as the tenant's username.
    pub client_name: String,
    /// `client_{id}_role`
    pub role: String,
    /// `client_{id}_alias`
    pub alias: String,
    /// `client_{id}_space`
    pub space: String,
    /// `client_{id}_data_view`
    pub data_view: String,
}

impl TenantNames {
    /// Derive all resource names for `client_id`.
    ///
    /// Pure function of its input: no state, no randomness.
    pub fn derive(client_id: &str) -> Self {
        let client_name = format!("client_{client_id}");
        Self {
            role: format!("{client_name}_role"),
            alias: format!("{client_name}_alias"),
            space: format!("{client_name}_space"),
            data_view: format!("{client_name}_data_view"),
            client_name,
        }
    }
}
