//! Payload types for the Kibana spaces API.

use serde::{Deserialize, Serialize};

/// Features disabled in every tenant space.
///
/// Tenants get the base dashboard feature and nothing else; everything
/// analytical, administrative, or alerting-related stays off.
pub const DISABLED_FEATURES: [&str; 31] = [
    "enterpriseSearch",
    "discover",
    "canvas",
    "maps",
    "ml",
    "logs",
    "visualize",
    "infrastructure",
    "apm",
    "uptime",
    "observabilityCases",
    "siem",
    "securitySolutionCases",
    "slo",
    "dev_tools",
    "advancedSettings",
    "filesManagement",
    "filesSharedImage",
    "savedObjectsManagement",
    "savedQueryManagement",
    "savedObjectsTagging",
    "osquery",
    "actions",
    "generalCases",
    "guidedOnboardingFeature",
    "rulesSettings",
    "maintenanceWindow",
    "stackAlerts",
    "fleetv2",
    "fleet",
    "monitoring",
];

/// Body of a `POST /api/spaces/space` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub disabled_features: Vec<String>,
}

impl Space {
    /// A tenant space: every feature disabled except the dashboard feature.
    pub fn dashboard_only(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            disabled_features: DISABLED_FEATURES.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// One entry of the `GET /api/features` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub id: String,
}
