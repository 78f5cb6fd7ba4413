//! Payload types for the Elasticsearch alias-actions API.

use serde::Serialize;
use serde_json::json;

/// Body of a `POST /_aliases` call.
#[derive(Debug, Serialize)]
pub struct AliasActions {
    pub actions: Vec<AliasAction>,
}

/// One alias-update action.
#[derive(Debug, Serialize)]
pub enum AliasAction {
    #[serde(rename = "add")]
    Add(AddAlias),
}

/// Attach an alias to an index pattern, optionally filtered.
#[derive(Debug, Serialize)]
pub struct AddAlias {
    pub index: String,
    pub alias: String,
    pub filter: serde_json::Value,
}

impl AliasActions {
    /// A single `add` action scoping `alias` over `index_pattern` to the
    /// documents of one tenant via a `client_id` term filter.
    pub fn add_tenant_alias(index_pattern: &str, alias: &str, client_id: &str) -> Self {
        Self {
            actions: vec![AliasAction::Add(AddAlias {
                index: index_pattern.to_string(),
                alias: alias.to_string(),
                filter: json!({"term": {"client_id": client_id}}),
            })],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tenant_alias_wire_shape() {
        let actions = AliasActions::add_tenant_alias("analytics-events", "client_7_alias", "7");
        let json = serde_json::to_value(&actions).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "actions": [
                    {
                        "add": {
                            "index": "analytics-events",
                            "alias": "client_7_alias",
                            "filter": {"term": {"client_id": "7"}}
                        }
                    }
                ]
            })
        );
    }
}
