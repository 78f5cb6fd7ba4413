//! Types for the Kibana saved-objects export/import/update APIs.

use serde::{Deserialize, Serialize};

/// Body of a `POST /s/{space}/api/saved_objects/_export` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub objects: Vec<ExportObject>,
    pub include_references_deep: bool,
    pub exclude_export_details: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportObject {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: String,
}

impl ExportRequest {
    /// Deep export of a single dashboard: the dashboard object plus every
    /// saved object it transitively references.
    pub fn dashboard(dashboard_id: &str) -> Self {
        Self {
            objects: vec![ExportObject {
                object_type: "dashboard".to_string(),
                id: dashboard_id.to_string(),
            }],
            include_references_deep: true,
            exclude_export_details: false,
        }
    }
}

/// Response of `POST /s/{space}/api/saved_objects/_import`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub success_count: u64,
    #[serde(default)]
    pub success_results: Vec<ImportedObject>,
}

/// One successfully imported object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedObject {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: String,
    /// Id the object landed under in the target space. Absent when the
    /// import kept the original id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
}

impl ImportedObject {
    /// The id to address this object by in the target space.
    pub fn effective_id(&self) -> &str {
        self.destination_id.as_deref().unwrap_or(&self.id)
    }
}

/// A saved-object reference entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "type")]
    pub ref_type: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A saved object as returned by `GET /s/{space}/api/saved_objects/{type}/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedObject {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub attributes: serde_json::Value,
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// Body of a `PUT /s/{space}/api/saved_objects/{type}/{id}` call.
#[derive(Debug, Serialize)]
pub struct SavedObjectUpdate<'a> {
    pub attributes: &'a serde_json::Value,
    pub references: &'a [Reference],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_request_wire_shape() {
        let request = ExportRequest::dashboard("abc-123");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "objects": [{"type": "dashboard", "id": "abc-123"}],
                "includeReferencesDeep": true,
                "excludeExportDetails": false
            })
        );
    }

    #[test]
    fn test_import_response_deserialization() {
        let json = r#"{
            "success": true,
            "successCount": 3,
            "successResults": [
                {"type": "index-pattern", "id": "ip-1"},
                {"type": "dashboard", "id": "d-1", "destinationId": "d-9"}
            ]
        }"#;
        let response: ImportResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.success_count, 3);
        assert_eq!(response.success_results[0].effective_id(), "ip-1");
        assert_eq!(response.success_results[1].effective_id(), "d-9");
    }

    #[test]
    fn test_saved_object_roundtrip() {
        let json = r#"{
            "id": "d-1",
            "type": "dashboard",
            "attributes": {"title": "Visitor Counts"},
            "references": [
                {"type": "index-pattern", "id": "ip-1", "name": "panel_0_index"},
                {"type": "visualization", "id": "v-1"}
            ]
        }"#;
        let object: SavedObject = serde_json::from_str(json).unwrap();
        assert_eq!(object.references.len(), 2);
        assert_eq!(object.references[0].ref_type, "index-pattern");
        assert_eq!(object.references[1].name, None);

        let back = serde_json::to_value(&object).unwrap();
        assert_eq!(back["references"][0]["type"], "index-pattern");
        // Absent names stay absent rather than serializing as null.
        assert!(back["references"][1].get("name").is_none());
    }
}
