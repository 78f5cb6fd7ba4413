//! Payload and response types for the Kibana data-views API.

use serde::{Deserialize, Serialize};

/// Timestamp field every tenant data view is keyed on.
pub const EVENT_TIME_FIELD: &str = "event_timestamp";

/// Body of a `POST /s/{space}/api/data_views/data_view` call.
#[derive(Debug, Serialize)]
pub struct CreateDataViewRequest {
    pub data_view: DataViewSpec,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewSpec {
    /// Index pattern the data view resolves against.
    pub title: String,
    /// Display name shown in Kibana.
    pub name: String,
    pub time_field_name: String,
}

impl CreateDataViewRequest {
    pub fn new(name: &str, index_pattern: &str) -> Self {
        Self {
            data_view: DataViewSpec {
                title: index_pattern.to_string(),
                name: name.to_string(),
                time_field_name: EVENT_TIME_FIELD.to_string(),
            },
        }
    }
}

/// One entry of a `GET /s/{space}/api/data_views` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DataViewSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

/// Response of `GET /s/{space}/api/data_views`.
#[derive(Debug, Default, Deserialize)]
pub struct DataViewListResponse {
    #[serde(default)]
    pub data_view: Vec<DataViewSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wire_shape() {
        let request = CreateDataViewRequest::new("client_7_data_view", "client_7_alias");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data_view": {
                    "title": "client_7_alias",
                    "name": "client_7_data_view",
                    "timeFieldName": "event_timestamp"
                }
            })
        );
    }

    #[test]
    fn test_list_response_tolerates_missing_fields() {
        let json = r#"{"data_view": [{"id": "abc-123", "name": "Demo Events"}]}"#;
        let response: DataViewListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data_view.len(), 1);
        assert_eq!(response.data_view[0].id, "abc-123");
        assert_eq!(response.data_view[0].title, "");
    }

    #[test]
    fn test_list_response_empty_body() {
        let response: DataViewListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data_view.is_empty());
    }
}
