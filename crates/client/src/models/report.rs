//! Soft-tier operation reports.
//!
//! Provisioning writes are independent and mostly idempotent; a non-2xx
//! response from the platform is an outcome to report, not a reason to
//! abort whatever the caller does next. These types carry that outcome.
//! Hard failures use [`crate::error::ClientError`] instead.

use serde::{Deserialize, Serialize};

/// Outcome of a soft operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpStatus {
    Success,
    Error,
}

/// Result of a single provisioning operation.
///
/// On error, `message` carries the raw platform response body so the
/// operator can see exactly what the platform objected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpReport {
    pub status: OpStatus,
    pub message: String,
}

impl OpReport {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: OpStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OpStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OpStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization() {
        let report = OpReport::success("Alias created successfully");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "message": "Alias created successfully"})
        );

        let report = OpReport::error("index_not_found_exception");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "error");
    }

    #[test]
    fn test_is_success() {
        assert!(OpReport::success("ok").is_success());
        assert!(!OpReport::error("no").is_success());
    }
}
