//! Bridge reply DTOs

use serde::{Deserialize, Serialize};

/// Reply of `POST /search` and `POST /apply`
///
/// `result` is a human-readable outcome shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeReply {
    pub result: String,
    /// Outcome tag set by the bridge (`"success"`); not interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_with_status() {
        let reply: BridgeReply =
            serde_json::from_str(r#"{"status":"success","result":"Found 2 jobs"}"#).unwrap();
        assert_eq!(reply.result, "Found 2 jobs");
        assert_eq!(reply.status.as_deref(), Some("success"));
    }

    #[test]
    fn test_reply_without_result_is_rejected() {
        assert!(serde_json::from_str::<BridgeReply>(r#"{"status":"success"}"#).is_err());
    }
}
