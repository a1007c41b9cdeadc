use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document represents an unstructured key-value record returned by the API
pub type Document = serde_json::Map<String, Value>;

/// ApiEnvelope is the wire envelope wrapping every API response.
///
/// The service reports success through the `rc` field: zero means the
/// request was accepted and `data` carries the payload, anything else is a
/// remote-side failure described by `msg`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub rc: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// DatabaseInfo describes one hosted database in a listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub name: String,
    #[serde(flatten)]
    pub extra: Document,
}

/// AclInfo describes one access-control entry for the instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AclInfo {
    pub cidr_mask: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"rc": 0, "data": ["a", "b"]})).unwrap();
        assert_eq!(envelope.rc, 0);
        assert_eq!(envelope.msg, None);
        assert_eq!(envelope.data, Some(json!(["a", "b"])));
    }

    #[test]
    fn test_envelope_failure_with_msg() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"rc": 1, "msg": "fail"})).unwrap();
        assert_eq!(envelope.rc, 1);
        assert_eq!(envelope.msg.as_deref(), Some("fail"));
        assert_eq!(envelope.data, None);
    }

    #[test]
    fn test_envelope_requires_rc() {
        let result = serde_json::from_value::<ApiEnvelope>(json!({"data": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_database_info_keeps_extra_fields() {
        let info: DatabaseInfo =
            serde_json::from_value(json!({"name": "test", "count": 42})).unwrap();
        assert_eq!(info.name, "test");
        assert_eq!(info.extra.get("count"), Some(&json!(42)));
    }

    #[test]
    fn test_acl_info_optional_description() {
        let info: AclInfo =
            serde_json::from_value(json!({"cidr_mask": "10.0.0.0/8"})).unwrap();
        assert_eq!(info.cidr_mask, "10.0.0.0/8");
        assert_eq!(info.description, None);
    }
}
