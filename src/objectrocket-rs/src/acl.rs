use objectrocket_core::AclInfo;

use crate::{Client, Result};

/// Handle for one access-control entry on the instance
#[derive(Clone)]
pub struct Acl {
    client: Client,
    info: AclInfo,
}

impl Acl {
    pub(crate) fn new(client: Client, info: AclInfo) -> Self {
        Self { client, info }
    }

    pub fn cidr_mask(&self) -> &str {
        &self.info.cidr_mask
    }

    pub fn description(&self) -> Option<&str> {
        self.info.description.as_deref()
    }

    pub fn info(&self) -> &AclInfo {
        &self.info
    }

    /// Remove this entry from the instance
    pub async fn delete(self) -> Result<()> {
        self.client.delete_acl(&self.info.cidr_mask).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let client = Client::new("1234").unwrap();
        let info: AclInfo = serde_json::from_value(
            json!({"cidr_mask": "10.0.0.0/8", "description": "office"}),
        )
        .unwrap();
        let acl = Acl::new(client, info);
        assert_eq!(acl.cidr_mask(), "10.0.0.0/8");
        assert_eq!(acl.description(), Some("office"));
    }
}
