use objectrocket_core::{DatabaseInfo, Document};

use crate::{Client, ClientError, Collection, Result};

/// Handle for one hosted database.
///
/// An immutable view bound to a database name and the owning [`Client`];
/// it holds no remote state and every operation delegates back through the
/// client.
#[derive(Clone)]
pub struct Database {
    client: Client,
    info: DatabaseInfo,
}

impl Database {
    pub(crate) fn new(client: Client, info: DatabaseInfo) -> Self {
        Self { client, info }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// The raw descriptor the listing endpoint returned for this database
    pub fn info(&self) -> &DatabaseInfo {
        &self.info
    }

    /// Construct a handle for a named collection.
    ///
    /// Purely local; the remote service is first contacted when an
    /// operation is called on the returned handle.
    pub fn collection(&self, name: &str) -> Collection {
        Collection::new(self.client.clone(), self.info.name.clone(), name.to_string())
    }

    /// Fetch server-side stats for a named collection
    pub async fn collection_stats(&self, name: &str) -> Result<Document> {
        self.collection(name).stats().await
    }

    /// Re-fetch this database's descriptor from the listing endpoint
    pub async fn refresh(&mut self) -> Result<()> {
        let dbs = self.client.list_databases(Some(&self.info.name)).await?;
        let db = dbs.into_iter().next().ok_or(ClientError::InvalidResponse)?;
        self.info = db.info;
        Ok(())
    }

    /// Add a user to this database
    pub async fn add_user(&self, user: &str, password: &str) -> Result<()> {
        self.client
            .add_database(&self.info.name, user, password)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_database(name: &str) -> Database {
        let client = Client::new("1234").unwrap();
        let info: DatabaseInfo = serde_json::from_value(json!({"name": name})).unwrap();
        Database::new(client, info)
    }

    #[test]
    fn test_collection_access_is_local() {
        // No async runtime here: building the handle must stay purely local
        let db = test_database("test");
        let collection = db.collection("users");
        assert_eq!(collection.database(), "test");
        assert_eq!(collection.name(), "users");
    }

    #[test]
    fn test_name_accessor() {
        let db = test_database("analytics");
        assert_eq!(db.name(), "analytics");
        assert_eq!(db.info().name, "analytics");
    }
}
