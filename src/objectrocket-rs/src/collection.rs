use objectrocket_core::Document;
use serde_json::Value;

use crate::{Client, Result};

/// Handle for one collection within a hosted database.
///
/// Bound to a (database, collection) name pair; every operation is a single
/// request/response against the document endpoints for that pair.
#[derive(Clone)]
pub struct Collection {
    client: Client,
    database: String,
    name: String,
}

impl Collection {
    pub(crate) fn new(client: Client, database: String, name: String) -> Self {
        Self {
            client,
            database,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    fn stub(&self, op: &str) -> String {
        format!("db/{}/collection/{}/{}", self.database, self.name, op)
    }

    /// Retrieve documents from the collection, optionally narrowed by a
    /// filter document. Documents come back exactly as the service returned
    /// them.
    pub async fn get(&self, filter: Option<&Document>) -> Result<Vec<Document>> {
        let doc = Value::Object(filter.cloned().unwrap_or_default());
        let data = self.client.request(&self.stub("get"), Some(&doc)).await?;
        decode_documents(data)
    }

    /// Add a document to the collection
    pub async fn add(&self, doc: &Document) -> Result<Value> {
        self.client
            .request(&self.stub("add"), Some(&Value::Object(doc.clone())))
            .await
    }

    /// Update documents in the collection
    pub async fn update(&self, doc: &Document) -> Result<Value> {
        self.client
            .request(&self.stub("update"), Some(&Value::Object(doc.clone())))
            .await
    }

    /// Delete documents matching the filter from the collection
    pub async fn delete(&self, filter: Option<&Document>) -> Result<Value> {
        let doc = Value::Object(filter.cloned().unwrap_or_default());
        self.client.request(&self.stub("delete"), Some(&doc)).await
    }

    /// Fetch server-side stats for the collection
    pub async fn stats(&self) -> Result<Document> {
        let data = self
            .client
            .request(&self.stub("stats/get"), Some(&Value::Object(Document::new())))
            .await?;
        Ok(serde_json::from_value(data)?)
    }
}

fn decode_documents(data: Value) -> Result<Vec<Document>> {
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stub_builds_scoped_endpoints() {
        let client = Client::new("1234").unwrap();
        let collection = Collection::new(client, "mydb".to_string(), "users".to_string());
        assert_eq!(collection.stub("get"), "db/mydb/collection/users/get");
        assert_eq!(
            collection.stub("stats/get"),
            "db/mydb/collection/users/stats/get"
        );
    }

    #[test]
    fn test_decode_documents_passthrough() {
        let data = json!([
            {"_id": "a", "value": 1},
            {"_id": "b", "value": 2}
        ]);
        let docs = decode_documents(data.clone()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(Value::Array(docs.into_iter().map(Value::Object).collect()), data);
    }

    #[test]
    fn test_decode_documents_rejects_non_objects() {
        assert!(decode_documents(json!(["a", "b"])).is_err());
    }
}
