use std::time::Duration;

use objectrocket_core::{AclInfo, ApiEnvelope, Config, DatabaseInfo, Document};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::{Acl, ClientError, Database, Result};

const USER_AGENT: &str = concat!("objectrocket-rs/", env!("CARGO_PKG_VERSION"));

/// ObjectRocket management API client.
///
/// Holds the API key for the instance and a pooled HTTP client; cloning is
/// cheap and clones share the connection pool. The key is sent with every
/// request and never mutated after construction.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    api_server: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct AddAclRequest<'a> {
    cidr_mask: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct CidrRequest<'a> {
    cidr_mask: &'a str,
}

#[derive(Serialize)]
struct SetProfilingLevelRequest<'a> {
    level: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    db: Option<&'a str>,
}

impl Client {
    /// Create a new client for the given API key, using the default API
    /// server and transport settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, &Config::default())
    }

    /// Create a new client with explicit transport configuration
    pub fn with_config(api_key: impl Into<String>, config: &Config) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain,application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs));

        if config.insecure_skip_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if !config.ca_cert_path.is_empty() {
            let pem = std::fs::read(&config.ca_cert_path)?;
            builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
        }

        Ok(Self {
            api_key,
            api_server: config.api_server.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    /// Perform one authenticated request against an endpoint stub and
    /// unwrap the response envelope into its `data` payload.
    ///
    /// The API key always travels in the form body; `doc` is JSON-encoded
    /// into the `doc` field when present.
    pub(crate) async fn request(&self, stub: &str, doc: Option<&Value>) -> Result<Value> {
        let url = format!("{}/{}", self.api_server, stub.trim_start_matches('/'));
        tracing::debug!(url = %url, "API request");

        let response = self.http.post(&url).form(&self.form_params(doc)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = %status, "API request rejected");
            return Err(error_for_status(status, body));
        }
        parse_envelope(&body)
    }

    fn form_params(&self, doc: Option<&Value>) -> Vec<(&'static str, String)> {
        let mut params = vec![("api_key", self.api_key.clone())];
        if let Some(doc) = doc {
            params.push(("doc", doc.to_string()));
        }
        params
    }

    /// Retrieve details about the ObjectRocket instance
    pub async fn details(&self) -> Result<Document> {
        into_document(self.request("instance", None).await?)
    }

    /// List databases visible to the API key, optionally filtered by an
    /// exact name match.
    ///
    /// An unmatched filter yields an empty vec, not an error. Ordering is
    /// whatever the service returned.
    pub async fn list_databases(&self, name: Option<&str>) -> Result<Vec<Database>> {
        let data = self.request("db", None).await?;
        let infos: Vec<DatabaseInfo> = serde_json::from_value(data)?;
        Ok(filter_databases(infos, name)
            .into_iter()
            .map(|info| Database::new(self.clone(), info))
            .collect())
    }

    /// Add a database or database user. If the database does not exist it
    /// is created; if it does exist only the user is created.
    pub async fn add_database(&self, name: &str, user: &str, password: &str) -> Result<Database> {
        let mut doc = Document::new();
        doc.insert(user.to_string(), Value::String(password.to_string()));
        self.request(&format!("db/{}/add", name), Some(&Value::Object(doc)))
            .await?;

        let dbs = self.list_databases(Some(name)).await?;
        dbs.into_iter().next().ok_or(ClientError::InvalidResponse)
    }

    /// Alias for [`Client::add_database`]
    pub async fn add_user(&self, name: &str, user: &str, password: &str) -> Result<Database> {
        self.add_database(name, user, password).await
    }

    /// List all ACLs for the instance, optionally filtered by a cidr match
    pub async fn list_acls(&self, cidr: Option<&str>) -> Result<Vec<Acl>> {
        let data = self.request("acl/get", None).await?;
        let infos: Vec<AclInfo> = serde_json::from_value(data)?;
        Ok(infos
            .into_iter()
            .filter(|info| cidr.map_or(true, |c| c == info.cidr_mask))
            .map(|info| Acl::new(self.clone(), info))
            .collect())
    }

    /// Add an ACL to the instance and return the created entry
    pub async fn add_acl(&self, cidr: &str, description: &str) -> Result<Acl> {
        let doc = serde_json::to_value(AddAclRequest {
            cidr_mask: cidr,
            description,
        })?;
        self.request("acl/add", Some(&doc)).await?;

        let acls = self.list_acls(Some(cidr)).await?;
        acls.into_iter().next().ok_or(ClientError::InvalidResponse)
    }

    /// Delete an ACL from the instance
    pub async fn delete_acl(&self, cidr: &str) -> Result<()> {
        let doc = serde_json::to_value(CidrRequest { cidr_mask: cidr })?;
        self.request("acl/delete", Some(&doc)).await?;
        Ok(())
    }

    /// Get instance status details. Supply `plus` for extended status
    pub async fn server_status(&self, plus: bool) -> Result<Document> {
        let stub = if plus { "serverStatusPlus" } else { "serverStatus" };
        into_document(self.request(stub, None).await?)
    }

    /// Get space utilization for the instance
    pub async fn space_usage(&self) -> Result<Document> {
        into_document(self.request("spaceusage/get", None).await?)
    }

    /// Get logs for the instance. The payload shape is service-defined
    pub async fn logs(&self) -> Result<Value> {
        self.request("logs/get", None).await
    }

    /// Get profiler data from the instance, optionally narrowed by a query
    pub async fn profiler(&self, query: Option<&Document>) -> Result<Value> {
        let doc = Value::Object(query.cloned().unwrap_or_default());
        self.request("profiler/get", Some(&doc)).await
    }

    /// Get the current profiling levels for all databases in the instance
    pub async fn profiling_level(&self) -> Result<Document> {
        into_document(self.request("profiling_level/get", None).await?)
    }

    /// Set the profiling level, for one database when `database` is given,
    /// for the whole instance otherwise
    pub async fn set_profiling_level(&self, level: i64, database: Option<&str>) -> Result<Value> {
        let doc = serde_json::to_value(SetProfilingLevelRequest { level, db: database })?;
        self.request("profiling_level/set", Some(&doc)).await
    }
}

fn error_for_status(status: StatusCode, message: String) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Auth {
            status: status.as_u16(),
            message,
        },
        _ => ClientError::Service {
            status: status.as_u16(),
            message,
        },
    }
}

/// Decode the response envelope, surfacing a non-zero `rc` as an API error
fn parse_envelope(body: &str) -> Result<Value> {
    let envelope: ApiEnvelope = serde_json::from_str(body)?;
    if envelope.rc != 0 {
        let message = match envelope.msg {
            Some(msg) => msg,
            None => {
                let data = match envelope.data {
                    Some(Value::String(s)) => s,
                    Some(v) => v.to_string(),
                    None => "null".to_string(),
                };
                format!("No msg provided ({})", data)
            }
        };
        return Err(ClientError::Api {
            rc: envelope.rc,
            message,
        });
    }
    Ok(envelope.data.unwrap_or(Value::Null))
}

fn filter_databases(infos: Vec<DatabaseInfo>, name: Option<&str>) -> Vec<DatabaseInfo> {
    infos
        .into_iter()
        .filter(|info| name.map_or(true, |n| n == info.name))
        .collect()
}

fn into_document(data: Value) -> Result<Document> {
    Ok(serde_json::from_value(data)?)
}
