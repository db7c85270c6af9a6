//! Main DB-Forge client with builder pattern.
//!
//! Provides the admin surface (spawn/list/prune database instances), the
//! health probe, and access to per-database [`Database`] handles.

use log::debug;
use std::time::Duration;

use crate::config;
use crate::database::Database;
use crate::error::{DbForgeError, Result};
use crate::models::{DatabaseInfo, HealthResult, PruneResult, SpawnResult};
use crate::response;
use crate::transport::HttpTransport;

/// Main DB-Forge client.
///
/// Use [`DbForgeClient::builder`] to construct instances. Configuration is
/// resolved once at build time with the precedence explicit argument >
/// environment variable > default, independently per setting
/// (`DBFORGE_BASE_URL`, `DBFORGE_API_KEY`, `DBFORGE_TIMEOUT`).
///
/// The client holds no mutable state; it is `Clone` and safe to share across
/// tasks. Every operation is one fresh request/response round trip.
///
/// # Examples
///
/// ```rust,no_run
/// use dbforge_link::DbForgeClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DbForgeClient::builder()
///     .base_url("http://db.localhost")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
///
/// let spawned = client.spawn_database("app-db").await?;
/// println!("spawned in container {}", spawned.container_id);
///
/// let db = client.database("app-db");
/// let result = db.execute_query("SELECT 1", vec![]).await?;
/// println!("{:?}", result);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DbForgeClient {
    transport: HttpTransport,
    api_key: Option<String>,
}

impl DbForgeClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> DbForgeClientBuilder {
        DbForgeClientBuilder::new()
    }

    /// Create a client from defaults and environment only.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// The resolved gateway base URL (trailing slash trimmed).
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// The resolved API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Spawn a new database instance behind the gateway.
    pub async fn spawn_database(&self, name: &str) -> Result<SpawnResult> {
        debug!("[FORGE_ADMIN] Spawning database '{}'", name);
        let body = self
            .transport
            .post_empty(&format!("/admin/databases/spawn/{}", name))
            .await?;
        Ok(response::parse_spawn_result(&body))
    }

    /// Prune (remove) a database instance and its backing container.
    pub async fn prune_database(&self, name: &str) -> Result<PruneResult> {
        debug!("[FORGE_ADMIN] Pruning database '{}'", name);
        let body = self
            .transport
            .post_empty(&format!("/admin/databases/prune/{}", name))
            .await?;
        Ok(response::parse_prune_result(&body))
    }

    /// List all active database instances.
    pub async fn list_databases(&self) -> Result<Vec<DatabaseInfo>> {
        let body = self.transport.get("/admin/databases", &[]).await?;
        Ok(response::parse_database_list(&body))
    }

    /// Probe gateway health. Issued fresh on every call; nothing is cached.
    pub async fn health_check(&self) -> Result<HealthResult> {
        let body = self.transport.get("/", &[]).await?;
        Ok(response::parse_health_result(&body))
    }

    /// Get a handle for data operations against one database.
    ///
    /// This is purely local; no request is made until an operation runs.
    pub fn database(&self, name: &str) -> Database {
        Database::new(self.transport.clone(), name.to_string())
    }
}

/// Builder for configuring [`DbForgeClient`] instances.
pub struct DbForgeClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl DbForgeClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
        }
    }

    /// Set the gateway base URL, overriding `DBFORGE_BASE_URL`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key sent as `X-API-Key`, overriding `DBFORGE_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the per-request timeout, overriding `DBFORGE_TIMEOUT`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client, resolving each setting once. The environment is
    /// never read again after this returns.
    pub fn build(self) -> Result<DbForgeClient> {
        let env = |name: &str| std::env::var(name).ok();
        let base_url = config::resolve_base_url(self.base_url, env);
        let api_key = config::resolve_api_key(self.api_key, env);
        let timeout = config::resolve_timeout(self.timeout, env);

        debug!(
            "[FORGE_CLIENT] Building client: base_url={} timeout={:?} api_key={}",
            base_url,
            timeout,
            if api_key.is_some() { "set" } else { "unset" }
        );

        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(key) = &api_key {
            let value = reqwest::header::HeaderValue::from_str(key).map_err(|_| {
                DbForgeError::GenericError {
                    status_code: 0,
                    message: "API key contains characters not valid in a header".to_string(),
                    code: None,
                }
            })?;
            headers.insert("X-API-Key", value);
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dbforge-link/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| DbForgeError::GenericError {
                status_code: 0,
                message: format!("failed to build HTTP client: {}", e),
                code: None,
            })?;

        Ok(DbForgeClient {
            transport: HttpTransport::new(&base_url, http_client),
            api_key,
        })
    }
}
