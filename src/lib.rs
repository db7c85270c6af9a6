//! Async Rust client for the DB-Forge database gateway.
//!
//! DB-Forge exposes on-demand SQLite instances over HTTP: an admin surface
//! (spawn/list/prune databases) and a per-database data surface (tables,
//! rows, raw parameterized SQL). This crate is the command-translation and
//! response-marshalling layer: typed operations become parameterized query
//! text and request payloads, loosely-typed JSON responses become typed
//! results, and every failure classifies into one [`DbForgeError`] variant.
//!
//! The client holds no state between calls; every operation is a single
//! fresh request/response round trip. Retries, caching and pooling belong
//! to the transport or the caller, not here.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dbforge_link::{Column, DbForgeClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DbForgeClient::builder()
//!     .base_url("http://db.localhost")
//!     .build()?;
//!
//! client.spawn_database("app-db").await?;
//!
//! let db = client.database("app-db");
//! db.create_table(
//!     "users",
//!     &[
//!         Column::new("id", "INTEGER").primary_key(),
//!         Column::new("name", "TEXT").not_null(),
//!     ],
//! )
//! .await?;
//!
//! let mut alice = dbforge_link::Row::new();
//! alice.insert("name".to_string(), "Alice".to_string());
//! db.insert_rows("users", &[alice]).await?;
//!
//! let rows = db.select_rows("users", &Default::default()).await?;
//! println!("{} user(s)", rows.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod database;
mod error;
pub mod models;
mod request;
mod response;
mod transport;

pub use client::{DbForgeClient, DbForgeClientBuilder};
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT};
pub use database::Database;
pub use error::{DbForgeError, Result};
pub use models::{
    Column, ColumnInfo, CreateTableRequest, CreateTableResult, DatabaseInfo, DropResult,
    ErrorDetail, ErrorEnvelope, HealthResult, InsertResult, InsertRowsRequest, PruneResult,
    QueryRequest, QueryResult, Row, SpawnResult,
};
