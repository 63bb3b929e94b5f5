#![allow(clippy::result_large_err)]
//! # bigquery-tasks
//!
//! Connector tasks for Google BigQuery. Each task wraps one REST capability behind a uniform
//! parameter/result contract:
//!
//! * [`task::create_resource`], [`task::get_resource`], [`task::list_resource`],
//!   [`task::patch_resource`], [`task::update_resource`] and [`task::delete_resource`] manage
//!   datasets, tables, routines, jobs and models.
//! * [`task::execute_query`] runs a GoogleSQL statement and returns typed JSON rows.
//! * [`task::insert`] streams rows from CSV, JSON or column/value pairs.
//!
//! Every task returns `{ success, data | url, error_message }`. Failures are prefixed with
//! `Error occured: ` and either raised as [`task::TaskError`] or reported in the result,
//! depending on `throw_on_error`.
//!
//! ## Quick Start
//!
//! ```rust
//! use bigquery_tasks::task::execute_query::{self, Connection, Input, QueryOptions};
//! use bigquery_tasks::task::{Credentials, ReadJsonMethod};
//! use tokio_util::sync::CancellationToken;
//!
//! async fn run(secret_json: String) {
//!     let connection = Connection {
//!         project_id: "my-project".to_string(),
//!         dataset_id: "my_dataset".to_string(),
//!         credentials: Credentials {
//!             read_json_method: ReadJsonMethod::Json,
//!             secret_json,
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!     let input = Input {
//!         query: "SELECT name, age FROM users".to_string(),
//!         ..Default::default()
//!     };
//!     let outcome = execute_query::execute_query(&connection, &input, &QueryOptions::default(), &CancellationToken::new())
//!         .await
//!         .unwrap();
//!     println!("{:?}", outcome.data);
//! }
//! ```
//!
//! ## REST client
//!
//! The tasks are built on [`client::Client`], which exposes one sub-client per BigQuery
//! collection and can be used directly.
//!
//! ```rust
//! use bigquery_tasks::client::{Client, ClientConfig};
//! use bigquery_tasks_auth::credentials::CredentialsFile;
//!
//! async fn run() {
//!     let credentials = CredentialsFile::new_from_file("/secrets/key.json").await.unwrap();
//!     let config = ClientConfig::new_with_credentials(&credentials).unwrap();
//!     let client = Client::new(config);
//!     let tables = client.table().list("my-project", "my_dataset", None).await.unwrap();
//! }
//! ```
pub mod client;
pub mod http;
pub mod query;
pub mod task;
