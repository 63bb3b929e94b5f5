//! Task entry points.
//!
//! Each task resolves service account credentials, connects a [`Client`], performs one logical
//! BigQuery call and normalizes the outcome. Parameters deserialize from camelCase JSON so an
//! orchestration engine can hand them over as-is.
//!
//! ```no_run
//! use bigquery_tasks::task::delete_resource::{self, Connection, Resource};
//! use bigquery_tasks::task::{Credentials, Options, ReadJsonMethod};
//! use tokio_util::sync::CancellationToken;
//!
//! async fn run() {
//!     let connection = Connection {
//!         resource: Resource::Table,
//!         project_id: "my-project".to_string(),
//!         dataset_id: "my_dataset".to_string(),
//!         table_id: "my_table".to_string(),
//!         credentials: Credentials {
//!             read_json_method: ReadJsonMethod::File,
//!             credentials_file_path: "/secrets/key.json".to_string(),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!     let options = Options { throw_on_error: false };
//!     let outcome = delete_resource::delete_resource(&connection, &options, &CancellationToken::new()).await;
//! }
//! ```
use std::fmt;
use std::future::Future;

use tokio_util::sync::CancellationToken;

use bigquery_tasks_auth::credentials::CredentialsFile;

use crate::client::{Client, ClientConfig};

pub mod create_resource;
pub mod delete_resource;
pub mod execute_query;
pub mod get_resource;
pub mod insert;
pub mod list_resource;
pub mod patch_resource;
pub mod resource;
pub mod update_resource;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] bigquery_tasks_auth::error::Error),
    #[error(transparent)]
    Http(#[from] crate::http::error::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] crate::query::Error),
    #[error("{0} is required.")]
    MissingParameter(&'static str),
    #[error("Invalid header row")]
    InvalidHeaderRow,
    #[error("Number of values doesn't match the number of headers.")]
    ColumnCountMismatch,
    /// First per-row failure reported by a streaming insert.
    #[error("{0}")]
    Insert(String),
    #[error("The operation was canceled.")]
    Canceled,
}

/// A failed task, raised when `throw_on_error` is set.
#[derive(thiserror::Error, Debug)]
#[error("Error occured: {0}")]
pub struct TaskError(#[source] pub Error);

/// Result of tasks without a payload.
#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub success: bool,
    pub error_message: Option<String>,
}

impl Outcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error_message: None,
        }
    }
}

/// Result of tasks reporting the location of a created resource.
#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UrlOutcome {
    pub success: bool,
    pub url: Option<String>,
    pub error_message: Option<String>,
}

impl UrlOutcome {
    pub fn ok(url: Option<String>) -> Self {
        Self {
            success: true,
            url,
            error_message: None,
        }
    }
}

/// Result of tasks returning JSON data.
#[derive(Clone, PartialEq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataOutcome {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error_message: Option<String>,
}

impl DataOutcome {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error_message: None,
        }
    }
}

/// Builds the unsuccessful form of a task result.
pub trait Failure {
    fn failure(message: String) -> Self;
}

impl Failure for Outcome {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            error_message: Some(message),
        }
    }
}

impl Failure for UrlOutcome {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            url: None,
            error_message: Some(message),
        }
    }
}

impl Failure for DataOutcome {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error_message: Some(message),
        }
    }
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Return `Err` on failure instead of an unsuccessful result. Defaults to true.
    pub throw_on_error: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { throw_on_error: true }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum ReadJsonMethod {
    /// The credentials document is passed inline in `secret_json`.
    #[serde(rename = "JSON", alias = "Json")]
    Json,
    /// The credentials document is read from `credentials_file_path`.
    #[default]
    File,
}

/// Where to find the service account key.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Credentials {
    pub read_json_method: ReadJsonMethod,
    pub secret_json: String,
    pub credentials_file_path: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("read_json_method", &self.read_json_method)
            .field("secret_json", &"[redacted]")
            .field("credentials_file_path", &self.credentials_file_path)
            .finish()
    }
}

impl Credentials {
    async fn resolve(&self) -> Result<CredentialsFile, Error> {
        let file = match self.read_json_method {
            ReadJsonMethod::Json => CredentialsFile::new_from_str(required(&self.secret_json, "SecretJson")?)?,
            ReadJsonMethod::File => {
                CredentialsFile::new_from_file(required(&self.credentials_file_path, "CredentialsFilePath")?).await?
            }
        };
        Ok(file)
    }
}

/// Resolves the credentials and builds a client. A blank `base_uri` selects the public endpoint.
pub(crate) async fn connect(base_uri: &str, credentials: &Credentials) -> Result<Client, Error> {
    let file = credentials.resolve().await?;
    let config = ClientConfig::new_with_credentials(&file)?.with_endpoint(Some(base_uri));
    tracing::debug!("connecting to {}", config.bigquery_endpoint);
    Ok(Client::new(config))
}

pub(crate) fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str, Error> {
    let value = value.trim();
    if value.is_empty() {
        Err(Error::MissingParameter(name))
    } else {
        Ok(value)
    }
}

/// Drives `action` to completion unless `cancel` fires first, then applies the throw/return rule.
pub(crate) async fn run<T, F>(throw_on_error: bool, cancel: &CancellationToken, action: F) -> Result<T, TaskError>
where
    T: Failure,
    F: Future<Output = Result<T, Error>>,
{
    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Canceled),
        v = action => v,
    };
    match result {
        Ok(v) => Ok(v),
        Err(e) => {
            let err = TaskError(e);
            if throw_on_error {
                Err(err)
            } else {
                tracing::debug!("{}", err);
                Ok(T::failure(err.to_string()))
            }
        }
    }
}
