//! Runs a GoogleSQL statement and returns its rows as JSON objects.
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use backon::{ConstantBuilder, Retryable};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::http::dataset::DatasetReference;
use crate::http::error::Error as HttpError;
use crate::http::job::get_query_results::GetQueryResultsRequest;
use crate::http::job::query::QueryRequest;
use crate::http::types::{QueryParameter, QueryParameterStructType, QueryParameterType, QueryParameterValue};
use crate::query::decode_rows;
use crate::task::{connect, required, run, Credentials, DataOutcome, Error, TaskError};

/// Declared type of a query parameter. `Empty` infers it from the JSON value.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum DbType {
    #[default]
    Empty,
    Int64,
    Float64,
    Bool,
    String,
    Bytes,
    Date,
    DateTime,
    Time,
    Timestamp,
    Array,
    Struct,
    Numeric,
    Geography,
    BigNumeric,
    Json,
}

impl DbType {
    fn type_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Empty => return None,
            Self::Int64 => "INT64",
            Self::Float64 => "FLOAT64",
            Self::Bool => "BOOL",
            Self::String => "STRING",
            Self::Bytes => "BYTES",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Array => "ARRAY",
            Self::Struct => "STRUCT",
            Self::Numeric => "NUMERIC",
            Self::Geography => "GEOGRAPHY",
            Self::BigNumeric => "BIGNUMERIC",
            Self::Json => "JSON",
        })
    }
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameter {
    /// Referenced as `@name` in the query.
    pub name: String,
    pub db_type: DbType,
    pub value: Value,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub base_uri: String,
    pub project_id: String,
    /// Default dataset for unqualified table names.
    pub dataset_id: String,
    /// Not sent with the query.
    pub table_id: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    pub query: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    pub throw_on_error: bool,
    /// Retries after transport failures and 429/5xx responses.
    pub max_retry_attempts: usize,
    /// Seconds between attempts.
    pub delay: u64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            throw_on_error: true,
            max_retry_attempts: 0,
            delay: 0,
        }
    }
}

pub async fn execute_query(
    connection: &Connection,
    input: &Input,
    options: &QueryOptions,
    cancel: &CancellationToken,
) -> Result<DataOutcome, TaskError> {
    run(options.throw_on_error, cancel, query(connection, input, options)).await
}

async fn query(connection: &Connection, input: &Input, options: &QueryOptions) -> Result<DataOutcome, Error> {
    let project_id = required(&connection.project_id, "ProjectId")?;
    let request = query_request(project_id, &connection.dataset_id, input)?;
    let client = connect(&connection.base_uri, &connection.credentials).await?;
    let job = client.job();

    let response = with_retry(options, || job.query(project_id, &request)).await?;
    let job_reference = response.job_reference;
    let mut schema = response.schema;
    let mut rows = response.rows.unwrap_or_default();
    let mut complete = response.job_complete;
    let mut page_token = response.page_token;
    while !complete || page_token.is_some() {
        let req = GetQueryResultsRequest {
            page_token: page_token.clone(),
            location: job_reference.location.clone(),
            ..Default::default()
        };
        let response = with_retry(options, || job.get_query_results(project_id, &job_reference.job_id, &req)).await?;
        complete = response.job_complete;
        if complete {
            if schema.is_none() {
                schema = response.schema;
            }
            rows.extend(response.rows.unwrap_or_default());
            page_token = response.page_token;
        }
    }

    // DML and DDL statements have no result schema
    let data = match schema {
        Some(schema) => decode_rows(&schema, rows)?,
        None => vec![],
    };
    tracing::debug!("query {} returned {} rows", job_reference.job_id, data.len());
    Ok(DataOutcome::ok(Value::Array(data)))
}

fn query_request(project_id: &str, dataset_id: &str, input: &Input) -> Result<QueryRequest, Error> {
    let query = required(&input.query, "Query")?;
    let query_parameters = input.parameters.iter().map(query_parameter).collect::<Vec<_>>();
    let dataset_id = dataset_id.trim();
    Ok(QueryRequest {
        query: query.to_string(),
        use_legacy_sql: false,
        parameter_mode: (!query_parameters.is_empty()).then(|| "NAMED".to_string()),
        query_parameters,
        default_dataset: (!dataset_id.is_empty()).then(|| DatasetReference {
            dataset_id: dataset_id.to_string(),
            project_id: project_id.to_string(),
        }),
        ..Default::default()
    })
}

fn query_parameter(parameter: &Parameter) -> QueryParameter {
    let parameter_type = match parameter.db_type {
        DbType::Array => QueryParameterType {
            parameter_type: "ARRAY".to_string(),
            array_type: Some(Box::new(element_type(&parameter.value))),
            struct_types: None,
        },
        DbType::Struct => QueryParameterType {
            parameter_type: "STRUCT".to_string(),
            array_type: None,
            struct_types: Some(struct_types(&parameter.value)),
        },
        db_type => match db_type.type_name() {
            Some(name) => scalar_type(name),
            None => infer_type(&parameter.value),
        },
    };
    QueryParameter {
        name: Some(parameter.name.clone()),
        parameter_value: parameter_value(&parameter.value, &parameter_type),
        parameter_type,
    }
}

fn scalar_type(name: &str) -> QueryParameterType {
    QueryParameterType {
        parameter_type: name.to_string(),
        ..Default::default()
    }
}

fn infer_type(value: &Value) -> QueryParameterType {
    match value {
        Value::Bool(_) => scalar_type("BOOL"),
        Value::Number(n) if n.is_i64() || n.is_u64() => scalar_type("INT64"),
        Value::Number(_) => scalar_type("FLOAT64"),
        Value::Array(_) => QueryParameterType {
            parameter_type: "ARRAY".to_string(),
            array_type: Some(Box::new(element_type(value))),
            struct_types: None,
        },
        Value::Object(_) => QueryParameterType {
            parameter_type: "STRUCT".to_string(),
            array_type: None,
            struct_types: Some(struct_types(value)),
        },
        Value::String(_) | Value::Null => scalar_type("STRING"),
    }
}

/// Element type of an array, taken from its first element.
fn element_type(value: &Value) -> QueryParameterType {
    match value.as_array().and_then(|items| items.first()) {
        Some(first) => infer_type(first),
        None => scalar_type("STRING"),
    }
}

fn struct_types(value: &Value) -> Vec<QueryParameterStructType> {
    match value {
        Value::Object(fields) => fields
            .iter()
            .map(|(name, v)| QueryParameterStructType {
                name: Some(name.clone()),
                field_type: infer_type(v),
            })
            .collect(),
        _ => vec![],
    }
}

/// Shapes the value after its resolved type. Scalar types take the string form, so a JSON
/// object declared as `JSON` is sent as its serialized text.
fn parameter_value(value: &Value, parameter_type: &QueryParameterType) -> QueryParameterValue {
    match (parameter_type.parameter_type.as_str(), value) {
        (_, Value::Null) => QueryParameterValue::default(),
        ("ARRAY", Value::Array(items)) => {
            let element = parameter_type.array_type.as_deref().cloned().unwrap_or_else(|| scalar_type("STRING"));
            QueryParameterValue {
                array_values: Some(items.iter().map(|v| parameter_value(v, &element)).collect()),
                ..Default::default()
            }
        }
        ("STRUCT", Value::Object(fields)) => {
            let types = parameter_type.struct_types.as_deref().unwrap_or_default();
            let struct_values = fields
                .iter()
                .map(|(name, v)| {
                    let field_type = match types.iter().find(|t| t.name.as_deref() == Some(name.as_str())) {
                        Some(t) => t.field_type.clone(),
                        None => infer_type(v),
                    };
                    (name.clone(), parameter_value(v, &field_type))
                })
                .collect::<HashMap<_, _>>();
            QueryParameterValue {
                struct_values: Some(struct_values),
                ..Default::default()
            }
        }
        (_, Value::String(s)) => QueryParameterValue {
            value: Some(s.clone()),
            ..Default::default()
        },
        (_, value) => QueryParameterValue {
            value: Some(value.to_string()),
            ..Default::default()
        },
    }
}

async fn with_retry<T, F, Fut>(options: &QueryOptions, action: F) -> Result<T, HttpError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, HttpError>>,
{
    let backoff = ConstantBuilder::default()
        .with_delay(Duration::from_secs(options.delay))
        .with_max_times(options.max_retry_attempts);
    action
        .retry(backoff)
        .when(HttpError::is_retryable)
        .notify(|err, delay| tracing::warn!("retrying query request after {:?}: {}", delay, err))
        .await
}
