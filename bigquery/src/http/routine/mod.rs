pub mod delete;
pub mod get;
pub mod insert;
pub mod list;
pub mod update;

use std::collections::HashMap;

use crate::http::types::StandardSqlDataType;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoutineReference {
    /// Required. The ID of the project containing this routine.
    pub project_id: String,
    /// Required. The ID of the dataset containing this routine.
    pub dataset_id: String,
    /// Required. The ID of the routine.
    pub routine_id: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    /// Optional. The name of this argument. Can be absent for function return argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional. `FIXED_TYPE` or `ANY_TYPE`. Defaults to `FIXED_TYPE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_kind: Option<String>,
    /// Optional. Specifies whether the argument is input or output. Can be set for procedures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Required unless argumentKind = ANY_TYPE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<StandardSqlDataType>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFunctionOptions {
    /// Endpoint of the user-provided remote service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Fully qualified name of the user-provided connection object which holds the authentication information
    /// to send requests to the remote service.
    /// Format: "projects/{projectId}/locations/{locationId}/connections/{connectionId}"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    /// User-defined context as a set of key/value pairs, which will be sent as function invocation context
    /// together with batched arguments in the requests to the remote service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined_context: Option<HashMap<String, String>>,
    /// Max number of rows in each batch sent to the remote service. If absent or if 0,
    /// BigQuery dynamically decides the number of rows in a batch.
    #[serde(
        default,
        deserialize_with = "crate::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_batching_rows: Option<i64>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    /// Output only. A hash of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Required. Reference describing the ID of this routine.
    pub routine_reference: RoutineReference,
    /// Required. `SCALAR_FUNCTION`, `PROCEDURE` or `TABLE_FUNCTION`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_type: Option<String>,
    /// Optional. Defaults to "SQL" if remoteFunctionOptions field is absent, not set otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Argument>>,
    /// Optional if language = "SQL"; required otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<StandardSqlDataType>,
    /// Optional. If language = "JAVASCRIPT", this field stores the path of the imported JAVASCRIPT libraries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_libraries: Option<Vec<String>>,
    /// Required. The body of the routine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional. The determinism level of the JavaScript UDF, if defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub determinism_level: Option<String>,
    /// Optional. Use this option to catch many common errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_mode: Option<bool>,
    /// Optional. Remote function specific options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_function_options: Option<RemoteFunctionOptions>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
