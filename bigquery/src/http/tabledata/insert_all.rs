use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::types::ErrorProto;

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Row<T: serde::Serialize> {
    /// Insertion ID for best-effort deduplication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<String>,
    /// Data for a single row.
    pub json: T,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsertAllRequest<T: serde::Serialize> {
    /// Optional. Insert all valid rows of a request, even if invalid rows exist.
    /// The default value is false, which causes the entire request to fail if any invalid rows exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_invalid_rows: Option<bool>,
    /// Optional. Accept rows that contain values that do not match the schema.
    /// The unknown values are ignored. Default is false, which treats unknown values as errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unknown_values: Option<bool>,
    /// Optional. If specified, treats the destination table as a base template,
    /// and inserts the rows into an instance table named "{destination}{templateSuffix}".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    /// The rows to insert.
    pub rows: Vec<Row<T>>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The index of the row that error applies to.
    pub index: i32,
    /// Error information for the row indicated by the index property.
    #[serde(default)]
    pub errors: Vec<ErrorProto>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsertAllResponse {
    /// Describes specific errors encountered while processing the request.
    pub insert_errors: Option<Vec<Error>>,
}

pub fn build<T: serde::Serialize>(
    base_url: &str,
    client: &Client,
    project_id: &str,
    dataset_id: &str,
    table_id: &str,
    data: &InsertAllRequest<T>,
) -> RequestBuilder {
    let url = format!(
        "{}/projects/{}/datasets/{}/tables/{}/insertAll",
        base_url, project_id, dataset_id, table_id
    );
    client.post(url).json(data)
}
