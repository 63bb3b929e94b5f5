use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableMetadataView {
    /// The default value. Default to the STORAGE_STATS view.
    TableMetadataViewUnspecified,
    /// Includes basic table information including schema and partitioning specification.
    Basic,
    /// Includes all information in the BASIC view as well as storage statistics.
    #[default]
    StorageStats,
    /// Includes all table information, including storage statistics.
    Full,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetTableRequest {
    /// List of table schema fields to return (comma-separated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fields: Option<String>,
    /// Specifies the view that determines which table information is returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<TableMetadataView>,
}

pub fn build(
    base_url: &str,
    client: &Client,
    project_id: &str,
    dataset_id: &str,
    table_id: &str,
    req: Option<&GetTableRequest>,
) -> RequestBuilder {
    let url = format!(
        "{}/projects/{}/datasets/{}/tables/{}",
        base_url, project_id, dataset_id, table_id
    );
    let builder = client.get(url);
    if let Some(req) = req {
        builder.query(req)
    } else {
        builder
    }
}
