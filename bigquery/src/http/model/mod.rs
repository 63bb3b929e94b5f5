pub mod delete;
pub mod get;
pub mod list;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModelReference {
    /// Required. The ID of the project containing this model.
    pub project_id: String,
    /// Required. The ID of the dataset containing this model.
    pub dataset_id: String,
    /// Required. The ID of the model.
    pub model_id: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Output only. A hash of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Required. Unique identifier for this model.
    pub model_reference: ModelReference,
    /// Output only. Type of the model resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Training runs, feature columns, labels and the remaining model metadata.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
