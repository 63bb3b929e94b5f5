pub mod list;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RowAccessPolicyReference {
    /// Required. The ID of the project containing this row access policy.
    pub project_id: String,
    /// Required. The ID of the dataset containing this row access policy.
    pub dataset_id: String,
    /// Required. The ID of the table containing this row access policy.
    pub table_id: String,
    /// Required. The ID of the row access policy.
    pub policy_id: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RowAccessPolicy {
    /// Output only. A hash of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Required. Reference describing the ID of this row access policy.
    pub row_access_policy_reference: RowAccessPolicyReference,
    /// Required. A SQL boolean expression that represents the rows defined by this row access policy,
    /// similar to the boolean expression in a WHERE clause of a SELECT query on a table.
    #[serde(default)]
    pub filter_predicate: String,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
