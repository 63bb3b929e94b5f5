pub mod delete;
pub mod get;
pub mod insert;
pub mod list;
pub mod patch;
pub mod update;

use std::collections::HashMap;

use crate::http::types::EncryptionConfiguration;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    /// Required. A unique ID for this dataset, without the project name.
    pub dataset_id: String,
    /// Optional. The ID of the project containing this dataset.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GcpTag {
    /// Required. The namespaced friendly name of the tag key, e.g. "12345/environment" where 12345 is org id.
    pub tag_key: String,
    /// Required. The friendly short name of the tag value, e.g. "production".
    pub tag_value: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Access {
    /// An IAM role ID that should be granted to the user, group, or domain specified in this access entry.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,
    /// An email address of a user to grant access to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_by_email: Option<String>,
    /// Groups, domains, views and other grantees.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Output only. The resource type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Output only. A hash of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Output only. The fully-qualified unique name of the dataset in the format projectId:datasetId.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Output only. A URL that can be used to access the resource again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Required. A reference that identifies the dataset.
    pub dataset_reference: DatasetReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The labels associated with this dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    /// An array of objects that define dataset access for one or more entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Vec<Access>>,
    /// The geographic location where the dataset should reside.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The default encryption key for all tables in the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_encryption_configuration: Option<EncryptionConfiguration>,
    /// TRUE if the dataset and its table names are case-insensitive, otherwise FALSE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_case_insensitive: Option<bool>,
    /// Defines the time travel window in hours. The value can be from 48 to 168 hours (2 to 7 days).
    #[serde(
        default,
        deserialize_with = "crate::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_time_travel_hours: Option<i64>,
    /// `LOGICAL` or `PHYSICAL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_billing_model: Option<String>,
    /// The tags attached to this dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<GcpTag>>,
    /// Fields not modelled above, such as creationTime.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
