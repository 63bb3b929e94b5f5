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
pub struct TableReference {
    /// Required. The ID of the project containing this table.
    pub project_id: String,
    /// Required. The ID of the dataset containing this table.
    pub dataset_id: String,
    /// Required. The ID of the table.
    pub table_id: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableFieldSchema {
    /// Required. The field name.
    pub name: String,
    /// Required. The field data type, e.g. `STRING`, `INT64`, `RECORD`.
    #[serde(rename = "type", default)]
    pub data_type: String,
    /// Optional. `NULLABLE`, `REQUIRED` or `REPEATED`. The default value is `NULLABLE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Optional. Describes the nested schema fields if the type property is set to `RECORD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TableFieldSchema>>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl TableFieldSchema {
    pub fn is_repeated(&self) -> bool {
        self.mode.as_deref() == Some("REPEATED")
    }
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    /// Describes the fields in a table.
    #[serde(default)]
    pub fields: Vec<TableFieldSchema>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimePartitioning {
    /// Required. `DAY`, `HOUR`, `MONTH` or `YEAR`.
    #[serde(rename = "type")]
    pub partition_type: String,
    /// Optional. Number of milliseconds for which to keep the storage for a partition.
    #[serde(
        default,
        deserialize_with = "crate::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_ms: Option<i64>,
    /// Optional. If not set, the table is partitioned by pseudo column '_PARTITIONTIME'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_partition_filter: Option<bool>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// The start of range partitioning, inclusive.
    #[serde(
        default,
        deserialize_with = "crate::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<i64>,
    /// The end of range partitioning, exclusive.
    #[serde(
        default,
        deserialize_with = "crate::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<i64>,
    /// The width of each interval.
    #[serde(
        default,
        deserialize_with = "crate::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval: Option<i64>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RangePartitioning {
    /// Required. The name of the column to partition the table on.
    /// It must be a top-level, INT64 column whose mode is NULLABLE or REQUIRED.
    pub field: String,
    /// Defines the ranges for range partitioning.
    pub range: Range,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Output only. The type of resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Output only. A hash of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Output only. An opaque ID uniquely identifying the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Output only. A URL that can be used to access this resource again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Required. Reference describing the ID of this table.
    pub table_reference: TableReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    /// Optional. Describes the schema of this table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TableSchema>,
    /// If specified, configures time-based partitioning for this table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_partitioning: Option<TimePartitioning>,
    /// If specified, configures range partitioning for this table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_partitioning: Option<RangePartitioning>,
    /// Optional. If set to true, queries over this table require a partition filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_partition_filter: Option<bool>,
    /// Output only. The geographic location where the table resides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Custom encryption configuration (e.g., Cloud KMS keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_configuration: Option<EncryptionConfiguration>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
