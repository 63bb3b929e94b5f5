//! Flat resource fields shared by the create, patch and update tasks, and their mapping onto
//! datasets, tables and routines.
use std::collections::HashMap;

use crate::http::dataset::{Access, Dataset, DatasetReference, GcpTag};
use crate::http::routine::{Argument, RemoteFunctionOptions, Routine, RoutineReference};
use crate::http::table::{
    Range, RangePartitioning, Table, TableFieldSchema, TableReference, TableSchema, TimePartitioning,
};
use crate::http::types::{EncryptionConfiguration, StandardSqlDataType};

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessEntry {
    /// e.g. `READER`, `WRITER`, `OWNER`.
    pub role: String,
    pub user_by_email: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaField {
    pub name: String,
    /// Column type. Upper-cased before sending.
    #[serde(rename = "type")]
    pub field_type: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportedLibrary {
    /// Cloud Storage URI of a JavaScript library.
    pub value: String,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ArgumentParameter {
    pub name: String,
    /// `IN`, `OUT` or `INOUT`, procedures only.
    pub mode: String,
    /// Upper-cased into `dataType.typeKind`.
    pub data_type: String,
    pub argument_kind: ArgumentKind,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArgumentKind {
    #[default]
    ArgumentKindUnspecified,
    FixedType,
    AnyType,
}

impl ArgumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentKindUnspecified => "ARGUMENT_KIND_UNSPECIFIED",
            Self::FixedType => "FIXED_TYPE",
            Self::AnyType => "ANY_TYPE",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeterminismLevel {
    #[default]
    DeterminismLevelUnspecified,
    Deterministic,
    NotDeterministic,
}

impl DeterminismLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeterminismLevelUnspecified => "DETERMINISM_LEVEL_UNSPECIFIED",
            Self::Deterministic => "DETERMINISTIC",
            Self::NotDeterministic => "NOT_DETERMINISTIC",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutineType {
    #[default]
    ScalarFunction,
    Procedure,
    TableFunction,
}

impl RoutineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScalarFunction => "SCALAR_FUNCTION",
            Self::Procedure => "PROCEDURE",
            Self::TableFunction => "TABLE_FUNCTION",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum Partition {
    /// The table is not partitioned.
    #[default]
    None,
    RangePartitioning,
    TimePartitioning,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum TimePartitionType {
    #[default]
    #[serde(rename = "DAY")]
    Day,
    #[serde(rename = "HOUR")]
    Hour,
    #[serde(rename = "MONTH")]
    Month,
    #[serde(rename = "YEAR")]
    Year,
}

impl TimePartitionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Hour => "HOUR",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        }
    }
}

/// The REST method a resource body is built for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum WriteMethod {
    /// Empty collections are omitted.
    Insert,
    /// Only given collections are sent, so absent ones stay untouched.
    Patch,
    /// Collections are always sent, so absent ones are cleared.
    Update,
}

/// Resource fields as entered in the task input. Which of them apply depends on the resource.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceFields {
    pub description: String,
    pub friendly_name: String,
    /// Defaults to `EU`.
    pub location: String,
    pub label: Option<Vec<KeyValue>>,
    pub set_encryption_configuration: bool,
    pub kms_key_name: String,

    // datasets
    /// `LOGICAL` or `PHYSICAL`. Defaults to `LOGICAL`.
    pub storage_billing_model: String,
    pub is_case_insensitive: bool,
    /// 0 keeps the service default.
    pub max_time_travel_hours: i64,
    pub access: Option<Vec<AccessEntry>>,
    /// Sent as `tagKey`/`tagValue`.
    pub tag: Option<Vec<KeyValue>>,

    // tables
    pub require_partition_filter: bool,
    pub table_schema: Option<Vec<SchemaField>>,
    pub partition: Partition,
    pub range_field: String,
    pub range_start: i64,
    pub range_end: i64,
    pub range_interval: i64,
    pub time_field: String,
    #[serde(rename = "type")]
    pub time_partition_type: TimePartitionType,
    pub time_require_partition_filter: bool,
    /// 0 keeps partitions forever.
    pub expiration_ms: i64,

    // routines
    pub definition_body: String,
    /// `SQL`, `JAVASCRIPT`, `PYTHON`, `JAVA` or `SCALA`.
    pub language: String,
    pub routine_type: RoutineType,
    pub return_type: String,
    pub determinism_level: DeterminismLevel,
    /// Defaults to true.
    pub strict_mode: bool,
    pub imported_library: Option<Vec<ImportedLibrary>>,
    pub argument: Option<Vec<ArgumentParameter>>,
    pub set_remote_function_parameters: bool,
    pub remote_connection: String,
    pub remote_endpoint: String,
    pub remote_max_batching_rows: i64,
    pub remote_user_defined_context: Option<Vec<KeyValue>>,
}

impl Default for ResourceFields {
    fn default() -> Self {
        Self {
            description: String::new(),
            friendly_name: String::new(),
            location: "EU".to_string(),
            label: None,
            set_encryption_configuration: false,
            kms_key_name: String::new(),
            storage_billing_model: "LOGICAL".to_string(),
            is_case_insensitive: false,
            max_time_travel_hours: 0,
            access: None,
            tag: None,
            require_partition_filter: false,
            table_schema: None,
            partition: Partition::None,
            range_field: String::new(),
            range_start: 0,
            range_end: 0,
            range_interval: 0,
            time_field: String::new(),
            time_partition_type: TimePartitionType::Day,
            time_require_partition_filter: false,
            expiration_ms: 0,
            definition_body: String::new(),
            language: String::new(),
            routine_type: RoutineType::ScalarFunction,
            return_type: String::new(),
            determinism_level: DeterminismLevel::DeterminismLevelUnspecified,
            strict_mode: true,
            imported_library: None,
            argument: None,
            set_remote_function_parameters: false,
            remote_connection: String::new(),
            remote_endpoint: String::new(),
            remote_max_batching_rows: 0,
            remote_user_defined_context: None,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn positive(value: i64) -> Option<i64> {
    (value > 0).then_some(value)
}

fn given<T, U>(values: Option<&[T]>, method: WriteMethod, f: impl Fn(&T) -> U) -> Option<Vec<U>> {
    match values {
        None if method == WriteMethod::Update => Some(vec![]),
        None => None,
        Some(v) if v.is_empty() && method == WriteMethod::Insert => None,
        Some(v) => Some(v.iter().map(f).collect()),
    }
}

fn key_values(values: Option<&[KeyValue]>, method: WriteMethod) -> Option<HashMap<String, String>> {
    given(values, method, |kv| (kv.key.clone(), kv.value.clone())).map(|v| v.into_iter().collect())
}

impl ResourceFields {
    fn encryption(&self) -> Option<EncryptionConfiguration> {
        self.set_encryption_configuration.then(|| EncryptionConfiguration {
            kms_key_name: non_blank(&self.kms_key_name),
        })
    }

    pub(crate) fn dataset(&self, project_id: &str, dataset_id: &str, method: WriteMethod) -> Dataset {
        Dataset {
            dataset_reference: DatasetReference {
                dataset_id: dataset_id.to_string(),
                project_id: project_id.to_string(),
            },
            friendly_name: non_blank(&self.friendly_name),
            description: non_blank(&self.description),
            labels: key_values(self.label.as_deref(), method),
            access: given(self.access.as_deref(), method, |a| Access {
                role: a.role.clone(),
                user_by_email: non_blank(&a.user_by_email),
                ..Default::default()
            }),
            location: non_blank(&self.location),
            default_encryption_configuration: self.encryption(),
            is_case_insensitive: Some(self.is_case_insensitive),
            max_time_travel_hours: positive(self.max_time_travel_hours),
            storage_billing_model: non_blank(&self.storage_billing_model),
            tags: given(self.tag.as_deref(), method, |t| GcpTag {
                tag_key: t.key.clone(),
                tag_value: t.value.clone(),
            }),
            ..Default::default()
        }
    }

    pub(crate) fn table(&self, project_id: &str, dataset_id: &str, table_id: &str, method: WriteMethod) -> Table {
        let (time_partitioning, range_partitioning) = self.partitioning();
        Table {
            table_reference: TableReference {
                project_id: project_id.to_string(),
                dataset_id: dataset_id.to_string(),
                table_id: table_id.to_string(),
            },
            friendly_name: non_blank(&self.friendly_name),
            description: non_blank(&self.description),
            labels: key_values(self.label.as_deref(), method),
            schema: given(self.table_schema.as_deref(), method, |f| TableFieldSchema {
                name: f.name.clone(),
                data_type: f.field_type.to_uppercase(),
                ..Default::default()
            })
            .map(|fields| TableSchema { fields }),
            time_partitioning,
            range_partitioning,
            require_partition_filter: match method {
                WriteMethod::Update => Some(self.require_partition_filter),
                _ => self.require_partition_filter.then_some(true),
            },
            location: non_blank(&self.location),
            encryption_configuration: self.encryption(),
            ..Default::default()
        }
    }

    fn partitioning(&self) -> (Option<TimePartitioning>, Option<RangePartitioning>) {
        match self.partition {
            Partition::None => (None, None),
            Partition::RangePartitioning => (
                None,
                Some(RangePartitioning {
                    field: self.range_field.to_uppercase(),
                    range: Range {
                        start: Some(self.range_start),
                        end: Some(self.range_end),
                        interval: Some(self.range_interval),
                    },
                }),
            ),
            Partition::TimePartitioning => (
                Some(TimePartitioning {
                    partition_type: self.time_partition_type.as_str().to_string(),
                    expiration_ms: positive(self.expiration_ms),
                    field: non_blank(&self.time_field),
                    require_partition_filter: Some(self.time_require_partition_filter),
                }),
                None,
            ),
        }
    }

    pub(crate) fn routine(&self, reference: RoutineReference, method: WriteMethod) -> Routine {
        Routine {
            routine_reference: reference,
            routine_type: Some(self.routine_type.as_str().to_string()),
            language: non_blank(&self.language),
            arguments: given(self.argument.as_deref(), method, |a| Argument {
                name: non_blank(&a.name),
                argument_kind: Some(a.argument_kind.as_str().to_string()),
                mode: non_blank(&a.mode),
                data_type: non_blank(&a.data_type).map(|t| StandardSqlDataType {
                    type_kind: t.to_uppercase(),
                    ..Default::default()
                }),
            }),
            return_type: non_blank(&self.return_type).map(|t| StandardSqlDataType {
                type_kind: t.to_uppercase(),
                ..Default::default()
            }),
            imported_libraries: given(self.imported_library.as_deref(), method, |l| l.value.clone()),
            definition_body: non_blank(&self.definition_body),
            description: non_blank(&self.description),
            determinism_level: Some(self.determinism_level.as_str().to_string()),
            strict_mode: Some(self.strict_mode),
            remote_function_options: self.set_remote_function_parameters.then(|| RemoteFunctionOptions {
                endpoint: non_blank(&self.remote_endpoint),
                connection: non_blank(&self.remote_connection),
                user_defined_context: key_values(self.remote_user_defined_context.as_deref(), WriteMethod::Insert),
                max_batching_rows: positive(self.remote_max_batching_rows),
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn kv(key: &str, value: &str) -> KeyValue {
        KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_deserialize_defaults() {
        let fields: ResourceFields = serde_json::from_str("{}").unwrap();
        assert_eq!(ResourceFields::default(), fields);
        assert_eq!("EU", fields.location);
        assert_eq!("LOGICAL", fields.storage_billing_model);
        assert!(fields.strict_mode);

        let fields: ResourceFields = serde_json::from_value(json!({
            "partition": "TimePartitioning",
            "type": "HOUR",
            "routineType": "PROCEDURE",
            "determinismLevel": "NOT_DETERMINISTIC",
            "argument": [{"name": "x", "dataType": "int64", "argumentKind": "FIXED_TYPE"}]
        }))
        .unwrap();
        assert_eq!(Partition::TimePartitioning, fields.partition);
        assert_eq!(TimePartitionType::Hour, fields.time_partition_type);
        assert_eq!(RoutineType::Procedure, fields.routine_type);
        assert_eq!(DeterminismLevel::NotDeterministic, fields.determinism_level);
        assert_eq!(ArgumentKind::FixedType, fields.argument.unwrap()[0].argument_kind);
    }

    #[test]
    fn test_patch_dataset_sends_only_given_fields() {
        let fields = ResourceFields {
            description: "  ".to_string(),
            location: String::new(),
            storage_billing_model: String::new(),
            label: Some(vec![kv("env", "test")]),
            ..Default::default()
        };
        let dataset = fields.dataset("p1", "ds1", WriteMethod::Patch);
        assert_eq!(
            json!({
                "datasetReference": {"datasetId": "ds1", "projectId": "p1"},
                "labels": {"env": "test"},
                "isCaseInsensitive": false
            }),
            serde_json::to_value(&dataset).unwrap()
        );
    }

    #[test]
    fn test_patch_dataset_all_fields() {
        let fields = ResourceFields {
            description: "desc".to_string(),
            friendly_name: "friendly".to_string(),
            is_case_insensitive: true,
            max_time_travel_hours: 48,
            access: Some(vec![AccessEntry {
                role: "READER".to_string(),
                user_by_email: "a@example.com".to_string(),
            }]),
            tag: Some(vec![kv("123/env", "prod")]),
            set_encryption_configuration: true,
            kms_key_name: "projects/p1/locations/eu/keyRings/r/cryptoKeys/k".to_string(),
            ..Default::default()
        };
        let dataset = fields.dataset("p1", "ds1", WriteMethod::Patch);
        assert_eq!(
            json!({
                "datasetReference": {"datasetId": "ds1", "projectId": "p1"},
                "friendlyName": "friendly",
                "description": "desc",
                "access": [{"role": "READER", "userByEmail": "a@example.com"}],
                "location": "EU",
                "defaultEncryptionConfiguration": {"kmsKeyName": "projects/p1/locations/eu/keyRings/r/cryptoKeys/k"},
                "isCaseInsensitive": true,
                "maxTimeTravelHours": 48,
                "storageBillingModel": "LOGICAL",
                "tags": [{"tagKey": "123/env", "tagValue": "prod"}]
            }),
            serde_json::to_value(&dataset).unwrap()
        );
    }

    #[test]
    fn test_update_dataset_resets_collections() {
        let dataset = ResourceFields::default().dataset("p1", "ds1", WriteMethod::Update);
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json!({}), value["labels"]);
        assert_eq!(json!([]), value["access"]);
        assert_eq!(json!([]), value["tags"]);

        let dataset = ResourceFields::default().dataset("p1", "ds1", WriteMethod::Insert);
        assert_eq!(None, dataset.labels);
        assert_eq!(None, dataset.access);
        assert_eq!(None, dataset.tags);
    }

    #[test]
    fn test_table_schema_and_range_partitioning() {
        let fields = ResourceFields {
            table_schema: Some(vec![
                SchemaField {
                    name: "id".to_string(),
                    field_type: "integer".to_string(),
                },
                SchemaField {
                    name: "name".to_string(),
                    field_type: "string".to_string(),
                },
            ]),
            partition: Partition::RangePartitioning,
            range_field: "id".to_string(),
            range_start: 0,
            range_end: 100,
            range_interval: 10,
            ..Default::default()
        };
        let table = fields.table("p1", "ds1", "t1", WriteMethod::Patch);
        assert_eq!(
            json!({
                "tableReference": {"projectId": "p1", "datasetId": "ds1", "tableId": "t1"},
                "schema": {"fields": [{"name": "id", "type": "INTEGER"}, {"name": "name", "type": "STRING"}]},
                "rangePartitioning": {"field": "ID", "range": {"start": 0, "end": 100, "interval": 10}},
                "location": "EU"
            }),
            serde_json::to_value(&table).unwrap()
        );
    }

    #[test]
    fn test_table_time_partitioning() {
        let fields = ResourceFields {
            partition: Partition::TimePartitioning,
            time_partition_type: TimePartitionType::Month,
            time_field: "created".to_string(),
            time_require_partition_filter: true,
            require_partition_filter: true,
            ..Default::default()
        };
        let table = fields.table("p1", "ds1", "t1", WriteMethod::Patch);
        assert_eq!(Some(true), table.require_partition_filter);
        assert_eq!(None, table.range_partitioning);
        assert_eq!(
            json!({"type": "MONTH", "field": "created", "requirePartitionFilter": true}),
            serde_json::to_value(table.time_partitioning.unwrap()).unwrap()
        );

        let fields = ResourceFields {
            partition: Partition::TimePartitioning,
            expiration_ms: 3_600_000,
            ..Default::default()
        };
        let table = fields.table("p1", "ds1", "t1", WriteMethod::Update);
        assert_eq!(Some(false), table.require_partition_filter);
        assert_eq!(Some(json!({"fields": []})), table.schema.map(|s| serde_json::to_value(s).unwrap()));
        assert_eq!(Some(3_600_000), table.time_partitioning.unwrap().expiration_ms);
    }

    #[test]
    fn test_table_without_partition() {
        let table = ResourceFields::default().table("p1", "ds1", "t1", WriteMethod::Patch);
        assert_eq!(None, table.time_partitioning);
        assert_eq!(None, table.range_partitioning);
        assert_eq!(None, table.require_partition_filter);
    }

    #[test]
    fn test_routine() {
        let fields = ResourceFields {
            definition_body: "x * 2".to_string(),
            language: "SQL".to_string(),
            return_type: "int64".to_string(),
            determinism_level: DeterminismLevel::Deterministic,
            argument: Some(vec![ArgumentParameter {
                name: "x".to_string(),
                data_type: "int64".to_string(),
                argument_kind: ArgumentKind::FixedType,
                ..Default::default()
            }]),
            ..Default::default()
        };
        let reference = RoutineReference {
            project_id: "p1".to_string(),
            dataset_id: "ds1".to_string(),
            routine_id: "double".to_string(),
        };
        let routine = fields.routine(reference.clone(), WriteMethod::Update);
        assert_eq!(
            json!({
                "routineReference": {"projectId": "p1", "datasetId": "ds1", "routineId": "double"},
                "routineType": "SCALAR_FUNCTION",
                "language": "SQL",
                "arguments": [{"name": "x", "argumentKind": "FIXED_TYPE", "dataType": {"typeKind": "INT64"}}],
                "returnType": {"typeKind": "INT64"},
                "importedLibraries": [],
                "definitionBody": "x * 2",
                "determinismLevel": "DETERMINISTIC",
                "strictMode": true
            }),
            serde_json::to_value(&routine).unwrap()
        );

        let routine = ResourceFields::default().routine(reference, WriteMethod::Insert);
        assert_eq!(None, routine.arguments);
        assert_eq!(None, routine.return_type);
        assert_eq!(None, routine.remote_function_options);
    }

    #[test]
    fn test_routine_remote_function_options() {
        let fields = ResourceFields {
            set_remote_function_parameters: true,
            remote_connection: "projects/p1/locations/eu/connections/c".to_string(),
            remote_endpoint: "https://example.com/fn".to_string(),
            remote_max_batching_rows: 50,
            remote_user_defined_context: Some(vec![kv("mode", "fast")]),
            ..Default::default()
        };
        let routine = fields.routine(RoutineReference::default(), WriteMethod::Update);
        assert_eq!(
            json!({
                "endpoint": "https://example.com/fn",
                "connection": "projects/p1/locations/eu/connections/c",
                "userDefinedContext": {"mode": "fast"},
                "maxBatchingRows": 50
            }),
            serde_json::to_value(routine.remote_function_options.unwrap()).unwrap()
        );
    }
}
