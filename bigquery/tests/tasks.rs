//! Runs the tasks against a real project.
//!
//! Needs `BIGQUERY_SECRET_JSON` (service account key) and `BIGQUERY_PROJECT_ID`.
//! `cargo test -- --ignored` to run.
use serde_json::json;
use serial_test::serial;
use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;

use bigquery_tasks::task::execute_query::{self, DbType, Parameter, QueryOptions};
use bigquery_tasks::task::resource::{ResourceFields, SchemaField};
use bigquery_tasks::task::{
    create_resource, delete_resource, get_resource, insert, list_resource, patch_resource, update_resource,
    Credentials, Options, ReadJsonMethod,
};

#[ctor::ctor]
fn init() {
    let filter = tracing_subscriber::filter::EnvFilter::from_default_env()
        .add_directive("bigquery_tasks=trace".parse().unwrap());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn credentials() -> Credentials {
    Credentials {
        read_json_method: ReadJsonMethod::Json,
        secret_json: std::env::var("BIGQUERY_SECRET_JSON").unwrap(),
        ..Default::default()
    }
}

fn project_id() -> String {
    std::env::var("BIGQUERY_PROJECT_ID").unwrap()
}

fn dataset_id() -> String {
    format!("bqtasks_{}", OffsetDateTime::now_utc().unix_timestamp())
}

async fn create_dataset(dataset_id: &str) {
    let connection = create_resource::Connection {
        project_id: project_id(),
        credentials: credentials(),
        ..Default::default()
    };
    let input = create_resource::Input {
        resource: create_resource::Resource::Dataset,
        dataset_id: dataset_id.to_string(),
        fields: ResourceFields {
            description: "created by live test".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let outcome = create_resource::create_resource(&connection, &input, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.success);
    assert!(outcome.url.unwrap().contains(dataset_id));
}

async fn create_table(dataset_id: &str, table_id: &str) {
    let connection = create_resource::Connection {
        project_id: project_id(),
        dataset_id: dataset_id.to_string(),
        credentials: credentials(),
        ..Default::default()
    };
    let input = create_resource::Input {
        resource: create_resource::Resource::Table,
        table_id: table_id.to_string(),
        fields: ResourceFields {
            table_schema: Some(vec![
                SchemaField {
                    name: "id".to_string(),
                    field_type: "INT64".to_string(),
                },
                SchemaField {
                    name: "name".to_string(),
                    field_type: "STRING".to_string(),
                },
            ]),
            ..Default::default()
        },
        ..Default::default()
    };
    let outcome = create_resource::create_resource(&connection, &input, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.success);
}

async fn delete_dataset(dataset_id: &str) {
    let connection = delete_resource::Connection {
        resource: delete_resource::Resource::Dataset,
        project_id: project_id(),
        dataset_id: dataset_id.to_string(),
        credentials: credentials(),
        ..Default::default()
    };
    let options = Options { throw_on_error: false };
    let _ = delete_resource::delete_resource(&connection, &options, &CancellationToken::new()).await;
}

#[tokio::test]
#[serial]
#[ignore]
async fn test_dataset_lifecycle() {
    let dataset_id = dataset_id();
    create_dataset(&dataset_id).await;

    let connection = patch_resource::Connection {
        project_id: project_id(),
        dataset_id: dataset_id.clone(),
        credentials: credentials(),
        ..Default::default()
    };
    let input = patch_resource::Input {
        resource: patch_resource::Resource::Dataset,
        fields: ResourceFields {
            friendly_name: "patched".to_string(),
            ..Default::default()
        },
    };
    let outcome = patch_resource::patch_resource(&connection, &input, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.success);

    let connection = get_resource::Connection {
        resource: get_resource::Resource::Datasets,
        project_id: project_id(),
        dataset_id: dataset_id.clone(),
        credentials: credentials(),
        ..Default::default()
    };
    let outcome = get_resource::get_resource(&connection, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();
    let data = outcome.data.unwrap();
    assert_eq!(json!("patched"), data["friendlyName"]);
    assert_eq!(json!("created by live test"), data["description"]);

    let connection = list_resource::Connection {
        resource: list_resource::Resource::Datasets,
        project_id: project_id(),
        credentials: credentials(),
        ..Default::default()
    };
    let outcome = list_resource::list_resource(&connection, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();
    let data = outcome.data.unwrap();
    assert!(data.to_string().contains(&dataset_id));

    delete_dataset(&dataset_id).await;
}

#[tokio::test]
#[serial]
#[ignore]
async fn test_table_insert_and_query() {
    let dataset_id = dataset_id();
    create_dataset(&dataset_id).await;
    create_table(&dataset_id, "users").await;

    let connection = insert::Connection {
        project_id: project_id(),
        dataset_id: dataset_id.clone(),
        table_id: "users".to_string(),
        credentials: credentials(),
        ..Default::default()
    };
    let input = insert::Input {
        csv: "id,name\n1,Alice\n2,Bob".to_string(),
        ..Default::default()
    };
    let outcome = insert::insert(&connection, &input, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.success);

    // Unknown columns are reported through insertErrors.
    let input = insert::Input {
        source_format: insert::SourceFormat::Json,
        json: r#"[{"id": 3, "unknown": "x"}]"#.to_string(),
        ..Default::default()
    };
    let options = Options { throw_on_error: false };
    let outcome = insert::insert(&connection, &input, &options, &CancellationToken::new())
        .await
        .unwrap();
    assert!(!outcome.success);

    let connection = execute_query::Connection {
        project_id: project_id(),
        dataset_id: dataset_id.clone(),
        credentials: credentials(),
        ..Default::default()
    };
    let input = execute_query::Input {
        query: "SELECT id, name FROM users WHERE id >= @min ORDER BY id".to_string(),
        parameters: vec![Parameter {
            name: "min".to_string(),
            db_type: DbType::Int64,
            value: json!(1),
        }],
    };
    let options = QueryOptions {
        max_retry_attempts: 2,
        delay: 1,
        ..Default::default()
    };
    let outcome = execute_query::execute_query(&connection, &input, &options, &CancellationToken::new())
        .await
        .unwrap();
    // Streamed rows can take a moment to become visible; only the shape is asserted.
    assert!(outcome.success);
    assert!(outcome.data.unwrap().is_array());

    let connection = update_resource::Connection {
        resource: update_resource::Resource::Table,
        project_id: project_id(),
        dataset_id: dataset_id.clone(),
        table_id: "users".to_string(),
        credentials: credentials(),
        ..Default::default()
    };
    let input = update_resource::Input {
        fields: ResourceFields {
            description: "updated".to_string(),
            table_schema: Some(vec![
                SchemaField {
                    name: "id".to_string(),
                    field_type: "INT64".to_string(),
                },
                SchemaField {
                    name: "name".to_string(),
                    field_type: "STRING".to_string(),
                },
            ]),
            ..Default::default()
        },
    };
    let outcome = update_resource::update_resource(&connection, &input, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.success);

    let connection = delete_resource::Connection {
        resource: delete_resource::Resource::Table,
        project_id: project_id(),
        dataset_id: dataset_id.clone(),
        table_id: "users".to_string(),
        credentials: credentials(),
        ..Default::default()
    };
    let outcome = delete_resource::delete_resource(&connection, &Options::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.success);

    delete_dataset(&dataset_id).await;
}
