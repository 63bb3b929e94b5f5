//! Partially updates a dataset or table. Only submitted fields are replaced.
use tokio_util::sync::CancellationToken;

use crate::task::resource::{ResourceFields, WriteMethod};
use crate::task::{connect, required, run, Credentials, Error, Options, Outcome, TaskError};

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum Resource {
    #[default]
    Dataset,
    Table,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub base_uri: String,
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    pub resource: Resource,
    #[serde(flatten)]
    pub fields: ResourceFields,
}

pub async fn patch_resource(
    connection: &Connection,
    input: &Input,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<Outcome, TaskError> {
    run(options.throw_on_error, cancel, patch(connection, input)).await
}

async fn patch(connection: &Connection, input: &Input) -> Result<Outcome, Error> {
    let project_id = required(&connection.project_id, "ProjectId")?;
    let dataset_id = required(&connection.dataset_id, "DatasetId")?;
    match input.resource {
        Resource::Dataset => {
            let dataset = input.fields.dataset(project_id, dataset_id, WriteMethod::Patch);
            let client = connect(&connection.base_uri, &connection.credentials).await?;
            client.dataset().patch(project_id, dataset_id, &dataset).await?;
        }
        Resource::Table => {
            let table_id = required(&connection.table_id, "TableId")?;
            let table = input.fields.table(project_id, dataset_id, table_id, WriteMethod::Patch);
            let client = connect(&connection.base_uri, &connection.credentials).await?;
            client.table().patch(&table).await?;
        }
    }
    Ok(Outcome::ok())
}

#[cfg(test)]
mod test {
    use tokio_util::sync::CancellationToken;

    use crate::task::patch_resource::{patch_resource, Connection, Input, Resource};
    use crate::task::resource::Partition;
    use crate::task::test::{credentials, invalid_credentials};
    use crate::task::Options;

    fn connection() -> Connection {
        Connection {
            project_id: "p1".to_string(),
            dataset_id: "ds1".to_string(),
            credentials: credentials(),
            ..Default::default()
        }
    }

    #[test]
    fn test_input() {
        let input: Input = serde_json::from_str(
            r#"{"resource": "Table", "partition": "RangePartitioning", "rangeField": "id", "rangeEnd": 10}"#,
        )
        .unwrap();
        assert_eq!(Resource::Table, input.resource);
        assert_eq!(Partition::RangePartitioning, input.fields.partition);
        assert_eq!(10, input.fields.range_end);
    }

    #[tokio::test]
    async fn test_invalid_credentials() {
        let mut connection = connection();
        connection.credentials = invalid_credentials();
        let options = Options { throw_on_error: false };
        let outcome = patch_resource(&connection, &Input::default(), &options, &CancellationToken::new())
            .await
            .unwrap();
        assert!(!outcome.success);
        assert_eq!(
            Some("Error occured: Error creating credential from JSON or JSON parameters. Unrecognized credential type ."),
            outcome.error_message.as_deref()
        );
    }

    #[tokio::test]
    async fn test_missing_table_id() {
        let input = Input {
            resource: Resource::Table,
            ..Default::default()
        };
        let err = patch_resource(&connection(), &input, &Options::default(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!("Error occured: TableId is required.", err.to_string());
    }

    #[tokio::test]
    async fn test_token_failure() {
        let err = patch_resource(&connection(), &Input::default(), &Options::default(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Error occured: token source failed: "), "{err}");
    }
}
