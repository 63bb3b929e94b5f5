//! Replaces a dataset, routine or table. Fields left out are reset.
use tokio_util::sync::CancellationToken;

use crate::http::routine::RoutineReference;
use crate::task::resource::{ResourceFields, WriteMethod};
use crate::task::{connect, required, run, Credentials, Error, Options, Outcome, TaskError};

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum Resource {
    Dataset,
    Routine,
    #[default]
    Table,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub base_uri: String,
    pub resource: Resource,
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    pub routine_id: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    #[serde(flatten)]
    pub fields: ResourceFields,
}

pub async fn update_resource(
    connection: &Connection,
    input: &Input,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<Outcome, TaskError> {
    run(options.throw_on_error, cancel, update(connection, input)).await
}

async fn update(connection: &Connection, input: &Input) -> Result<Outcome, Error> {
    let project_id = required(&connection.project_id, "ProjectId")?;
    let dataset_id = required(&connection.dataset_id, "DatasetId")?;
    match connection.resource {
        Resource::Dataset => {
            let dataset = input.fields.dataset(project_id, dataset_id, WriteMethod::Update);
            let client = connect(&connection.base_uri, &connection.credentials).await?;
            client.dataset().update(project_id, dataset_id, &dataset).await?;
        }
        Resource::Routine => {
            let routine_id = required(&connection.routine_id, "RoutineId")?;
            let reference = RoutineReference {
                project_id: project_id.to_string(),
                dataset_id: dataset_id.to_string(),
                routine_id: routine_id.to_string(),
            };
            let routine = input.fields.routine(reference, WriteMethod::Update);
            let client = connect(&connection.base_uri, &connection.credentials).await?;
            client.routine().update(&routine).await?;
        }
        Resource::Table => {
            let table_id = required(&connection.table_id, "TableId")?;
            let table = input.fields.table(project_id, dataset_id, table_id, WriteMethod::Update);
            let client = connect(&connection.base_uri, &connection.credentials).await?;
            client.table().update(&table).await?;
        }
    }
    Ok(Outcome::ok())
}

#[cfg(test)]
mod test {
    use tokio_util::sync::CancellationToken;

    use crate::task::test::{credentials, invalid_credentials};
    use crate::task::update_resource::{update_resource, Connection, Input, Resource};
    use crate::task::{Failure, Options, Outcome};

    fn connection(resource: Resource) -> Connection {
        Connection {
            resource,
            project_id: "p1".to_string(),
            dataset_id: "ds1".to_string(),
            credentials: credentials(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let connection: Connection = serde_json::from_str("{}").unwrap();
        assert_eq!(Resource::Table, connection.resource);
        let input: Input = serde_json::from_str(r#"{"strictMode": false}"#).unwrap();
        assert!(!input.fields.strict_mode);
        assert_eq!("LOGICAL", input.fields.storage_billing_model);
    }

    #[tokio::test]
    async fn test_invalid_credentials() {
        let mut connection = connection(Resource::Dataset);
        connection.credentials = invalid_credentials();
        let err = update_resource(&connection, &Input::default(), &Options::default(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(
            "Error occured: Error creating credential from JSON or JSON parameters. Unrecognized credential type .",
            err.to_string()
        );
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let options = Options { throw_on_error: false };
        let outcome = update_resource(&connection(Resource::Routine), &Input::default(), &options, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(Outcome::failure("Error occured: RoutineId is required.".to_string()), outcome);

        let outcome = update_resource(&connection(Resource::Table), &Input::default(), &options, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(Outcome::failure("Error occured: TableId is required.".to_string()), outcome);
    }

    #[tokio::test]
    async fn test_canceled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let options = Options { throw_on_error: false };
        let outcome = update_resource(&connection(Resource::Dataset), &Input::default(), &options, &cancel)
            .await
            .unwrap();
        assert_eq!(Outcome::failure("Error occured: The operation was canceled.".to_string()), outcome);
    }
}
