//! Creates a dataset, table or routine.
use tokio_util::sync::CancellationToken;

use crate::http::routine::RoutineReference;
use crate::task::resource::{ResourceFields, WriteMethod};
use crate::task::{connect, required, run, Credentials, Error, Options, TaskError, UrlOutcome};

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum Resource {
    #[default]
    Dataset,
    Table,
    Routine,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    /// Blank selects the public endpoint.
    pub base_uri: String,
    pub project_id: String,
    /// Dataset of a new table or routine.
    pub dataset_id: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    pub resource: Resource,
    /// Id of a new dataset. Falls back to the connection's dataset.
    pub dataset_id: String,
    pub table_id: String,
    pub routine_id: String,
    #[serde(flatten)]
    pub fields: ResourceFields,
}

/// Creates the resource and reports where it can be fetched.
pub async fn create_resource(
    connection: &Connection,
    input: &Input,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<UrlOutcome, TaskError> {
    run(options.throw_on_error, cancel, create(connection, input)).await
}

async fn create(connection: &Connection, input: &Input) -> Result<UrlOutcome, Error> {
    let project_id = required(&connection.project_id, "ProjectId")?;
    let url = match input.resource {
        Resource::Dataset => {
            let dataset_id = match input.dataset_id.trim() {
                "" => required(&connection.dataset_id, "DatasetId")?,
                id => id,
            };
            let dataset = input.fields.dataset(project_id, dataset_id, WriteMethod::Insert);
            let client = connect(&connection.base_uri, &connection.credentials).await?;
            client.dataset().create(project_id, &dataset).await?.self_link
        }
        Resource::Table => {
            let dataset_id = required(&connection.dataset_id, "DatasetId")?;
            let table_id = required(&input.table_id, "TableId")?;
            let table = input.fields.table(project_id, dataset_id, table_id, WriteMethod::Insert);
            let client = connect(&connection.base_uri, &connection.credentials).await?;
            client.table().create(&table).await?.self_link
        }
        Resource::Routine => {
            let dataset_id = required(&connection.dataset_id, "DatasetId")?;
            let routine_id = required(&input.routine_id, "RoutineId")?;
            let reference = RoutineReference {
                project_id: project_id.to_string(),
                dataset_id: dataset_id.to_string(),
                routine_id: routine_id.to_string(),
            };
            let routine = input.fields.routine(reference, WriteMethod::Insert);
            let client = connect(&connection.base_uri, &connection.credentials).await?;
            client.routine().create(&routine).await?;
            Some(format!(
                "{}/projects/{}/datasets/{}/routines/{}",
                client.endpoint(),
                project_id,
                dataset_id,
                routine_id
            ))
        }
    };
    tracing::debug!("created {:?} {:?}", input.resource, url);
    Ok(UrlOutcome::ok(url))
}
