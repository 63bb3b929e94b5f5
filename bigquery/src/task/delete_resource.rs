//! Deletes a dataset, job, model, routine or table.
use tokio_util::sync::CancellationToken;

use crate::http::job::get::GetJobRequest;
use crate::task::{connect, required, run, Credentials, Error, Options, Outcome, TaskError};

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum Resource {
    Dataset,
    Job,
    Model,
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
    pub job_id: String,
    pub model_id: String,
    pub routine_id: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

pub async fn delete_resource(
    connection: &Connection,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<Outcome, TaskError> {
    run(options.throw_on_error, cancel, delete(connection)).await
}

async fn delete(connection: &Connection) -> Result<Outcome, Error> {
    let project_id = required(&connection.project_id, "ProjectId")?;
    // jobs are addressed by project only
    let dataset_id = match connection.resource {
        Resource::Job => "",
        _ => required(&connection.dataset_id, "DatasetId")?,
    };
    let client = connect(&connection.base_uri, &connection.credentials).await?;
    match connection.resource {
        Resource::Dataset => client.dataset().delete(project_id, dataset_id).await?,
        Resource::Job => {
            let job_id = required(&connection.job_id, "JobId")?;
            client.job().delete(project_id, job_id, &GetJobRequest::default()).await?
        }
        Resource::Model => {
            let model_id = required(&connection.model_id, "ModelId")?;
            client.model().delete(project_id, dataset_id, model_id).await?
        }
        Resource::Routine => {
            let routine_id = required(&connection.routine_id, "RoutineId")?;
            client.routine().delete(project_id, dataset_id, routine_id).await?
        }
        Resource::Table => {
            let table_id = required(&connection.table_id, "TableId")?;
            client.table().delete(project_id, dataset_id, table_id).await?
        }
    }
    tracing::debug!("deleted {:?} in {}", connection.resource, project_id);
    Ok(Outcome::ok())
}
