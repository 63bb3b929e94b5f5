//! Lists every item of a collection, following page tokens.
use tokio_util::sync::CancellationToken;

use crate::http::job::list::ListJobsRequest;
use crate::task::{connect, required, run, Credentials, DataOutcome, Error, Options, TaskError};

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum Resource {
    Datasets,
    Jobs,
    Models,
    Projects,
    Routines,
    RowAccessPolicies,
    /// Raw `{ "f": [{ "v": .. }] }` rows of a table.
    TableData,
    #[default]
    Tables,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub base_uri: String,
    pub resource: Resource,
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

pub async fn list_resource(
    connection: &Connection,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<DataOutcome, TaskError> {
    run(options.throw_on_error, cancel, list(connection)).await
}

async fn list(connection: &Connection) -> Result<DataOutcome, Error> {
    let resource = connection.resource;
    let project_id = match resource {
        Resource::Projects => "",
        _ => required(&connection.project_id, "ProjectId")?,
    };
    let dataset_id = match resource {
        Resource::Projects | Resource::Datasets | Resource::Jobs => "",
        _ => required(&connection.dataset_id, "DatasetId")?,
    };
    let table_id = match resource {
        Resource::RowAccessPolicies | Resource::TableData => required(&connection.table_id, "TableId")?,
        _ => "",
    };
    let client = connect(&connection.base_uri, &connection.credentials).await?;
    let data = match resource {
        Resource::Datasets => serde_json::to_value(client.dataset().list(project_id, None).await?)?,
        Resource::Jobs => serde_json::to_value(client.job().list(project_id, &ListJobsRequest::default()).await?)?,
        Resource::Models => serde_json::to_value(client.model().list(project_id, dataset_id, None).await?)?,
        Resource::Projects => serde_json::to_value(client.project().list(None).await?)?,
        Resource::Routines => serde_json::to_value(client.routine().list(project_id, dataset_id, None).await?)?,
        Resource::RowAccessPolicies => serde_json::to_value(
            client
                .row_access_policy()
                .list(project_id, dataset_id, table_id, None)
                .await?,
        )?,
        Resource::TableData => {
            serde_json::to_value(client.tabledata().read_all(project_id, dataset_id, table_id, None).await?)?
        }
        Resource::Tables => serde_json::to_value(client.table().list(project_id, dataset_id, None).await?)?,
    };
    tracing::debug!(
        "listed {} {:?}",
        data.as_array().map(|v| v.len()).unwrap_or_default(),
        resource
    );
    Ok(DataOutcome::ok(data))
}
