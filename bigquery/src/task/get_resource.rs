//! Fetches a single dataset, job, model, routine or table.
use tokio_util::sync::CancellationToken;

use crate::http::job::get::GetJobRequest;
use crate::http::routine::get::GetRoutineRequest;
use crate::http::table::get::{GetTableRequest, TableMetadataView};
use crate::task::{connect, required, run, Credentials, DataOutcome, Error, Options, TaskError};

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum Resource {
    Datasets,
    Jobs,
    Models,
    Routines,
    #[default]
    Tables,
}

/// Amount of table metadata returned.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub enum View {
    Full,
    Basic,
    #[default]
    Storagestats,
    Tablemetadataviewunspecified,
}

impl From<View> for TableMetadataView {
    fn from(view: View) -> Self {
        match view {
            View::Full => TableMetadataView::Full,
            View::Basic => TableMetadataView::Basic,
            View::Storagestats => TableMetadataView::StorageStats,
            View::Tablemetadataviewunspecified => TableMetadataView::TableMetadataViewUnspecified,
        }
    }
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
    /// Routine fields to return, e.g. `routineReference,language`.
    pub read_mask: String,
    /// Table columns to return, comma separated.
    pub selected_fields: String,
    pub view: View,
    #[serde(flatten)]
    pub credentials: Credentials,
}

pub async fn get_resource(
    connection: &Connection,
    options: &Options,
    cancel: &CancellationToken,
) -> Result<DataOutcome, TaskError> {
    run(options.throw_on_error, cancel, get(connection)).await
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

async fn get(connection: &Connection) -> Result<DataOutcome, Error> {
    let project_id = required(&connection.project_id, "ProjectId")?;
    let dataset_id = match connection.resource {
        Resource::Jobs => "",
        _ => required(&connection.dataset_id, "DatasetId")?,
    };
    let client = connect(&connection.base_uri, &connection.credentials).await?;
    let data = match connection.resource {
        Resource::Datasets => serde_json::to_value(client.dataset().get(project_id, dataset_id).await?)?,
        Resource::Jobs => {
            let job_id = required(&connection.job_id, "JobId")?;
            serde_json::to_value(client.job().get(project_id, job_id, &GetJobRequest::default()).await?)?
        }
        Resource::Models => {
            let model_id = required(&connection.model_id, "ModelId")?;
            serde_json::to_value(client.model().get(project_id, dataset_id, model_id).await?)?
        }
        Resource::Routines => {
            let routine_id = required(&connection.routine_id, "RoutineId")?;
            let req = GetRoutineRequest {
                read_mask: optional(&connection.read_mask),
            };
            serde_json::to_value(client.routine().get(project_id, dataset_id, routine_id, Some(&req)).await?)?
        }
        Resource::Tables => {
            let table_id = required(&connection.table_id, "TableId")?;
            let req = GetTableRequest {
                selected_fields: optional(&connection.selected_fields),
                view: Some(connection.view.into()),
            };
            serde_json::to_value(client.table().get(project_id, dataset_id, table_id, Some(&req)).await?)?
        }
    };
    Ok(DataOutcome::ok(data))
}
