use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::routine::Routine;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListRoutinesRequest {
    /// The maximum number of results to return in a single response page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// If set, then only the Routines matching this filter are returned.
    /// The supported format is routineType:{RoutineType}, where {RoutineType} is a RoutineType enum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListRoutinesResponse {
    /// Routines in the requested dataset. Unless readMask is set in the request,
    /// only the following fields are populated: etag, projectId, datasetId, routineId,
    /// routineType, creationTime, lastModifiedTime, language, and remoteFunctionOptions.
    #[serde(default)]
    pub routines: Vec<Routine>,
    /// A token to request the next page of results.
    pub next_page_token: Option<String>,
}

pub fn build(
    base_url: &str,
    client: &Client,
    project_id: &str,
    dataset_id: &str,
    req: Option<&ListRoutinesRequest>,
    page_token: Option<String>,
) -> RequestBuilder {
    let url = format!("{}/projects/{}/datasets/{}/routines", base_url, project_id, dataset_id);
    let mut builder = client.get(url);
    builder = if let Some(req) = req { builder.query(req) } else { builder };
    if let Some(page_token) = page_token {
        builder.query(&[("pageToken", page_token.as_str())])
    } else {
        builder
    }
}
