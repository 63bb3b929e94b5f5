use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::job::{JobReference, JobStatus};

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StateFilter {
    #[default]
    Done,
    Pending,
    Running,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsRequest {
    /// Whether to display jobs owned by all users in the project. Default False.
    pub all_users: bool,
    /// The maximum number of results to return in a single response page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Filter for job state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_filter: Option<StateFilter>,
    /// If set, show only child jobs of the specified parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_job_id: Option<String>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobOverview {
    /// Unique opaque ID of the job.
    pub id: String,
    /// Unique opaque ID of the job.
    pub job_reference: JobReference,
    /// Running state of the job. When the state is DONE, errorResult can be checked to determine
    /// whether the job succeeded or failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsResponse {
    /// List of jobs that were requested.
    #[serde(default)]
    pub jobs: Vec<JobOverview>,
    /// A token to request the next page of results.
    pub next_page_token: Option<String>,
}

pub fn build(
    base_url: &str,
    client: &Client,
    project_id: &str,
    data: &ListJobsRequest,
    page_token: Option<String>,
) -> RequestBuilder {
    let url = format!("{}/projects/{}/jobs", base_url, project_id);
    let builder = client.get(url).query(data);
    if let Some(page_token) = page_token {
        builder.query(&[("pageToken", page_token.as_str())])
    } else {
        builder
    }
}
