use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::project::ProjectReference;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsRequest {
    /// The maximum number of results to return in a single response page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    /// An opaque ID of this project.
    pub id: String,
    /// A unique reference to this project.
    pub project_reference: ProjectReference,
    /// A descriptive name for this project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectList {
    /// Projects to which the user has at least READ access.
    #[serde(default)]
    pub projects: Vec<ProjectOverview>,
    /// Use this token to request the next page of results.
    pub next_page_token: Option<String>,
}

pub fn build(
    base_url: &str,
    client: &Client,
    req: Option<&ListProjectsRequest>,
    page_token: Option<String>,
) -> RequestBuilder {
    let url = format!("{}/projects", base_url);
    let mut builder = client.get(url);
    builder = if let Some(req) = req { builder.query(req) } else { builder };
    if let Some(page_token) = page_token {
        builder.query(&[("pageToken", page_token.as_str())])
    } else {
        builder
    }
}
