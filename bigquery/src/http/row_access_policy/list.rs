use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::row_access_policy::RowAccessPolicy;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListRowAccessPoliciesRequest {
    /// The maximum number of results to return in a single response page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListRowAccessPoliciesResponse {
    /// Row access policies on the requested table.
    #[serde(default)]
    pub row_access_policies: Vec<RowAccessPolicy>,
    /// A token to request the next page of results.
    pub next_page_token: Option<String>,
}

pub fn build(
    base_url: &str,
    client: &Client,
    project_id: &str,
    dataset_id: &str,
    table_id: &str,
    req: Option<&ListRowAccessPoliciesRequest>,
    page_token: Option<String>,
) -> RequestBuilder {
    let url = format!(
        "{}/projects/{}/datasets/{}/tables/{}/rowAccessPolicies",
        base_url, project_id, dataset_id, table_id
    );
    let mut builder = client.get(url);
    builder = if let Some(req) = req { builder.query(req) } else { builder };
    if let Some(page_token) = page_token {
        builder.query(&[("pageToken", page_token.as_str())])
    } else {
        builder
    }
}
