use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetRoutineRequest {
    /// If set, only the Routine fields in the field mask are returned in the response.
    /// This is a comma-separated list of fully qualified names of fields. Example: "routineReference,language".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_mask: Option<String>,
}

pub fn build(
    base_url: &str,
    client: &Client,
    project_id: &str,
    dataset_id: &str,
    routine_id: &str,
    req: Option<&GetRoutineRequest>,
) -> RequestBuilder {
    let url = format!(
        "{}/projects/{}/datasets/{}/routines/{}",
        base_url, project_id, dataset_id, routine_id
    );
    let builder = client.get(url);
    if let Some(req) = req {
        builder.query(req)
    } else {
        builder
    }
}
