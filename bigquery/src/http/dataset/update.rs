use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::dataset::Dataset;

/// Replaces the whole dataset resource.
pub fn build(base_url: &str, client: &Client, project_id: &str, dataset_id: &str, data: &Dataset) -> RequestBuilder {
    let url = format!("{}/projects/{}/datasets/{}", base_url, project_id, dataset_id);
    let mut builder = client.put(url);
    if let Some(etag) = &data.etag {
        builder = builder.header("If-Match", etag.as_str())
    }
    builder.json(data)
}
