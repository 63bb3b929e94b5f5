use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::dataset::Dataset;

pub fn build(base_url: &str, client: &Client, project_id: &str, data: &Dataset) -> RequestBuilder {
    let url = format!("{}/projects/{}/datasets", base_url, project_id);
    client.post(url).json(data)
}
