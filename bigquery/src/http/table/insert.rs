use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::table::Table;

pub fn build(base_url: &str, client: &Client, project_id: &str, dataset_id: &str, data: &Table) -> RequestBuilder {
    let url = format!("{}/projects/{}/datasets/{}/tables", base_url, project_id, dataset_id);
    client.post(url).json(data)
}
