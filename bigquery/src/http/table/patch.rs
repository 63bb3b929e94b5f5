use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::table::Table;

pub fn build(base_url: &str, client: &Client, data: &Table) -> RequestBuilder {
    let url = format!(
        "{}/projects/{}/datasets/{}/tables/{}",
        base_url,
        data.table_reference.project_id.as_str(),
        data.table_reference.dataset_id.as_str(),
        data.table_reference.table_id.as_str()
    );
    let mut builder = client.patch(url);
    if let Some(etag) = &data.etag {
        builder = builder.header("If-Match", etag.as_str())
    }
    builder.json(data)
}
