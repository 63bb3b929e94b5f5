use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::job::get::GetJobRequest;

/// Deletes the metadata of a finished job.
pub fn build(base_url: &str, client: &Client, project_id: &str, job_id: &str, data: &GetJobRequest) -> RequestBuilder {
    let url = format!("{}/projects/{}/jobs/{}/delete", base_url, project_id, job_id);
    client.delete(url).query(data)
}
