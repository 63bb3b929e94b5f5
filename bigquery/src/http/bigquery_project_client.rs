use std::sync::Arc;

use crate::http::bigquery_client::BigqueryClient;
use crate::http::error::Error;
use crate::http::project;
use crate::http::project::list::{ListProjectsRequest, ProjectList, ProjectOverview};

#[derive(Debug, Clone)]
pub struct BigqueryProjectClient {
    inner: Arc<BigqueryClient>,
}

impl BigqueryProjectClient {
    pub fn new(inner: Arc<BigqueryClient>) -> Self {
        Self { inner }
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(&self, req: Option<&ListProjectsRequest>) -> Result<Vec<ProjectOverview>, Error> {
        let mut page_token: Option<String> = None;
        let mut projects = vec![];
        loop {
            let builder = project::list::build(self.inner.endpoint(), self.inner.http(), req, page_token);
            let response: ProjectList = self.inner.send(builder).await?;
            projects.extend(response.projects);
            if response.next_page_token.is_none() {
                break;
            }
            page_token = response.next_page_token;
        }
        Ok(projects)
    }
}

#[cfg(test)]
mod test {
    use crate::http::bigquery_client::test::{create_client, request};
    use crate::http::project;

    #[test]
    fn test_list_request() {
        let client = create_client("http://localhost:9050/bigquery/v2/");
        let req = request(project::list::build(
            client.endpoint(),
            client.http(),
            None,
            Some("next".to_string()),
        ));
        assert_eq!("http://localhost:9050/bigquery/v2/projects?pageToken=next", req.url().as_str());
    }
}
