use std::sync::Arc;

use crate::http::bigquery_client::BigqueryClient;
use crate::http::error::Error;
use crate::http::model;
use crate::http::model::list::{ListModelsRequest, ListModelsResponse};
use crate::http::model::Model;

#[derive(Debug, Clone)]
pub struct BigqueryModelClient {
    inner: Arc<BigqueryClient>,
}

impl BigqueryModelClient {
    pub fn new(inner: Arc<BigqueryClient>) -> Self {
        Self { inner }
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete(&self, project_id: &str, dataset_id: &str, model_id: &str) -> Result<(), Error> {
        let builder = model::delete::build(self.inner.endpoint(), self.inner.http(), project_id, dataset_id, model_id);
        self.inner.send_get_empty(builder).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, project_id: &str, dataset_id: &str, model_id: &str) -> Result<Model, Error> {
        let builder = model::get::build(self.inner.endpoint(), self.inner.http(), project_id, dataset_id, model_id);
        self.inner.send(builder).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(
        &self,
        project_id: &str,
        dataset_id: &str,
        req: Option<&ListModelsRequest>,
    ) -> Result<Vec<Model>, Error> {
        let mut page_token: Option<String> = None;
        let mut models = vec![];
        loop {
            let builder = model::list::build(
                self.inner.endpoint(),
                self.inner.http(),
                project_id,
                dataset_id,
                req,
                page_token,
            );
            let response: ListModelsResponse = self.inner.send(builder).await?;
            models.extend(response.models);
            if response.next_page_token.is_none() {
                break;
            }
            page_token = response.next_page_token;
        }
        Ok(models)
    }
}

#[cfg(test)]
mod test {
    use reqwest::Method;

    use crate::http::bigquery_client::test::{create_client, request};
    use crate::http::model;
    use crate::http::model::list::ListModelsRequest;

    const BASE: &str = "https://bigquery.googleapis.com/bigquery/v2";

    #[test]
    fn test_model_requests() {
        let client = create_client(BASE);
        let req = request(model::get::build(client.endpoint(), client.http(), "p1", "ds1", "m1"));
        assert_eq!(Method::GET, req.method());
        assert_eq!(format!("{BASE}/projects/p1/datasets/ds1/models/m1"), req.url().as_str());

        let req = request(model::delete::build(client.endpoint(), client.http(), "p1", "ds1", "m1"));
        assert_eq!(Method::DELETE, req.method());

        let list_req = ListModelsRequest { max_results: Some(5) };
        let req = request(model::list::build(
            client.endpoint(),
            client.http(),
            "p1",
            "ds1",
            Some(&list_req),
            None,
        ));
        assert_eq!(
            format!("{BASE}/projects/p1/datasets/ds1/models?maxResults=5"),
            req.url().as_str()
        );
    }
}
