use std::sync::Arc;

use crate::http::bigquery_client::BigqueryClient;
use crate::http::error::Error;
use crate::http::routine;
use crate::http::routine::get::GetRoutineRequest;
use crate::http::routine::list::{ListRoutinesRequest, ListRoutinesResponse};
use crate::http::routine::Routine;

#[derive(Debug, Clone)]
pub struct BigqueryRoutineClient {
    inner: Arc<BigqueryClient>,
}

impl BigqueryRoutineClient {
    pub fn new(inner: Arc<BigqueryClient>) -> Self {
        Self { inner }
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create(&self, metadata: &Routine) -> Result<Routine, Error> {
        let builder = routine::insert::build(self.inner.endpoint(), self.inner.http(), metadata);
        self.inner.send(builder).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update(&self, metadata: &Routine) -> Result<Routine, Error> {
        let builder = routine::update::build(self.inner.endpoint(), self.inner.http(), metadata);
        self.inner.send(builder).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete(&self, project_id: &str, dataset_id: &str, routine_id: &str) -> Result<(), Error> {
        let builder =
            routine::delete::build(self.inner.endpoint(), self.inner.http(), project_id, dataset_id, routine_id);
        self.inner.send_get_empty(builder).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(
        &self,
        project_id: &str,
        dataset_id: &str,
        routine_id: &str,
        req: Option<&GetRoutineRequest>,
    ) -> Result<Routine, Error> {
        let builder =
            routine::get::build(self.inner.endpoint(), self.inner.http(), project_id, dataset_id, routine_id, req);
        self.inner.send(builder).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(
        &self,
        project_id: &str,
        dataset_id: &str,
        req: Option<&ListRoutinesRequest>,
    ) -> Result<Vec<Routine>, Error> {
        let mut page_token: Option<String> = None;
        let mut routines = vec![];
        loop {
            let builder = routine::list::build(
                self.inner.endpoint(),
                self.inner.http(),
                project_id,
                dataset_id,
                req,
                page_token,
            );
            let response: ListRoutinesResponse = self.inner.send(builder).await?;
            routines.extend(response.routines);
            if response.next_page_token.is_none() {
                break;
            }
            page_token = response.next_page_token;
        }
        Ok(routines)
    }
}

#[cfg(test)]
mod test {
    use reqwest::Method;

    use crate::http::bigquery_client::test::{body, create_client, request};
    use crate::http::routine;
    use crate::http::routine::get::GetRoutineRequest;
    use crate::http::routine::{Routine, RoutineReference};

    const BASE: &str = "https://bigquery.googleapis.com/bigquery/v2";

    fn routine() -> Routine {
        Routine {
            routine_reference: RoutineReference {
                project_id: "p1".to_string(),
                dataset_id: "ds1".to_string(),
                routine_id: "r1".to_string(),
            },
            routine_type: Some("SCALAR_FUNCTION".to_string()),
            definition_body: Some("x * 2".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_and_update_request() {
        let client = create_client(BASE);
        let r = routine();
        let req = request(routine::insert::build(client.endpoint(), client.http(), &r));
        assert_eq!(Method::POST, req.method());
        assert_eq!(format!("{BASE}/projects/p1/datasets/ds1/routines"), req.url().as_str());
        assert_eq!("x * 2", body(&req)["definitionBody"]);

        let req = request(routine::update::build(client.endpoint(), client.http(), &r));
        assert_eq!(Method::PUT, req.method());
        assert_eq!(format!("{BASE}/projects/p1/datasets/ds1/routines/r1"), req.url().as_str());
    }

    #[test]
    fn test_get_request_with_read_mask() {
        let client = create_client(BASE);
        let get_req = GetRoutineRequest {
            read_mask: Some("language".to_string()),
        };
        let req = request(routine::get::build(
            client.endpoint(),
            client.http(),
            "p1",
            "ds1",
            "r1",
            Some(&get_req),
        ));
        assert_eq!(
            format!("{BASE}/projects/p1/datasets/ds1/routines/r1?readMask=language"),
            req.url().as_str()
        );
    }
}
