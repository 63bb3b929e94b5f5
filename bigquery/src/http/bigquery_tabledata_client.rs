use std::sync::Arc;

use crate::http::bigquery_client::BigqueryClient;
use crate::http::error::Error;
use crate::http::tabledata;
use crate::http::tabledata::insert_all::{InsertAllRequest, InsertAllResponse};
use crate::http::tabledata::list::{DataList, FetchDataRequest, Tuple};

#[derive(Debug, Clone)]
pub struct BigqueryTabledataClient {
    inner: Arc<BigqueryClient>,
}

impl BigqueryTabledataClient {
    pub fn new(inner: Arc<BigqueryClient>) -> Self {
        Self { inner }
    }

    /// Streams rows into the table. Per-row failures are reported in `insert_errors`, not as `Err`.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn insert<T: serde::Serialize>(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
        req: &InsertAllRequest<T>,
    ) -> Result<InsertAllResponse, Error> {
        let builder = tabledata::insert_all::build(
            self.inner.endpoint(),
            self.inner.http(),
            project_id,
            dataset_id,
            table_id,
            req,
        );
        self.inner.send(builder).await
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn read(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
        req: Option<&FetchDataRequest>,
        page_token: Option<String>,
    ) -> Result<DataList, Error> {
        let builder = tabledata::list::build(
            self.inner.endpoint(),
            self.inner.http(),
            project_id,
            dataset_id,
            table_id,
            req,
            page_token,
        );
        self.inner.send(builder).await
    }

    /// Reads every page of the table.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn read_all(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
        req: Option<&FetchDataRequest>,
    ) -> Result<Vec<Tuple>, Error> {
        let mut page_token: Option<String> = None;
        let mut rows = vec![];
        loop {
            let response = self.read(project_id, dataset_id, table_id, req, page_token).await?;
            rows.extend(response.rows);
            if response.page_token.is_none() {
                break;
            }
            page_token = response.page_token;
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use reqwest::Method;

    use crate::http::bigquery_client::test::{body, create_client, request};
    use crate::http::tabledata;
    use crate::http::tabledata::insert_all::{InsertAllRequest, InsertAllResponse, Row};
    use crate::http::tabledata::list::DataList;

    const BASE: &str = "https://bigquery.googleapis.com/bigquery/v2";

    #[test]
    fn test_insert_all_request() {
        let client = create_client(BASE);
        let data = InsertAllRequest {
            rows: vec![Row {
                insert_id: None,
                json: HashMap::from([("col".to_string(), "1".to_string())]),
            }],
            ..Default::default()
        };
        let req = request(tabledata::insert_all::build(
            client.endpoint(),
            client.http(),
            "p1",
            "ds1",
            "t1",
            &data,
        ));
        assert_eq!(Method::POST, req.method());
        assert_eq!(
            format!("{BASE}/projects/p1/datasets/ds1/tables/t1/insertAll"),
            req.url().as_str()
        );
        assert_eq!(serde_json::json!({"rows": [{"json": {"col": "1"}}]}), body(&req));
    }

    #[test]
    fn test_insert_errors_response() {
        let res: InsertAllResponse = serde_json::from_str(
            r#"{"kind":"bigquery#tableDataInsertAllResponse","insertErrors":[{"index":0,"errors":[{"reason":"invalid","location":"Invalid","debugInfo":"","message":"no such field: Invalid."}]}]}"#,
        )
        .unwrap();
        let errors = res.insert_errors.unwrap();
        assert_eq!("no such field: Invalid.", errors[0].errors[0].message);
    }

    #[test]
    fn test_data_list_response() {
        let res: DataList = serde_json::from_str(
            r#"{"kind":"bigquery#tableDataList","etag":"x","totalRows":"2","rows":[{"f":[{"v":"1"}]},{"f":[{"v":null}]}]}"#,
        )
        .unwrap();
        assert_eq!(Some(2), res.total_rows);
        assert_eq!(2, res.rows.len());
        assert_eq!(serde_json::json!({"f": [{"v": null}]}), serde_json::to_value(&res.rows[1]).unwrap());
    }
}
