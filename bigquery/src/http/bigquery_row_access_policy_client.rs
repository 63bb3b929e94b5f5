use std::sync::Arc;

use crate::http::bigquery_client::BigqueryClient;
use crate::http::error::Error;
use crate::http::row_access_policy;
use crate::http::row_access_policy::list::{ListRowAccessPoliciesRequest, ListRowAccessPoliciesResponse};
use crate::http::row_access_policy::RowAccessPolicy;

#[derive(Debug, Clone)]
pub struct BigqueryRowAccessPolicyClient {
    inner: Arc<BigqueryClient>,
}

impl BigqueryRowAccessPolicyClient {
    pub fn new(inner: Arc<BigqueryClient>) -> Self {
        Self { inner }
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list(
        &self,
        project_id: &str,
        dataset_id: &str,
        table_id: &str,
        req: Option<&ListRowAccessPoliciesRequest>,
    ) -> Result<Vec<RowAccessPolicy>, Error> {
        let mut page_token: Option<String> = None;
        let mut policies = vec![];
        loop {
            let builder = row_access_policy::list::build(
                self.inner.endpoint(),
                self.inner.http(),
                project_id,
                dataset_id,
                table_id,
                req,
                page_token,
            );
            let response: ListRowAccessPoliciesResponse = self.inner.send(builder).await?;
            policies.extend(response.row_access_policies);
            if response.next_page_token.is_none() {
                break;
            }
            page_token = response.next_page_token;
        }
        Ok(policies)
    }
}
