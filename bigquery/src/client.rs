use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;
use token_source::TokenSourceProvider;

use bigquery_tasks_auth::credentials::CredentialsFile;
use bigquery_tasks_auth::token::CredentialsTokenSourceProvider;

use crate::http::bigquery_client::{BigqueryClient, DEFAULT_ENDPOINT, SCOPES};
use crate::http::bigquery_dataset_client::BigqueryDatasetClient;
use crate::http::bigquery_job_client::BigqueryJobClient;
use crate::http::bigquery_model_client::BigqueryModelClient;
use crate::http::bigquery_project_client::BigqueryProjectClient;
use crate::http::bigquery_routine_client::BigqueryRoutineClient;
use crate::http::bigquery_row_access_policy_client::BigqueryRowAccessPolicyClient;
use crate::http::bigquery_table_client::BigqueryTableClient;
use crate::http::bigquery_tabledata_client::BigqueryTabledataClient;

#[derive(Debug)]
pub struct ClientConfig {
    pub http: ClientWithMiddleware,
    /// Versioned API root. A trailing `/` is ignored.
    pub bigquery_endpoint: String,
    pub token_source_provider: Box<dyn TokenSourceProvider>,
    /// Logs raw response bodies.
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(token_source_provider: Box<dyn TokenSourceProvider>) -> Self {
        Self {
            http: reqwest_middleware::ClientBuilder::new(reqwest::Client::default()).build(),
            bigquery_endpoint: DEFAULT_ENDPOINT.to_string(),
            token_source_provider,
            debug: false,
        }
    }

    /// Authenticates with a service account key, scoped to BigQuery.
    pub fn new_with_credentials(credentials: &CredentialsFile) -> Result<Self, bigquery_tasks_auth::error::Error> {
        let config = bigquery_tasks_auth::Config::default().with_scopes(&SCOPES);
        let tsp = CredentialsTokenSourceProvider::new(config, credentials)?;
        Ok(Self::new(Box::new(tsp)))
    }

    /// Blank endpoints keep the public one.
    pub fn with_endpoint(mut self, value: Option<&str>) -> Self {
        if let Some(endpoint) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.bigquery_endpoint = endpoint.to_string();
        }
        self
    }

    pub fn with_http_client(mut self, value: ClientWithMiddleware) -> Self {
        self.http = value;
        self
    }

    pub fn with_debug(mut self, value: bool) -> Self {
        self.debug = value;
        self
    }
}

/// Entry point to the BigQuery REST collections.
#[derive(Debug, Clone)]
pub struct Client {
    dataset_client: BigqueryDatasetClient,
    table_client: BigqueryTableClient,
    tabledata_client: BigqueryTabledataClient,
    routine_client: BigqueryRoutineClient,
    job_client: BigqueryJobClient,
    model_client: BigqueryModelClient,
    project_client: BigqueryProjectClient,
    row_access_policy_client: BigqueryRowAccessPolicyClient,
    endpoint: String,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        let ts = config.token_source_provider.token_source();
        let client = Arc::new(BigqueryClient::new(
            ts,
            config.bigquery_endpoint.as_str(),
            config.http,
            config.debug,
        ));
        Self {
            dataset_client: BigqueryDatasetClient::new(client.clone()),
            table_client: BigqueryTableClient::new(client.clone()),
            tabledata_client: BigqueryTabledataClient::new(client.clone()),
            routine_client: BigqueryRoutineClient::new(client.clone()),
            job_client: BigqueryJobClient::new(client.clone()),
            model_client: BigqueryModelClient::new(client.clone()),
            project_client: BigqueryProjectClient::new(client.clone()),
            row_access_policy_client: BigqueryRowAccessPolicyClient::new(client.clone()),
            endpoint: client.endpoint().to_string(),
        }
    }

    /// The API root requests are sent to, without a trailing `/`.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn dataset(&self) -> &BigqueryDatasetClient {
        &self.dataset_client
    }

    pub fn table(&self) -> &BigqueryTableClient {
        &self.table_client
    }

    pub fn tabledata(&self) -> &BigqueryTabledataClient {
        &self.tabledata_client
    }

    pub fn routine(&self) -> &BigqueryRoutineClient {
        &self.routine_client
    }

    pub fn job(&self) -> &BigqueryJobClient {
        &self.job_client
    }

    pub fn model(&self) -> &BigqueryModelClient {
        &self.model_client
    }

    pub fn project(&self) -> &BigqueryProjectClient {
        &self.project_client
    }

    pub fn row_access_policy(&self) -> &BigqueryRowAccessPolicyClient {
        &self.row_access_policy_client
    }
}

#[cfg(test)]
mod tests {
    use bigquery_tasks_auth::credentials::CredentialsFile;

    use crate::client::{Client, ClientConfig};
    use crate::http::bigquery_client::test::MockServer;
    use crate::http::bigquery_client::DEFAULT_ENDPOINT;

    const CREDENTIALS: &str = include_str!("../../testdata/service_account.json");

    #[ctor::ctor]
    fn init() {
        let _ = tracing_subscriber::fmt::try_init();
    }

    #[test]
    fn test_endpoint() {
        let credentials = CredentialsFile::new_from_str(CREDENTIALS).unwrap();
        let config = ClientConfig::new_with_credentials(&credentials).unwrap();
        assert_eq!(DEFAULT_ENDPOINT, Client::new(config).endpoint());

        let config = ClientConfig::new_with_credentials(&credentials)
            .unwrap()
            .with_endpoint(Some("  "));
        assert_eq!(DEFAULT_ENDPOINT, Client::new(config).endpoint());

        let config = ClientConfig::new_with_credentials(&credentials)
            .unwrap()
            .with_endpoint(Some("http://localhost:9050/bigquery/v2/"));
        assert_eq!("http://localhost:9050/bigquery/v2", Client::new(config).endpoint());
    }

    #[tokio::test]
    async fn test_token_failure_is_reported() {
        let credentials = CredentialsFile::new_from_str(CREDENTIALS).unwrap();
        let client = Client::new(ClientConfig::new_with_credentials(&credentials).unwrap());
        let err = client.dataset().get("p1", "ds1").await.unwrap_err();
        assert!(err.to_string().starts_with("token source failed: "), "{err}");
    }

    #[tokio::test]
    async fn test_debug_with_custom_http_client() {
        let server = MockServer::start(|method, target, _| match (method, target) {
            ("GET", "/projects/p1/datasets/ds1") => (
                200,
                r#"{"datasetReference": {"projectId": "p1", "datasetId": "ds1"}, "location": "EU"}"#.to_string(),
            ),
            _ => (404, r#"{"error": {"code": 404, "message": "Not found: Dataset p1:ds2"}}"#.to_string()),
        })
        .await;
        let credentials =
            CredentialsFile::new_from_str(&CREDENTIALS.replace("http://127.0.0.1:9/token", &server.token_uri())).unwrap();
        let http = reqwest_middleware::ClientBuilder::new(
            reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap(),
        )
        .build();
        let config = ClientConfig::new_with_credentials(&credentials)
            .unwrap()
            .with_endpoint(Some(&server.base_uri))
            .with_http_client(http)
            .with_debug(true);
        assert!(config.debug);
        let client = Client::new(config);

        let dataset = client.dataset().get("p1", "ds1").await.unwrap();
        assert_eq!("ds1", dataset.dataset_reference.dataset_id);
        assert_eq!(Some("EU".to_string()), dataset.location);

        let err = client.dataset().get("p1", "ds2").await.unwrap_err();
        assert_eq!("Not found: Dataset p1:ds2", err.to_string());
        assert!(!err.is_retryable());
    }
}
