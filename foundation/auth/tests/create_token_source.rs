use bigquery_tasks_auth::credentials::CredentialsFile;
use bigquery_tasks_auth::token::CredentialsTokenSourceProvider;
use bigquery_tasks_auth::{error, Config};
use token_source::TokenSourceProvider;

const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/bigquery"];

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt::try_init();
}

#[tokio::test]
async fn test_provider_is_lazy() -> Result<(), error::Error> {
    let credentials = CredentialsFile::new_from_str(include_str!("../../../testdata/service_account.json"))?;
    let provider = CredentialsTokenSourceProvider::new(Config::default().with_scopes(&SCOPES), &credentials)?;
    assert_eq!(Some("bigquery-tasks-test"), provider.project_id.as_deref());

    // the token endpoint of the fixture is not reachable
    let ts = provider.token_source();
    assert!(ts.token().await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_provider_rejects_unknown_type() {
    let credentials = CredentialsFile::new_from_str(r#"{ "type": "external_account" }"#).unwrap();
    let err = CredentialsTokenSourceProvider::new(Config::default().with_scopes(&SCOPES), &credentials).unwrap_err();
    assert_eq!(
        "Error creating credential from JSON or JSON parameters. Unrecognized credential type external_account.",
        err.to_string()
    );
}

#[tokio::test]
#[ignore]
async fn test_live_token() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let json = std::env::var("BIGQUERY_SECRET_JSON")?;
    let credentials = CredentialsFile::new_from_str(&json)?;
    let provider = CredentialsTokenSourceProvider::new(Config::default().with_scopes(&SCOPES), &credentials)?;
    let token = provider.token_source().token().await?;
    assert!(token.starts_with("Bearer "));
    Ok(())
}
