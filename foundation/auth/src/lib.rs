//! # bigquery-tasks-auth
//!
//! Service account authentication used by the BigQuery tasks.
//!
//! Credentials are read from a service account key document, either a file on
//! disk or a JSON string, and turned into an OAuth 2.0 token source that signs
//! a JWT assertion and exchanges it at the token endpoint. Tokens are cached
//! and refreshed shortly before they expire.
//!
//! ```ignore
//! use bigquery_tasks_auth::credentials::CredentialsFile;
//! use bigquery_tasks_auth::token::CredentialsTokenSourceProvider;
//! use bigquery_tasks_auth::Config;
//!
//! let credentials = CredentialsFile::new_from_file("key.json").await?;
//! let config = Config::default().with_scopes(&["https://www.googleapis.com/auth/bigquery"]);
//! let provider = CredentialsTokenSourceProvider::new(config, &credentials)?;
//! ```
pub mod credentials;
pub mod error;
pub mod token;
pub mod token_source;

use crate::credentials::CredentialsFile;
use crate::token_source::reuse_token_source::ReuseTokenSource;
use crate::token_source::service_account_token_source::OAuth2ServiceAccountTokenSource;
use crate::token_source::TokenSource;

const SERVICE_ACCOUNT_KEY: &str = "service_account";

#[derive(Debug, Clone, Default)]
pub struct Config<'a> {
    scopes: Option<&'a [&'a str]>,
    sub: Option<&'a str>,
}

impl<'a> Config<'a> {
    pub fn scopes_to_string(&self, sep: &str) -> String {
        match self.scopes {
            Some(s) => s.join(sep),
            None => String::new(),
        }
    }

    pub fn with_scopes(mut self, value: &'a [&'a str]) -> Self {
        self.scopes = Some(value);
        self
    }

    /// Subject to impersonate with domain-wide delegation.
    pub fn with_sub(mut self, value: &'a str) -> Self {
        self.sub = Some(value);
        self
    }
}

/// Builds a caching token source for the given credentials.
///
/// Only service account keys are accepted. The private key is parsed here so a
/// broken key is reported before any request is made.
pub fn create_token_source_from_credentials(
    credentials: &CredentialsFile,
    config: &Config,
) -> Result<Box<dyn TokenSource>, error::Error> {
    match credentials.tp.as_str() {
        SERVICE_ACCOUNT_KEY => {
            if config.scopes.is_none() {
                return Err(error::Error::ScopeRequired);
            }
            let source = OAuth2ServiceAccountTokenSource::new(credentials, config.scopes_to_string(" ").as_str(), config.sub)?;
            Ok(Box::new(ReuseTokenSource::new(Box::new(source))))
        }
        tp => Err(error::Error::UnrecognizedCredentialType(tp.to_string())),
    }
}
