use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use async_trait::async_trait;

use token_source::{TokenSource, TokenSourceProvider};

use crate::credentials::CredentialsFile;
use crate::error::Error;
use crate::token_source::TokenSource as InternalTokenSource;
use crate::{create_token_source_from_credentials, Config};

pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expiry: Option<time::OffsetDateTime>,
}

impl Token {
    pub fn value(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub fn valid(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }

    fn expired(&self) -> bool {
        match self.expiry {
            None => false,
            Some(s) => {
                let now = time::OffsetDateTime::now_utc();
                let exp = s + time::Duration::seconds(-10);
                now > exp
            }
        }
    }
}

/// Hands out bearer tokens for one service account.
pub struct CredentialsTokenSourceProvider {
    ts: Arc<DefaultTokenSource>,
    pub project_id: Option<String>,
}

impl Debug for CredentialsTokenSourceProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsTokenSourceProvider")
            .field("project_id", &self.project_id)
            .finish()
    }
}

impl CredentialsTokenSourceProvider {
    /// Validates the credentials and prepares a token source. No token is requested until the first call.
    pub fn new(config: Config<'_>, credentials: &CredentialsFile) -> Result<Self, Error> {
        let inner = create_token_source_from_credentials(credentials, &config)?;
        Ok(Self {
            ts: Arc::new(DefaultTokenSource { inner: inner.into() }),
            project_id: credentials.project_id.clone(),
        })
    }
}

impl TokenSourceProvider for CredentialsTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        self.ts.clone()
    }
}

#[derive(Debug, Clone)]
pub struct DefaultTokenSource {
    inner: Arc<dyn InternalTokenSource>,
}

#[async_trait]
impl TokenSource for DefaultTokenSource {
    async fn token(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let token = self.inner.token().await?;
        Ok(token.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_validity() {
        let token = Token {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            expiry: Some(time::OffsetDateTime::now_utc() + time::Duration::minutes(5)),
        };
        assert!(token.valid());
        assert_eq!("Bearer abc", token.value());

        let expiring = Token {
            expiry: Some(time::OffsetDateTime::now_utc() + time::Duration::seconds(5)),
            ..token.clone()
        };
        assert!(!expiring.valid());

        let empty = Token {
            access_token: String::new(),
            expiry: None,
            ..token
        };
        assert!(!empty.valid());
    }
}
