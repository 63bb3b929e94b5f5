pub mod reuse_token_source;
pub mod service_account_token_source;

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Error;
use crate::token::Token;

#[async_trait]
pub trait TokenSource: Send + Sync + Debug {
    async fn token(&self) -> Result<Token, Error>;
}

fn default_http_client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?)
}

#[derive(Clone, Deserialize)]
struct InternalToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
}

impl InternalToken {
    fn to_token(&self, now: time::OffsetDateTime) -> Token {
        Token {
            access_token: self.access_token.clone(),
            token_type: self.token_type.clone(),
            expiry: self.expires_in.map(|s| now + time::Duration::seconds(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_token_expiry() {
        let token: InternalToken =
            serde_json::from_str(r#"{"access_token":"ya29.x","token_type":"Bearer","expires_in":3599}"#).unwrap();
        let now = time::OffsetDateTime::now_utc();
        let token = token.to_token(now);
        assert_eq!("ya29.x", token.access_token);
        assert_eq!(Some(now + time::Duration::seconds(3599)), token.expiry);
        assert!(token.valid());
    }
}
