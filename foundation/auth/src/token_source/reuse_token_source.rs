use async_trait::async_trait;

use crate::error::Error;
use crate::token::Token;
use crate::token_source::TokenSource;

/// Caches the token of the wrapped source until it is about to expire.
#[derive(Debug)]
pub struct ReuseTokenSource {
    target: Box<dyn TokenSource>,
    current_token: tokio::sync::RwLock<Option<Token>>,
    guard: tokio::sync::Mutex<()>,
}

impl ReuseTokenSource {
    pub(crate) fn new(target: Box<dyn TokenSource>) -> ReuseTokenSource {
        ReuseTokenSource {
            target,
            current_token: tokio::sync::RwLock::new(None),
            guard: tokio::sync::Mutex::new(()),
        }
    }

    async fn r_lock_token(&self) -> Result<Token, Error> {
        match self.current_token.read().await.as_ref() {
            Some(token) if token.valid() => Ok(token.clone()),
            _ => Err(Error::InvalidToken),
        }
    }
}

#[async_trait]
impl TokenSource for ReuseTokenSource {
    async fn token(&self) -> Result<Token, Error> {
        if let Ok(token) = self.r_lock_token().await {
            return Ok(token);
        }

        // Only single task can refresh token
        let _locking = self.guard.lock().await;

        if let Ok(token) = self.r_lock_token().await {
            return Ok(token);
        }

        let token = self.target.token().await?;
        tracing::debug!("token refresh success : expiry={:?}", token.expiry);
        *self.current_token.write().await = Some(token.clone());
        Ok(token)
    }
}
