use std::error::Error;
use std::sync::Arc;

use token_source::{TokenSource, TokenSourceProvider};

/// Yields an empty token, which the connection layer treats as "send no authorization header".
#[derive(Debug, Clone)]
pub struct AnonymousTokenSource {}

#[async_trait::async_trait]
impl TokenSource for AnonymousTokenSource {
    async fn token(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        Ok("".to_string())
    }
}

#[derive(Debug)]
pub struct AnonymousTokenSourceProvider {}

impl TokenSourceProvider for AnonymousTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        Arc::new(AnonymousTokenSource {})
    }
}

/// Placeholder installed by `ClientConfig::default()`. Every call fails with
/// `Unauthenticated` until credentials are configured or anonymous access is chosen.
#[derive(Debug, Clone)]
pub struct MissingTokenSource {}

#[async_trait::async_trait]
impl TokenSource for MissingTokenSource {
    async fn token(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        Err("no token source is configured: use with_auth() or anonymous()".into())
    }
}

#[derive(Debug)]
pub struct MissingTokenSourceProvider {}

impl TokenSourceProvider for MissingTokenSourceProvider {
    fn token_source(&self) -> Arc<dyn TokenSource> {
        Arc::new(MissingTokenSource {})
    }
}
