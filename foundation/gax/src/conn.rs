use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use http::header::AUTHORIZATION;
use http::{HeaderValue, Request};
use tonic::body::BoxBody;
use tonic::transport::{Channel as TonicChannel, ClientTlsConfig, Endpoint};
use tonic::{Code, Status};
use tower::filter::{AsyncFilter, AsyncFilterLayer, AsyncPredicate};
use tower::util::Either;
use tower::{BoxError, ServiceBuilder};

use token_source::{TokenSource, TokenSourceProvider};

/// A pooled channel. Authenticated when connected to Google Cloud, plain against an emulator.
pub type Channel = Either<AsyncFilter<TonicChannel, AsyncAuthInterceptor>, TonicChannel>;

#[derive(Clone, Debug)]
pub struct AsyncAuthInterceptor {
    token_source: Arc<dyn TokenSource>,
}

impl AsyncAuthInterceptor {
    fn new(token_source: Arc<dyn TokenSource>) -> Self {
        Self { token_source }
    }
}

impl AsyncPredicate<Request<BoxBody>> for AsyncAuthInterceptor {
    type Future = Pin<Box<dyn Future<Output = Result<Self::Request, BoxError>> + Send>>;
    type Request = Request<BoxBody>;

    fn check(&mut self, request: Request<BoxBody>) -> Self::Future {
        let ts = self.token_source.clone();
        Box::pin(async move {
            let token = ts
                .token()
                .await
                .map_err(|e| Status::new(Code::Unauthenticated, format!("token error: {e:?}")))?;
            // anonymous access
            if token.is_empty() {
                return Ok(request);
            }
            let token_header = HeaderValue::from_str(token.as_str())
                .map_err(|e| Status::new(Code::Unauthenticated, format!("token error: {e:?}")))?;
            let (mut parts, body) = request.into_parts();
            parts.headers.insert(AUTHORIZATION, token_header);
            Ok(Request::from_parts(parts, body))
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("tonic error : {0}")]
    TonicTransport(#[from] tonic::transport::Error),

    #[error("invalid emulator host: {0}")]
    InvalidEmulatorHOST(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

#[derive(Debug)]
pub enum Environment {
    /// Host and port of a local emulator such as `localhost:9023`.
    Emulator(String),
    GoogleCloud(Box<dyn TokenSourceProvider>),
}

impl Environment {
    /// Picks the emulator when `env_var` is set to a non empty value.
    pub fn from_env_or(env_var: &str, provider: impl FnOnce() -> Box<dyn TokenSourceProvider>) -> Self {
        match std::env::var(env_var) {
            Ok(host) if !host.is_empty() => Environment::Emulator(host),
            _ => Environment::GoogleCloud(provider()),
        }
    }
}

#[derive(Debug)]
struct AtomicRing<T>
where
    T: Clone + Debug,
{
    index: AtomicUsize,
    values: Vec<T>,
}

impl<T> AtomicRing<T>
where
    T: Clone + Debug,
{
    fn next(&self) -> T {
        let current = self.index.fetch_add(1, Ordering::SeqCst);
        //clone() reuses http/2 connection
        self.values[current % self.values.len()].clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Keeps long lived read and write streams alive through idle proxies.
    pub http2_keep_alive_interval: Option<Duration>,
    pub tcp_keepalive: Option<Duration>,
}

impl ConnectionOptions {
    fn apply(&self, mut endpoint: Endpoint) -> Endpoint {
        if let Some(t) = self.timeout {
            endpoint = endpoint.timeout(t);
        }
        if let Some(t) = self.connect_timeout {
            endpoint = endpoint.connect_timeout(t);
        }
        if let Some(interval) = self.http2_keep_alive_interval {
            endpoint = endpoint.http2_keep_alive_interval(interval).keep_alive_while_idle(true);
        }
        endpoint.tcp_keepalive(self.tcp_keepalive)
    }
}

#[derive(Debug)]
pub struct ConnectionManager {
    inner: AtomicRing<Channel>,
}

impl<'a> ConnectionManager {
    /// Opens `pool_size` channels to `endpoint`, or to the emulator host when the environment says so.
    pub async fn new(
        pool_size: usize,
        domain_name: impl Into<String>,
        endpoint: &str,
        environment: &Environment,
        conn_options: &'a ConnectionOptions,
    ) -> Result<Self, Error> {
        let pool_size = pool_size.max(1);
        let conns = match environment {
            Environment::GoogleCloud(ts_provider) => {
                Self::create_connections(pool_size, domain_name, endpoint, ts_provider.as_ref(), conn_options).await?
            }
            Environment::Emulator(host) => Self::create_emulator_connections(pool_size, host, conn_options).await?,
        };
        tracing::debug!("opened {} channels", conns.len());
        Ok(Self {
            inner: AtomicRing {
                index: AtomicUsize::new(0),
                values: conns,
            },
        })
    }

    async fn create_connections(
        pool_size: usize,
        domain_name: impl Into<String>,
        endpoint: &str,
        ts_provider: &dyn TokenSourceProvider,
        conn_options: &'a ConnectionOptions,
    ) -> Result<Vec<Channel>, Error> {
        let tls_config = ClientTlsConfig::new().with_webpki_roots().domain_name(domain_name);
        let mut conns = Vec::with_capacity(pool_size);

        let ts = ts_provider.token_source();

        for _ in 0..pool_size {
            let target = TonicChannel::from_shared(endpoint.to_string())
                .map_err(|_| Error::InvalidEndpoint(endpoint.to_string()))?
                .tls_config(tls_config.clone())?;
            let target = conn_options.apply(target);

            let con = Self::connect(target).await?;
            // use GCP token per call
            let auth_layer = Some(AsyncFilterLayer::new(AsyncAuthInterceptor::new(Arc::clone(&ts))));
            let auth_con = ServiceBuilder::new().option_layer(auth_layer).service(con);
            conns.push(auth_con);
        }
        Ok(conns)
    }

    async fn create_emulator_connections(
        pool_size: usize,
        host: &str,
        conn_options: &'a ConnectionOptions,
    ) -> Result<Vec<Channel>, Error> {
        let mut conns = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let target = TonicChannel::from_shared(format!("http://{host}").into_bytes())
                .map_err(|_| Error::InvalidEmulatorHOST(host.to_string()))?;
            let target = conn_options.apply(target);

            let con = Self::connect(target).await?;
            conns.push(
                ServiceBuilder::new()
                    .option_layer::<AsyncFilterLayer<AsyncAuthInterceptor>>(None)
                    .service(con),
            );
        }
        Ok(conns)
    }

    async fn connect(endpoint: Endpoint) -> Result<TonicChannel, tonic::transport::Error> {
        let channel = endpoint.connect().await?;
        Ok(channel)
    }

    pub fn num(&self) -> usize {
        self.inner.values.len()
    }

    pub fn conn(&self) -> Channel {
        self.inner.next()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::conn::{AtomicRing, ConnectionManager, ConnectionOptions, Environment, Error};

    #[test]
    fn test_atomic_ring() {
        let cm = AtomicRing::<&str> {
            index: AtomicUsize::new(usize::MAX - 1),
            values: vec!["a", "b", "c", "d"],
        };
        let mut values = HashSet::new();
        assert!(values.insert(cm.next()));
        assert_eq!(usize::MAX, cm.index.load(Ordering::SeqCst));
        assert!(values.insert(cm.next()));
        assert_eq!(0, cm.index.load(Ordering::SeqCst));
        assert!(values.insert(cm.next()));
        assert!(values.insert(cm.next()));
        assert!(!values.insert(cm.next()));
        assert_eq!(3, cm.index.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_invalid_emulator_host() {
        let result = ConnectionManager::new(
            1,
            "storage.googleapis.com",
            "https://storage.googleapis.com",
            &Environment::Emulator("bad host\n".to_string()),
            &ConnectionOptions::default(),
        )
        .await;
        match result {
            Err(Error::InvalidEmulatorHOST(host)) => assert_eq!(host, "bad host\n"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
