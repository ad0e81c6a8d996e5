use std::sync::Arc;

use google_cloud_gax::conn::{ConnectionOptions, Environment};

use crate::apiv2::conn_pool::{ConnectionManager, ENDPOINT};
use crate::apiv2::storage_client::StorageClient;
use crate::apiv2::storage_control_client::StorageControlClient;
use crate::resource::BucketName;
use crate::token_source::{AnonymousTokenSourceProvider, MissingTokenSourceProvider};

/// Environment variable holding the `host:port` of a local emulator.
pub const EMULATOR_HOST_ENV: &str = "STORAGE_EMULATOR_HOST";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    GAX(#[from] google_cloud_gax::conn::Error),
    #[cfg(feature = "auth")]
    #[error(transparent)]
    Auth(#[from] google_cloud_auth::error::Error),
}

#[derive(Debug)]
pub struct ClientConfig {
    /// Number of HTTP/2 channels. Streams are multiplexed on each of them.
    pub pool_size: Option<usize>,
    pub endpoint: String,
    pub environment: Environment,
    pub connection_option: ConnectionOptions,
    /// Project used by [`Client::bucket_name`]. `_` is used when unset.
    pub project_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pool_size: Some(4),
            endpoint: ENDPOINT.to_string(),
            environment: Environment::from_env_or(EMULATOR_HOST_ENV, || Box::new(MissingTokenSourceProvider {})),
            connection_option: ConnectionOptions::default(),
            project_id: None,
        }
    }
}

impl ClientConfig {
    /// Accesses public buckets without credentials.
    pub fn anonymous(mut self) -> Self {
        if let Environment::GoogleCloud(_) = self.environment {
            self.environment = Environment::GoogleCloud(Box::new(AnonymousTokenSourceProvider {}));
        }
        self
    }
}

#[cfg(feature = "auth")]
pub use google_cloud_auth;

#[cfg(feature = "auth")]
impl ClientConfig {
    /// Loads the default credentials unless an emulator is configured.
    pub async fn with_auth(mut self) -> Result<Self, google_cloud_auth::error::Error> {
        if let Environment::GoogleCloud(_) = self.environment {
            let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new(Self::auth_config()).await?;
            self.project_id = self.project_id.or(ts.project_id.clone());
            self.environment = Environment::GoogleCloud(Box::new(ts))
        }
        Ok(self)
    }

    pub async fn with_credentials(
        mut self,
        credentials: google_cloud_auth::credentials::CredentialsFile,
    ) -> Result<Self, google_cloud_auth::error::Error> {
        if let Environment::GoogleCloud(_) = self.environment {
            let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new_with_credentials(
                Self::auth_config(),
                Box::new(credentials),
            )
            .await?;
            self.project_id = self.project_id.or(ts.project_id.clone());
            self.environment = Environment::GoogleCloud(Box::new(ts))
        }
        Ok(self)
    }

    fn auth_config() -> google_cloud_auth::project::Config<'static> {
        google_cloud_auth::project::Config::default()
            .with_audience(crate::apiv2::conn_pool::AUDIENCE)
            .with_scopes(&crate::apiv2::conn_pool::SCOPES)
    }
}

/// Client for Cloud Storage over gRPC.
///
/// The data plane and the control plane share one pool of channels.
/// Clients should be reused rather than being created as needed, and may be
/// shared by multiple tasks.
#[derive(Clone, Debug)]
pub struct Client {
    project_id: Option<String>,
    storage: StorageClient,
    control: StorageControlClient,
}

impl Client {
    pub async fn new(config: ClientConfig) -> Result<Self, Error> {
        let pool_size = config.pool_size.unwrap_or_default();
        let cm = ConnectionManager::new(
            pool_size,
            config.endpoint.as_str(),
            &config.environment,
            &config.connection_option,
        )
        .await?;
        let cm = Arc::new(cm);
        Ok(Self {
            project_id: config.project_id,
            storage: StorageClient::new(cm.clone()),
            control: StorageControlClient::new(cm),
        })
    }

    /// Data plane: buckets, objects, notifications and HMAC keys.
    pub fn storage(&self) -> &StorageClient {
        &self.storage
    }

    /// Control plane: folders, managed folders, Anywhere Caches and Storage Intelligence.
    pub fn control(&self) -> &StorageControlClient {
        &self.control
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Fully qualified name of a bucket in the client's project.
    pub fn bucket_name(&self, bucket: &str) -> String {
        BucketName::new(self.project_id().unwrap_or("_"), bucket).to_string()
    }
}
