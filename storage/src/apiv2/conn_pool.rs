use google_cloud_gax::conn::{Channel, ConnectionOptions, Environment};
use google_cloud_gax::conn::{ConnectionManager as GRPCConnectionManager, Error};

pub const AUDIENCE: &str = "https://storage.googleapis.com/";
pub const STORAGE: &str = "storage.googleapis.com";
pub const ENDPOINT: &str = "https://storage.googleapis.com";
pub const SCOPES: [&str; 5] = [
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/cloud-platform.read-only",
    "https://www.googleapis.com/auth/devstorage.full_control",
    "https://www.googleapis.com/auth/devstorage.read_only",
    "https://www.googleapis.com/auth/devstorage.read_write",
];

/// Channels shared by the data plane and control plane clients.
#[derive(Debug)]
pub struct ConnectionManager {
    inner: GRPCConnectionManager,
}

impl ConnectionManager {
    pub async fn new(
        pool_size: usize,
        endpoint: &str,
        environment: &Environment,
        conn_options: &ConnectionOptions,
    ) -> Result<Self, Error> {
        Ok(ConnectionManager {
            inner: GRPCConnectionManager::new(pool_size, STORAGE, endpoint, environment, conn_options).await?,
        })
    }

    pub fn num(&self) -> usize {
        self.inner.num()
    }

    pub fn conn(&self) -> Channel {
        self.inner.conn()
    }
}
