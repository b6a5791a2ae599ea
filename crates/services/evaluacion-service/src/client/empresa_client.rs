//! HTTP client for the empresa service (proveedor, categoria, perito).

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use common::{AppError, AppResult, RemoteServiceConfig};
use domain::{Categoria, Perito, Proveedor, ENTITY_CATEGORIA, ENTITY_PERITO, ENTITY_PROVEEDOR};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service name reported when the empresa service cannot be reached
pub const EMPRESA_SERVICE: &str = "empresa";

const PROVEEDOR_PATH: &str = "/api/empresa/proveedor/findbyid";
const CATEGORIA_PATH: &str = "/api/empresa/categoria/find";
const PERITO_PATH: &str = "/api/empresa/perito/findbyid";

/// Lookups against the empresa service.
///
/// Each call is a single request with no retry. Any failure is returned to
/// the caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmpresaClient: Send + Sync {
    /// Fetch a provider by ID
    async fn find_proveedor(&self, id: i64) -> AppResult<Proveedor>;

    /// Fetch a category by ID
    async fn find_categoria(&self, id: i64) -> AppResult<Categoria>;

    /// Fetch an appraiser by ID
    async fn find_perito(&self, id: i64) -> AppResult<Perito>;
}

/// reqwest-backed implementation of EmpresaClient
#[derive(Clone)]
pub struct HttpEmpresaClient {
    client: reqwest::Client,
    config: RemoteServiceConfig,
}

impl HttpEmpresaClient {
    /// Build a client for the given empresa endpoint.
    pub fn new(config: RemoteServiceConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build empresa client: {}", e)))?;

        debug!("Empresa client targeting {}", config.base_url);
        Ok(Self { client, config })
    }

    async fn fetch<T: DeserializeOwned>(&self, entity: &str, path: &str, id: i64) -> AppResult<T> {
        let url = self.config.url(&format!("{}/{}", path, id));
        debug!("Fetching {} {} from {}", entity, id, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            if e.is_connect() || e.is_timeout() {
                AppError::service_unavailable(EMPRESA_SERVICE)
            } else {
                AppError::remote_call(format!("GET {}: {}", url, e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(AppError::remote_call(format!(
                "{} {} lookup returned {}",
                entity, id, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::remote_call(format!("Invalid {} {} body: {}", entity, id, e))
        })
    }
}

#[async_trait]
impl EmpresaClient for HttpEmpresaClient {
    async fn find_proveedor(&self, id: i64) -> AppResult<Proveedor> {
        self.fetch(ENTITY_PROVEEDOR, PROVEEDOR_PATH, id).await
    }

    async fn find_categoria(&self, id: i64) -> AppResult<Categoria> {
        self.fetch(ENTITY_CATEGORIA, CATEGORIA_PATH, id).await
    }

    async fn find_perito(&self, id: i64) -> AppResult<Perito> {
        self.fetch(ENTITY_PERITO, PERITO_PATH, id).await
    }
}
