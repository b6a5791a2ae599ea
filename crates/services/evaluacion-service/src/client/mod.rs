//! HTTP clients for calling sibling services.

mod empresa_client;

pub use empresa_client::{EmpresaClient, HttpEmpresaClient, EMPRESA_SERVICE};

#[cfg(any(test, feature = "test-utils"))]
pub use empresa_client::MockEmpresaClient;
