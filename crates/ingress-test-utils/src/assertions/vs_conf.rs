//! Assertion utilities for the configuration rendered for a VirtualServer.

use thiserror::Error;

use crate::error::TestError;
use crate::kube::VsConfigSource;
use crate::resources::VirtualServerSetup;

/// Text `cat` prints when the rendered configuration file is absent.
pub const MISSING_CONF_MARKER: &str = "No such file or directory";

/// Error type for VirtualServer configuration validation failures
#[derive(Debug, Error)]
pub enum VsConfAssertionError {
    #[error("Expected no configuration for VirtualServer {namespace}/{name}, but it exists")]
    ConfPresent { namespace: String, name: String },

    #[error("Expected configuration for VirtualServer {namespace}/{name}, but it is missing")]
    ConfMissing { namespace: String, name: String },

    #[error("Failed to fetch VirtualServer configuration: {0}")]
    Fetch(#[from] TestError),
}

async fn fetch_conf<S>(
    kube_apis: &S,
    ic_pod_name: &str,
    ic_namespace: &str,
    virtual_server_setup: &VirtualServerSetup,
) -> Result<String, TestError>
where
    S: VsConfigSource + ?Sized,
{
    kube_apis
        .vs_nginx_template_conf(
            &virtual_server_setup.namespace,
            &virtual_server_setup.vs_name,
            ic_pod_name,
            ic_namespace,
        )
        .await
}

/// Asserts that the controller pod holds no configuration file for the
/// VirtualServer.
pub async fn assert_vs_conf_not_exists<S>(
    kube_apis: &S,
    ic_pod_name: &str,
    ic_namespace: &str,
    virtual_server_setup: &VirtualServerSetup,
) -> Result<(), VsConfAssertionError>
where
    S: VsConfigSource + ?Sized,
{
    let conf = fetch_conf(kube_apis, ic_pod_name, ic_namespace, virtual_server_setup).await?;
    if !conf.contains(MISSING_CONF_MARKER) {
        return Err(VsConfAssertionError::ConfPresent {
            namespace: virtual_server_setup.namespace.clone(),
            name: virtual_server_setup.vs_name.clone(),
        });
    }

    Ok(())
}

/// Asserts that the controller pod holds a configuration file for the
/// VirtualServer.
pub async fn assert_vs_conf_exists<S>(
    kube_apis: &S,
    ic_pod_name: &str,
    ic_namespace: &str,
    virtual_server_setup: &VirtualServerSetup,
) -> Result<(), VsConfAssertionError>
where
    S: VsConfigSource + ?Sized,
{
    let conf = fetch_conf(kube_apis, ic_pod_name, ic_namespace, virtual_server_setup).await?;
    if conf.contains(MISSING_CONF_MARKER) {
        return Err(VsConfAssertionError::ConfMissing {
            namespace: virtual_server_setup.namespace.clone(),
            name: virtual_server_setup.vs_name.clone(),
        });
    }

    Ok(())
}
