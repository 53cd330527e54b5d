//! In-memory implementation of the VsConfigSource trait.

use crate::config::DEFAULT_CONF_DIR;
use crate::error::TestError;
use crate::kube::{vs_conf_path, VsConfigSource};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Key of a rendered file: pod namespace, pod name and file path.
type ConfKey = (String, String, String);

/// Thread-safe stand-in for the file system of controller pods.
///
/// Reading a file that was never rendered answers the way `cat` does.
#[derive(Clone)]
pub struct InMemoryConfSource {
    conf_dir: String,
    files: Arc<RwLock<HashMap<ConfKey, String>>>,
}

impl fmt::Debug for InMemoryConfSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryConfSource")
            .field("conf_dir", &self.conf_dir)
            .field("file_count", &self.files.read().len())
            .finish()
    }
}

impl InMemoryConfSource {
    pub fn new() -> Self {
        Self::with_conf_dir(DEFAULT_CONF_DIR)
    }

    pub fn with_conf_dir(conf_dir: impl Into<String>) -> Self {
        Self {
            conf_dir: conf_dir.into(),
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Renders the configuration of a VirtualServer into a pod.
    pub fn render(&self, ic_namespace: &str, ic_pod_name: &str, vs_namespace: &str, vs_name: &str, conf: &str) {
        let path = vs_conf_path(&self.conf_dir, vs_namespace, vs_name);
        self.files.write().insert(
            (ic_namespace.to_string(), ic_pod_name.to_string(), path),
            conf.to_string(),
        );
    }

    /// Removes the configuration of a VirtualServer from a pod.
    pub fn remove(&self, ic_namespace: &str, ic_pod_name: &str, vs_namespace: &str, vs_name: &str) -> bool {
        let path = vs_conf_path(&self.conf_dir, vs_namespace, vs_name);
        self.files
            .write()
            .remove(&(ic_namespace.to_string(), ic_pod_name.to_string(), path))
            .is_some()
    }

    pub fn clear(&self) {
        self.files.write().clear();
    }
}

impl Default for InMemoryConfSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VsConfigSource for InMemoryConfSource {
    async fn vs_nginx_template_conf(
        &self,
        vs_namespace: &str,
        vs_name: &str,
        ic_pod_name: &str,
        ic_namespace: &str,
    ) -> Result<String, TestError> {
        let path = vs_conf_path(&self.conf_dir, vs_namespace, vs_name);
        let key = (ic_namespace.to_string(), ic_pod_name.to_string(), path);

        Ok(match self.files.read().get(&key) {
            Some(conf) => conf.clone(),
            None => format!("cat: {}: No such file or directory\n", key.2),
        })
    }
}
