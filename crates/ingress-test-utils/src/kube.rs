//! Access to the cluster through `kubectl`.
//!
//! The suite only needs two things from Kubernetes: the events of a namespace
//! and the contents of files inside the ingress controller pod. Both are read
//! by shelling out to `kubectl`, so the suite runs against whatever context the
//! caller's kubeconfig points at.

use async_trait::async_trait;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::assertions::MISSING_CONF_MARKER;
use crate::config::SuiteConfig;
use crate::error::TestError;
use crate::events::{parse_event_list, Event};

/// Source of the configuration the controller rendered for a VirtualServer.
#[async_trait]
pub trait VsConfigSource: Send + Sync {
    /// Returns the raw text read from the controller pod. A missing file is
    /// not an error here: the text then carries the shell's diagnostic.
    async fn vs_nginx_template_conf(
        &self,
        vs_namespace: &str,
        vs_name: &str,
        ic_pod_name: &str,
        ic_namespace: &str,
    ) -> Result<String, TestError>;
}

/// Path of the rendered configuration of a VirtualServer inside the pod.
pub fn vs_conf_path(conf_dir: &str, vs_namespace: &str, vs_name: &str) -> String {
    format!(
        "{}/vs_{}_{}.conf",
        conf_dir.trim_end_matches('/'),
        vs_namespace,
        vs_name
    )
}

/// `kubectl`-backed cluster client.
#[derive(Debug, Clone, Default)]
pub struct KubeApis {
    config: SuiteConfig,
}

impl KubeApis {
    pub fn new(config: SuiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Lists the events of a namespace in the order the API returns them.
    pub async fn list_events(&self, namespace: &str) -> Result<Vec<Event>, TestError> {
        let args = ["get", "events", "-n", namespace, "-o", "json"];
        let output = self.run(&args).await?;
        if !output.status.success() {
            return Err(kubectl_failure(&args, &output));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_event_list(&stdout)
    }

    /// Reads a file from a pod with `cat`.
    ///
    /// Returns stdout followed by stderr. A missing file is not an error and
    /// yields "No such file or directory" as text; any other failure of the
    /// exec (unknown pod, denied access, unreachable API server) is.
    pub async fn read_pod_file(
        &self,
        path: &str,
        pod_name: &str,
        pod_namespace: &str,
    ) -> Result<String, TestError> {
        let args = ["exec", "-n", pod_namespace, pod_name, "--", "cat", path];
        let output = self.run(&args).await?;
        if !output.status.success() {
            // Only a missing file is an answer; an unreachable pod is not.
            if !String::from_utf8_lossy(&output.stderr).contains(MISSING_CONF_MARKER) {
                return Err(kubectl_failure(&args, &output));
            }
            debug!(path, pod_name, status = ?output.status, "cat exited unsuccessfully");
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }

    async fn run(&self, args: &[&str]) -> Result<Output, TestError> {
        debug!(kubectl = %self.config.kubectl_path, ?args, "running kubectl");

        let child = Command::new(&self.config.kubectl_path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                warn!(error = %e, kubectl = %self.config.kubectl_path, "failed to spawn kubectl");
                TestError::Io(e)
            })?;

        match tokio::time::timeout(self.config.exec_timeout, child.wait_with_output()).await {
            Ok(output) => Ok(output?),
            Err(_) => {
                warn!(?args, timeout = ?self.config.exec_timeout, "kubectl timed out");
                Err(TestError::Timeout(format!(
                    "kubectl {} did not finish within {:?}",
                    args.join(" "),
                    self.config.exec_timeout
                )))
            }
        }
    }
}

fn kubectl_failure(args: &[&str], output: &Output) -> TestError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    warn!(?args, %stderr, "kubectl failed");
    TestError::Kubectl {
        command: args.join(" "),
        stderr,
    }
}

#[async_trait]
impl VsConfigSource for KubeApis {
    async fn vs_nginx_template_conf(
        &self,
        vs_namespace: &str,
        vs_name: &str,
        ic_pod_name: &str,
        ic_namespace: &str,
    ) -> Result<String, TestError> {
        let path = vs_conf_path(&self.config.conf_dir, vs_namespace, vs_name);
        self.read_pod_file(&path, ic_pod_name, ic_namespace).await
    }
}
