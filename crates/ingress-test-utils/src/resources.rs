use serde::{Deserialize, Serialize};

/// A VirtualServer deployed by a test fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualServerSetup {
    pub namespace: String,
    pub vs_name: String,
    #[serde(default)]
    pub vs_host: Option<String>,
    #[serde(default)]
    pub backend_url: Option<String>,
}

impl VirtualServerSetup {
    pub fn new(namespace: impl Into<String>, vs_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            vs_name: vs_name.into(),
            vs_host: None,
            backend_url: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.vs_host = Some(host.into());
        self
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }
}
