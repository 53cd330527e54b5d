//! Mock implementation of the VsConfigSource trait.

use async_trait::async_trait;
use mockall::mock;

use crate::error::TestError;
use crate::kube::VsConfigSource;

// Generate the mock implementation
mock! {
    pub VsConfigSource {}

    #[async_trait]
    impl VsConfigSource for VsConfigSource {
        async fn vs_nginx_template_conf(
            &self,
            vs_namespace: &str,
            vs_name: &str,
            ic_pod_name: &str,
            ic_namespace: &str,
        ) -> Result<String, TestError>;
    }
}

/// Creates a mock that answers every fetch with `conf`.
pub fn create_mock_vs_config_source(conf: &str) -> MockVsConfigSource {
    let conf = conf.to_string();
    let mut mock = MockVsConfigSource::new();

    mock.expect_vs_nginx_template_conf()
        .returning(move |_, _, _, _| Ok(conf.clone()));

    mock
}
