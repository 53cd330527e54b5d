// Ingress E2E Tests
//
// This crate contains end-to-end tests for the ingress controller test utilities

/// Utility functions and shared test infrastructure for E2E tests
pub mod utils {
    use ingress_test_utils::{Event, VirtualServerSetup};
    use serde_json::{json, Value};
    use once_cell::sync::Lazy;
    use tracing_subscriber::EnvFilter;

    /// Namespace the ingress controller is deployed into.
    pub const IC_NAMESPACE: &str = "nginx-ingress";

    /// Name of the ingress controller pod.
    pub const IC_POD_NAME: &str = "nginx-ingress-7d9c6b8f5-x2k4q";

    static TRACING: Lazy<()> = Lazy::new(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });

    /// Installs a tracing subscriber honoring `RUST_LOG`, once per test binary.
    pub fn init_tracing() {
        Lazy::force(&TRACING);
    }

    /// The VirtualServer deployed by the "virtual-server" fixture.
    pub fn virtual_server_setup(namespace: &str) -> VirtualServerSetup {
        VirtualServerSetup::new(namespace, "virtual-server")
            .with_host("virtual-server.example.com")
            .with_backend_url("http://virtual-server.example.com/backend1")
    }

    pub fn vs_event_text(setup: &VirtualServerSetup) -> String {
        format!(
            "Configuration for {}/{} was added or updated",
            setup.namespace, setup.vs_name
        )
    }

    pub fn vs_rejected_text(setup: &VirtualServerSetup) -> String {
        format!("VirtualServer {}/{} was rejected with error:", setup.namespace, setup.vs_name)
    }

    /// Builds the JSON `kubectl get events -o json` prints for these events.
    pub fn event_list_json(events: &[Event]) -> String {
        let items: Vec<Value> = events
            .iter()
            .map(|event| {
                json!({
                    "message": event.message,
                    "count": event.count,
                    "type": "Normal",
                    "involvedObject": {"kind": "VirtualServer"}
                })
            })
            .collect();

        json!({"apiVersion": "v1", "kind": "EventList", "items": items}).to_string()
    }
}
