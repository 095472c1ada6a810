//! Shared utilities for integration tests.

use phone_catalog::config::ServiceConfig;
use phone_catalog::http::HttpServer;
use phone_catalog::lifecycle::Shutdown;

/// A catalog server running on an OS-assigned port.
pub struct TestServer {
    pub base_url: String,
    shutdown: Shutdown,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service with the given config, returning its base URL.
pub async fn spawn_server(config: ServiceConfig) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        shutdown,
    }
}

/// Start the service with default configuration.
#[allow(dead_code)]
pub async fn spawn_default_server() -> TestServer {
    spawn_server(ServiceConfig::default()).await
}

/// HTTP client that ignores proxy environment variables.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
