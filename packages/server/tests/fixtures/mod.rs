//! Integration test fixtures.

use std::time::Duration;

use chanoma_server::ServerConfig;

/// A relay server running on its own port for one test.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Spawn the server on the given port and wait until it accepts
    /// connections. Each test uses a distinct port so tests can run in
    /// parallel.
    pub async fn start(port: u16) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            public_dir: "public".into(),
        };

        tokio::spawn(async move {
            if let Err(e) = chanoma_server::run(config).await {
                panic!("test server failed: {e}");
            }
        });

        let server = Self { port };
        server.wait_until_ready().await;
        server
    }

    async fn wait_until_ready(&self) {
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("server on port {} did not become ready", self.port);
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    #[allow(dead_code)] // only the WebSocket test binary uses this
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}
