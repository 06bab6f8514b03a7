//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use cart_server::config::CartConfig;
use cart_server::http::HttpServer;
use cart_server::lifecycle::Shutdown;
use cart_server::view::CartView;
use cart_server::CartStore;

pub const TEMPLATE: &str =
    "<ul data-count=\"{{count}}\">{{#items}}<li>{{position}}|{{item_number}}|{{comment}}</li>{{/items}}</ul>";

/// A running server on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<CartStore>,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the cart server with the given view.
pub async fn start_server(view: Arc<dyn CartView>) -> TestServer {
    let mut config = CartConfig::default();
    config.listener.port = 0;

    let listener = tokio::net::TcpListener::bind(config.listener.bind_address())
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, view);
    let store = server.store();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        store,
        shutdown,
    }
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// Unique path in the temp directory for this test.
#[allow(dead_code)]
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cart_{}_{}", name, std::process::id()))
}
