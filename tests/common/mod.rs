//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use contacts_service::config::ServiceConfig;
use contacts_service::lifecycle::Shutdown;
use contacts_service::{HttpServer, InMemoryContactRepository};

/// A running service bound to an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub contacts: InMemoryContactRepository,
    pub shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service over `contacts` (which may already hold data).
pub async fn start_service(contacts: InMemoryContactRepository) -> TestService {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(ServiceConfig::default(), Arc::new(contacts.clone()));
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        addr,
        contacts,
        shutdown,
    }
}

#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
