//! A storefront bound to an ephemeral local port.

use threadline_storefront::catalog::Catalog;
use threadline_storefront::config::StorefrontConfig;
use threadline_storefront::state::AppState;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Running storefront plus a client pointed at it.
///
/// The server task is aborted when this value is dropped.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    pub state: AppState,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the mock catalogue with an empty cart.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn() -> Self {
        Self::spawn_with(AppState::new(StorefrontConfig::default(), Catalog::mock())).await
    }

    /// Serve `state`.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn_with(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read test listener address");

        let app = threadline_storefront::app(state.clone());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            state,
            handle,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
