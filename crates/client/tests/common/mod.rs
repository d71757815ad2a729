use axum::Router;
use turfdesk_client::MarketplaceClient;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}")
}

/// A client pointed at a freshly spawned stub.
pub async fn client_for(router: Router, token: Option<&str>) -> MarketplaceClient {
    let base_url = spawn_stub(router).await;
    MarketplaceClient::new(base_url, token.map(str::to_string))
}
