use axum::{routing::get, Router};
use salon_admin_backend::{
    config::{get_config, init_config},
    routes,
    store::firebase::FirebaseStore,
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = Arc::new(FirebaseStore::new(config.firebase_database_url.clone()));
    let app_state = AppState::new(store);

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/superdashboard/users",
            get(routes::superdashboard::list_users),
        )
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
