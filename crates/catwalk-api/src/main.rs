//! catwalk API service.
//!
//! - REST endpoints under /v1 (cats, users, achievements)
//! - Admission pipeline: working-hours gate + scoped rate counter
//! - Two-rule access model selected per action kind
//! - Shaped collection reads (filter / search / ordering)

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use catwalk_api::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("catwalk.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg)
        .await
        .expect("app state build failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "catwalk-api starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
