use std::net::SocketAddr;

use anyhow::Context;

use joyeria_backend::{
    config::AppConfig, db::connection, firebase::FirebaseApp, logging::init_tracing,
    routes::router, state::AppState,
};

#[tokio::main]
async fn main() {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("failed to load config: {err:#}");
            std::process::exit(1);
        }
    };
    init_tracing(&cfg.logging.rust_log);

    if let Err(err) = run(cfg).await {
        tracing::error!("server failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db_cfg = cfg
        .database
        .as_ref()
        .context("database settings are required (APP_DATABASE__URL)")?;
    let db = connection::connect(db_cfg).await?;

    // A partial Firebase setup is fatal; no setup at all disables it.
    let firebase = FirebaseApp::from_env().context("firebase initialization failed")?;

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .context("invalid general.host/general.port")?;

    let state = AppState::new(cfg, db, firebase);
    let app = router(state);

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
