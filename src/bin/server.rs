use std::sync::Arc;

use life_mapping::context::LifeMapContext;
use life_mapping::env_config::{init_tracing, ServerConfig};
use life_mapping::server::create_router;
use life_mapping::storage::load_rule_table;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(
        port = config.port,
        variant = %config.variant,
        "starting life-mapping API server"
    );

    let mut ctx = LifeMapContext::new(config.variant);
    if let Some(path) = &config.rules_path {
        match load_rule_table(path) {
            Ok(table) => ctx = ctx.with_table(config.variant, table),
            Err(e) => {
                tracing::error!(error = %e, "failed to load rule table");
                std::process::exit(1);
            }
        }
    } else {
        tracing::info!("using built-in rule tables");
    }

    let app = create_router(Arc::new(ctx));

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(port = config.port, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Server is running on port {}. Press Ctrl+C to stop.",
        config.port
    );
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }

    tracing::info!("stopping server");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
