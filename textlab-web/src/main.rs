//! Servidor web Axum do TextLab: dashboard HTML e API JSON de análise de texto

mod app;
mod chart;
mod config;
mod view;

use std::sync::Arc;

use textlab_core::AnalyzerRegistry;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::{router, AppState};
use crate::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("❌ Configuração inválida: {}", err);
            std::process::exit(1);
        }
    };

    let registry = Arc::new(AnalyzerRegistry::new(&config.models));
    if config.preload_models {
        registry.preload();
    }

    let app = router(AppState {
        registry,
        default_text: config.default_text.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind.as_str())
        .await
        .expect("não foi possível abrir o endereço de escuta");
    info!("🚀 Servidor TextLab iniciado em http://{}", config.bind);
    axum::serve(listener, app).await.expect("servidor encerrado com erro");
}
