use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use inmuebles_api::config::database::DatabaseConfig;
use inmuebles_api::config::environment::EnvironmentConfig;
use inmuebles_api::create_app;
use inmuebles_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🏠 API de Inmuebles");
    info!("===================");

    let config = EnvironmentConfig::from_env();
    let db_config = DatabaseConfig::from_env();
    info!("🗄️ Base de datos: {}", db_config.masked_url());

    let app = create_app(AppState::new(config.clone(), db_config));

    let addr: SocketAddr = config.server_addr().parse()?;
    info!("🌐 Servidor corriendo en el puerto {}...", config.port);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /inmuebles    - Listado con filtros year/city/status");
    info!("   GET  /swagger.yaml - Especificación de la API");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
