//! Conexión a MySQL
//!
//! Una conexión por petición: se abre con la configuración del proceso y se
//! cierra al terminar la petición. Sin pool, sin reintentos.

use sqlx::{Connection, MySqlConnection};
use tracing::{error, info};

use crate::config::database::DatabaseConfig;
use crate::utils::errors::AppError;

/// Abrir una conexión a la base de datos
pub async fn create_connection(config: &DatabaseConfig) -> Result<MySqlConnection, AppError> {
    match MySqlConnection::connect(&config.connection_url()).await {
        Ok(conn) => {
            info!("✅ Conexión exitosa a la base de datos");
            Ok(conn)
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            Err(AppError::Database(e))
        }
    }
}

/// Cerrar la conexión al terminar la petición
pub async fn close_connection(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        error!("❌ Error cerrando la conexión: {}", e);
    }
}
