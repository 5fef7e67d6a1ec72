//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través del router
//! de Axum. Solo contiene configuración inmutable: cada petición abre y
//! cierra su propia conexión, así que no hay estado mutable compartido.

use crate::config::database::DatabaseConfig;
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub db_config: DatabaseConfig,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, db_config: DatabaseConfig) -> Self {
        Self { config, db_config }
    }
}
