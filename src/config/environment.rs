//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del proceso: puerto de escucha
//! y ruta del archivo swagger.yaml servido estáticamente.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub swagger_path: String,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            swagger_path: env::var("SWAGGER_PATH").unwrap_or_else(|_| "swagger.yaml".to_string()),
        }
    }

    /// Dirección de escucha del servidor
    pub fn server_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
