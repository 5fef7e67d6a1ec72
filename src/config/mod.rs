//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos y las variables
//! de entorno del servicio.

pub mod database;
pub mod environment;
