//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación
//! de los filtros de consulta.

pub mod errors;
pub mod validation;
