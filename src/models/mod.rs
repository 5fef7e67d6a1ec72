//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema MySQL
//! de inmuebles con las convenciones estándar.

pub mod property;
