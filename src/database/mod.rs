//! Módulo de base de datos
//!
//! Maneja la conexión por petición a MySQL.

pub mod connection;
