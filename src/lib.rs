//! API de Inmuebles
//!
//! Servicio HTTP de solo lectura que expone el listado de inmuebles con su
//! estado de venta vigente, filtrable por año, ciudad y estado.

pub mod config;
pub mod database;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::listing_routes::create_listing_router())
        .merge(routes::swagger_routes::create_swagger_router())
        // El diseño original dejaba las rutas desconocidas sin respuesta;
        // aquí responden 404 con cuerpo JSON
        .fallback(unrouted)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Rutas no reconocidas: 404 con cuerpo JSON
async fn unrouted() -> AppError {
    AppError::NotFound
}
