//! Rutas del listado de inmuebles

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::database::connection::{close_connection, create_connection};
use crate::dto::listing_dto::ListingQuery;
use crate::models::property::Listing;
use crate::repositories::property_repository;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::MSG_QUERY_INVALID;

pub fn create_listing_router() -> Router<AppState> {
    Router::new().route("/inmuebles", get(get_listings))
}

/// GET /inmuebles - listar inmuebles con filtros opcionales year/city/status
async fn get_listings(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Listing>>> {
    // Un query string que ni siquiera se puede deserializar (p. ej. un
    // percent-encoding que no es UTF-8) también responde {"error": ...}
    let Query(params) =
        params.map_err(|_| AppError::Validacion(MSG_QUERY_INVALID.to_string()))?;

    // La validación va antes de abrir la conexión: un filtro inválido
    // responde 400 sin tocar la base de datos
    let filters = ListingQuery::from_pairs(params).validate()?;

    let mut conn = create_connection(&state.db_config).await?;
    let result = property_repository::fetch_listings(&mut conn, &filters).await;
    close_connection(conn).await;

    let listings = result?;
    info!("📋 {} inmuebles devueltos", listings.len());

    Ok(Json(listings))
}
