//! Ruta del archivo estático swagger.yaml

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_swagger_router() -> Router<AppState> {
    Router::new().route("/swagger.yaml", get(get_swagger))
}

/// GET /swagger.yaml - servir la especificación estática desde disco
async fn get_swagger(State(state): State<AppState>) -> AppResult<Response> {
    // Si el archivo no existe o no se puede leer, el error de IO
    // se convierte en un 500 con cuerpo genérico
    let contents = tokio::fs::read_to_string(&state.config.swagger_path).await?;

    let response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/yaml")],
        contents,
    )
        .into_response();

    Ok(response)
}
