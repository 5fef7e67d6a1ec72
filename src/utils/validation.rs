//! Utilidades de validación
//!
//! Este módulo valida los filtros `year`, `city` y `status` del endpoint
//! de inmuebles. Cada regla produce su mensaje fijo en español.

use chrono::{Datelike, Local};
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::property::PropertyStatus;
use crate::utils::errors::AppError;

pub const MSG_YEAR_INVALID: &str = "El filtro de año no es válido.";
pub const MSG_YEAR_FUTURE: &str = "El año no puede ser superior al año actual.";
pub const MSG_CITY_INVALID: &str = "El filtro de ciudad contiene caracteres no permitidos.";
pub const MSG_STATUS_INVALID: &str = "El filtro de estado no es válido.";
pub const MSG_QUERY_INVALID: &str = "Los parámetros de consulta no son válidos.";

lazy_static! {
    // Letras (ASCII y todo Latin-1; los dos saltos excluyen × y ÷) y
    // espacios; sin dígitos, puntuación ni símbolos
    static ref CITY_RE: Regex =
        Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ ]+$").expect("regex de ciudad inválido");
}

/// Validar el filtro de año: entero y no posterior al año actual
pub fn validate_year(value: &str) -> Result<i32, AppError> {
    let year: i32 = value
        .parse()
        .map_err(|_| AppError::Validacion(MSG_YEAR_INVALID.to_string()))?;

    let current_year = Local::now().year();
    if year > current_year {
        return Err(AppError::Validacion(MSG_YEAR_FUTURE.to_string()));
    }

    Ok(year)
}

/// Validar el filtro de ciudad: solo letras y espacios
pub fn validate_city(value: &str) -> Result<String, AppError> {
    if !CITY_RE.is_match(value) {
        return Err(AppError::Validacion(MSG_CITY_INVALID.to_string()));
    }
    Ok(value.to_string())
}

/// Validar el filtro de estado contra los valores permitidos
pub fn validate_status(value: &str) -> Result<PropertyStatus, AppError> {
    PropertyStatus::parse(value).ok_or_else(|| AppError::Validacion(MSG_STATUS_INVALID.to_string()))
}
