//! Repositorio de inmuebles
//!
//! Construye y ejecuta la consulta parametrizada del listado: estado vigente
//! por inmueble más los filtros de igualdad que lleguen en la petición.

use sqlx::MySqlConnection;

use crate::dto::listing_dto::ListingFilters;
use crate::models::property::Listing;
use crate::utils::errors::AppError;

/// Consulta base: el estado vigente se resuelve con una subconsulta
/// correlacionada de MAX(update_date). Si dos filas comparten la fecha
/// máxima no hay desempate definido; gana la fila que devuelva el motor.
const BASE_QUERY: &str = r#"
SELECT
    p.address,
    p.city,
    p.price,
    p.description,
    s.name AS status
FROM property p
INNER JOIN status_history sh ON sh.property_id = p.id
INNER JOIN status s ON s.id = sh.status_id
WHERE sh.update_date = (
    SELECT MAX(update_date)
    FROM status_history
    WHERE property_id = p.id
)
AND s.name IN ('pre_venta', 'en_venta', 'vendido')
AND p.address IS NOT NULL
AND p.city IS NOT NULL
AND p.price IS NOT NULL
AND p.year IS NOT NULL
"#;

/// Construir la consulta SQL según los filtros suministrados.
/// Los valores van siempre como parámetros enlazados, nunca interpolados.
pub fn build_listing_query(filters: &ListingFilters) -> String {
    let mut query = String::from(BASE_QUERY);

    if filters.year.is_some() {
        query.push_str(" AND p.year = ?");
    }
    if filters.city.is_some() {
        query.push_str(" AND p.city = ?");
    }
    if filters.status.is_some() {
        query.push_str(" AND s.name = ?");
    }

    query
}

/// Ejecutar la consulta sobre una conexión abierta y devolver todas las filas
pub async fn fetch_listings(
    conn: &mut MySqlConnection,
    filters: &ListingFilters,
) -> Result<Vec<Listing>, AppError> {
    let sql = build_listing_query(filters);

    let mut query = sqlx::query_as::<_, Listing>(&sql);

    if let Some(year) = filters.year {
        query = query.bind(year);
    }
    if let Some(city) = &filters.city {
        query = query.bind(city.clone());
    }
    if let Some(status) = filters.status {
        query = query.bind(status.as_str());
    }

    let listings = query.fetch_all(conn).await?;

    Ok(listings)
}
