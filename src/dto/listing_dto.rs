//! DTOs del endpoint de inmuebles

use crate::models::property::PropertyStatus;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_city, validate_status, validate_year};

/// Parámetros de consulta crudos de GET /inmuebles
#[derive(Debug, Default)]
pub struct ListingQuery {
    pub year: Option<String>,
    pub city: Option<String>,
    pub status: Option<String>,
}

/// Filtros ya validados, listos para la consulta SQL
#[derive(Debug, Default, PartialEq)]
pub struct ListingFilters {
    pub year: Option<i32>,
    pub city: Option<String>,
    pub status: Option<PropertyStatus>,
}

impl ListingQuery {
    /// Construir desde pares clave-valor del query string.
    /// Si un parámetro se repite, gana el primer valor.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "year" if query.year.is_none() => query.year = Some(value),
                "city" if query.city.is_none() => query.city = Some(value),
                "status" if query.status.is_none() => query.status = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Validar los filtros en el orden año → ciudad → estado.
    /// Un valor vacío cuenta como filtro ausente.
    pub fn validate(self) -> Result<ListingFilters, AppError> {
        let mut filters = ListingFilters::default();

        if let Some(year) = self.year.as_deref().filter(|v| !v.is_empty()) {
            filters.year = Some(validate_year(year)?);
        }
        if let Some(city) = self.city.as_deref().filter(|v| !v.is_empty()) {
            filters.city = Some(validate_city(city)?);
        }
        if let Some(status) = self.status.as_deref().filter(|v| !v.is_empty()) {
            filters.status = Some(validate_status(status)?);
        }

        Ok(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{MSG_CITY_INVALID, MSG_YEAR_INVALID};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_primer_valor_gana() {
        let query = ListingQuery::from_pairs(pairs(&[
            ("status", "en_venta"),
            ("status", "vendido"),
            ("year", "2020"),
        ]));

        assert_eq!(query.status.as_deref(), Some("en_venta"));
        assert_eq!(query.year.as_deref(), Some("2020"));
        assert_eq!(query.city, None);
    }

    #[test]
    fn test_from_pairs_ignora_claves_desconocidas() {
        let query = ListingQuery::from_pairs(pairs(&[("page", "2"), ("city", "Cali")]));
        assert_eq!(query.city.as_deref(), Some("Cali"));
        assert_eq!(query.year, None);
    }

    #[test]
    fn test_validate_sin_filtros() {
        let filters = ListingQuery::default().validate().unwrap();
        assert_eq!(filters, ListingFilters::default());
    }

    #[test]
    fn test_validate_valor_vacio_cuenta_como_ausente() {
        let query = ListingQuery::from_pairs(pairs(&[("year", ""), ("city", "")]));
        let filters = query.validate().unwrap();
        assert_eq!(filters, ListingFilters::default());
    }

    #[test]
    fn test_validate_todos_los_filtros() {
        let query = ListingQuery::from_pairs(pairs(&[
            ("year", "2019"),
            ("city", "Bogotá"),
            ("status", "vendido"),
        ]));
        let filters = query.validate().unwrap();

        assert_eq!(filters.year, Some(2019));
        assert_eq!(filters.city.as_deref(), Some("Bogotá"));
        assert_eq!(filters.status, Some(PropertyStatus::Vendido));
    }

    #[test]
    fn test_validate_el_anio_se_valida_primero() {
        // Año y ciudad inválidos a la vez: debe ganar el mensaje del año
        let query = ListingQuery::from_pairs(pairs(&[("year", "abcd"), ("city", "Bogota1")]));
        match query.validate().unwrap_err() {
            AppError::Validacion(msg) => assert_eq!(msg, MSG_YEAR_INVALID),
            other => panic!("error inesperado: {:?}", other),
        }
    }

    #[test]
    fn test_validate_ciudad_invalida() {
        let query = ListingQuery::from_pairs(pairs(&[("city", "Bogota1")]));
        match query.validate().unwrap_err() {
            AppError::Validacion(msg) => assert_eq!(msg, MSG_CITY_INVALID),
            other => panic!("error inesperado: {:?}", other),
        }
    }
}
