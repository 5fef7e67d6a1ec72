//! Modelos del listado de inmuebles
//!
//! Este módulo contiene los modelos que mapean las filas del esquema MySQL
//! (property + status_history + status) a la respuesta del API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estados de venta admitidos en los resultados
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    PreVenta,
    EnVenta,
    Vendido,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreVenta => "pre_venta",
            Self::EnVenta => "en_venta",
            Self::Vendido => "vendido",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pre_venta" => Some(Self::PreVenta),
            "en_venta" => Some(Self::EnVenta),
            "vendido" => Some(Self::Vendido),
            _ => None,
        }
    }
}

/// Fila devuelta por la consulta de inmuebles
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Listing {
    pub address: String,
    pub city: String,
    /// DECIMAL en MySQL; se serializa como su representación en texto
    pub price: Decimal,
    pub description: Option<String>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_status_round_trip() {
        for name in ["pre_venta", "en_venta", "vendido"] {
            let status = PropertyStatus::parse(name).unwrap();
            assert_eq!(status.as_str(), name);
        }
        assert!(PropertyStatus::parse("alquiler").is_none());
        assert!(PropertyStatus::parse("").is_none());
    }

    #[test]
    fn test_property_status_serde() {
        let json = serde_json::to_string(&PropertyStatus::EnVenta).unwrap();
        assert_eq!(json, "\"en_venta\"");

        let status: PropertyStatus = serde_json::from_str("\"pre_venta\"").unwrap();
        assert_eq!(status, PropertyStatus::PreVenta);
    }

    #[test]
    fn test_listing_serializa_cinco_claves() {
        let listing = Listing {
            address: "Calle 123".to_string(),
            city: "Bogotá".to_string(),
            price: Decimal::from(500_000_000_i64),
            description: Some("Inmueble en excelente estado".to_string()),
            status: "en_venta".to_string(),
        };

        let value = serde_json::to_value(&listing).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 5);
        for key in ["address", "city", "price", "description", "status"] {
            assert!(object.contains_key(key), "falta la clave {}", key);
        }

        assert_eq!(object["address"], "Calle 123");
        assert_eq!(object["city"], "Bogotá");
        // El precio DECIMAL viaja como texto, igual que en el API original
        assert_eq!(object["price"], "500000000");
        assert_eq!(object["description"], "Inmueble en excelente estado");
        assert_eq!(object["status"], "en_venta");
    }

    #[test]
    fn test_listing_descripcion_nula() {
        let listing = Listing {
            address: "Carrera 7".to_string(),
            city: "Cali".to_string(),
            price: Decimal::from(120_000_000_i64),
            description: None,
            status: "vendido".to_string(),
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert!(value["description"].is_null());
    }
}
