//! Entities owned by the empresa service.
//!
//! These are only ever materialized transiently while a formulario is being
//! enriched. They are never persisted here.

use serde::{Deserialize, Serialize};

/// Provider as returned by `/api/empresa/proveedor/findbyid/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proveedor {
    pub id: i64,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

/// Category as returned by `/api/empresa/categoria/find/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: i64,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Appraiser as returned by `/api/empresa/perito/findbyid/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perito {
    pub id: i64,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proveedor_ignores_unknown_fields() {
        let json = r#"{"id": 4, "nombre": "Acme", "ruc": "179", "email": "a@b.c"}"#;
        let proveedor: Proveedor = serde_json::from_str(json).unwrap();

        assert_eq!(proveedor.id, 4);
        assert_eq!(proveedor.nombre.as_deref(), Some("Acme"));
        assert!(proveedor.telefono.is_none());
    }

    #[test]
    fn perito_accepts_null_fields() {
        let json = r#"{"id": 9, "nombre": null, "direccion": "Quito", "telefono": null}"#;
        let perito: Perito = serde_json::from_str(json).unwrap();

        assert_eq!(perito.direccion.as_deref(), Some("Quito"));
        assert!(perito.nombre.is_none());
    }

    #[test]
    fn categoria_requires_id() {
        let result = serde_json::from_str::<Categoria>(r#"{"descripcion": "Obras"}"#);
        assert!(result.is_err());
    }
}
