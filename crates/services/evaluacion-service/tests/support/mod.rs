//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use common::{AppError, AppResult};
use domain::{
    Categoria, EstadoFormulario, FormularioEvaluacion, FormularioInput, Perito, Proveedor,
};
use evaluacion_service_lib::client::EmpresaClient;
use evaluacion_service_lib::repository::{EstadoFormularioRepository, FormularioRepository};

/// Formulario store backed by a BTreeMap, so iteration follows key order.
#[derive(Default)]
pub struct InMemoryFormularios {
    rows: Mutex<BTreeMap<i64, FormularioEvaluacion>>,
    next_id: Mutex<i64>,
}

impl InMemoryFormularios {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a row directly, bypassing the service (remote references included).
    pub fn seed(&self, mut formulario: FormularioEvaluacion) -> i64 {
        let id = self.allocate_id();
        formulario.id = Some(id);
        self.rows.lock().unwrap().insert(id, formulario);
        id
    }

    pub fn snapshot(&self) -> Vec<FormularioEvaluacion> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

#[async_trait]
impl FormularioRepository for InMemoryFormularios {
    async fn find_all(&self) -> AppResult<Vec<FormularioEvaluacion>> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<FormularioEvaluacion>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, mut formulario: FormularioEvaluacion) -> AppResult<FormularioEvaluacion> {
        // Transient remote entities never reach storage
        formulario.proveedor = None;
        formulario.categoria = None;
        formulario.perito = None;

        let id = match formulario.id {
            Some(id) if self.rows.lock().unwrap().contains_key(&id) => id,
            Some(_) => return Err(AppError::NotFound),
            None => self.allocate_id(),
        };
        formulario.id = Some(id);
        self.rows.lock().unwrap().insert(id, formulario.clone());
        Ok(formulario)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

/// Read-only status table.
pub struct InMemoryEstados {
    rows: HashMap<i64, EstadoFormulario>,
}

impl InMemoryEstados {
    pub fn with(estados: Vec<EstadoFormulario>) -> Arc<Self> {
        Arc::new(Self {
            rows: estados.into_iter().map(|e| (e.id, e)).collect(),
        })
    }
}

#[async_trait]
impl EstadoFormularioRepository for InMemoryEstados {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<EstadoFormulario>> {
        Ok(self.rows.get(&id).cloned())
    }
}

/// Empresa client for tests that must never reach the empresa service.
pub struct UnreachableEmpresa;

#[async_trait]
impl EmpresaClient for UnreachableEmpresa {
    async fn find_proveedor(&self, _id: i64) -> AppResult<Proveedor> {
        Err(AppError::service_unavailable("empresa"))
    }

    async fn find_categoria(&self, _id: i64) -> AppResult<Categoria> {
        Err(AppError::service_unavailable("empresa"))
    }

    async fn find_perito(&self, _id: i64) -> AppResult<Perito> {
        Err(AppError::service_unavailable("empresa"))
    }
}

pub fn abierto() -> EstadoFormulario {
    EstadoFormulario {
        id: 1,
        nombre: "ABIERTO".to_string(),
    }
}

pub fn cerrado() -> EstadoFormulario {
    EstadoFormulario {
        id: 2,
        nombre: "CERRADO".to_string(),
    }
}

pub fn input(numero: &str, estado_formulario_id: Option<i64>) -> FormularioInput {
    FormularioInput {
        fecha: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        numero: numero.to_string(),
        evaluacion: 5,
        estado_formulario_id,
    }
}

/// A stored formulario pointing at proveedor 10, categoria 20 and perito 30.
pub fn referenced_formulario() -> FormularioEvaluacion {
    let mut formulario = FormularioEvaluacion::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        "F-REF".to_string(),
        4,
    );
    formulario.estado_formulario = Some(abierto());
    formulario.proveedor_id = Some(10);
    formulario.categoria_id = Some(20);
    formulario.perito_id = Some(30);
    formulario
}

pub fn proveedor() -> Proveedor {
    Proveedor {
        id: 10,
        nombre: Some("Constructora Andes".to_string()),
        telefono: Some("02-111-1111".to_string()),
        direccion: Some("Av. Proveedor 1".to_string()),
    }
}

pub fn categoria() -> Categoria {
    Categoria {
        id: 20,
        descripcion: Some("Obra civil".to_string()),
    }
}

pub fn perito() -> Perito {
    Perito {
        id: 30,
        nombre: Some("Lucía Perito".to_string()),
        direccion: Some("Calle Perito 3".to_string()),
        telefono: Some("09-333-3333".to_string()),
    }
}
