//! Conversions between the formulario entity, its input and its output.
//!
//! Everything here is pure: status lookups happen in the service, which
//! passes the resolved [`EstadoFormulario`] in.

use chrono::Utc;

use crate::error::{DomainError, DomainResult};
use crate::formulario::{
    CategoriaResponse, EstadoFormulario, EstadoFormularioResponse, FormularioEvaluacion,
    FormularioInput, FormularioResponse, PeritoResponse, ProveedorResponse,
};

/// Render a formulario for the client.
///
/// The provider shape takes `telefono` and `direccion` from the appraiser,
/// so a formulario carrying a provider without an appraiser cannot be
/// rendered.
pub fn to_response(formulario: &FormularioEvaluacion) -> DomainResult<FormularioResponse> {
    let estado_formulario = formulario
        .estado_formulario
        .as_ref()
        .map(|estado| EstadoFormularioResponse {
            id: estado.id,
            nombre: estado.nombre.clone(),
        });

    let proveedor = match (&formulario.proveedor, &formulario.perito) {
        (Some(proveedor), Some(perito)) => Some(ProveedorResponse {
            id: proveedor.id,
            nombre: proveedor.nombre.clone(),
            telefono: perito.telefono.clone(),
            direccion: perito.direccion.clone(),
        }),
        (Some(proveedor), None) => {
            return Err(DomainError::internal(format!(
                "proveedor {} cannot be rendered without a perito",
                proveedor.id
            )))
        }
        (None, _) => None,
    };

    let perito = formulario.perito.as_ref().map(|perito| PeritoResponse {
        id: perito.id,
        nombre: perito.nombre.clone(),
        direccion: perito.direccion.clone(),
        telefono: perito.telefono.clone(),
    });

    let categoria = formulario
        .categoria
        .as_ref()
        .map(|categoria| CategoriaResponse {
            id: categoria.id,
            descripcion: categoria.descripcion.clone(),
        });

    Ok(FormularioResponse {
        id: formulario.id,
        fecha: formulario.fecha,
        numero: formulario.numero.clone(),
        evaluacion: formulario.evaluacion,
        estado_formulario,
        proveedor,
        perito,
        categoria,
    })
}

/// Build a new formulario from client input.
pub fn to_entity(input: FormularioInput, estado: Option<EstadoFormulario>) -> FormularioEvaluacion {
    let mut formulario = FormularioEvaluacion::new(
        input.fecha.unwrap_or_else(Utc::now),
        input.numero,
        input.evaluacion,
    );
    formulario.estado_formulario = estado;
    formulario
}

/// Overwrite the writable fields of an existing formulario.
///
/// The status is only replaced when one was resolved; the identifier and
/// the remote references are left untouched.
pub fn apply_update(
    formulario: &mut FormularioEvaluacion,
    input: FormularioInput,
    estado: Option<EstadoFormulario>,
) {
    formulario.fecha = input.fecha.unwrap_or_else(Utc::now);
    formulario.numero = input.numero;
    formulario.evaluacion = input.evaluacion;
    if let Some(estado) = estado {
        formulario.estado_formulario = Some(estado);
    }
}
