//! Formulario service tests.

mod support;

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use common::AppError;
use evaluacion_service_lib::client::MockEmpresaClient;
use evaluacion_service_lib::repository::{
    MockEstadoFormularioRepository, MockFormularioRepository,
};
use evaluacion_service_lib::service::{FormularioManager, FormularioService};

use support::*;

fn manager_over(
    formularios: Arc<InMemoryFormularios>,
    empresa: impl evaluacion_service_lib::client::EmpresaClient + 'static,
) -> FormularioManager {
    FormularioManager::new(
        formularios,
        InMemoryEstados::with(vec![abierto(), cerrado()]),
        Arc::new(empresa),
    )
}

fn ok_empresa() -> MockEmpresaClient {
    let mut empresa = MockEmpresaClient::new();
    empresa
        .expect_find_proveedor()
        .with(eq(10))
        .returning(|_| Ok(proveedor()));
    empresa
        .expect_find_categoria()
        .with(eq(20))
        .returning(|_| Ok(categoria()));
    empresa
        .expect_find_perito()
        .with(eq(30))
        .returning(|_| Ok(perito()));
    empresa
}

// =============================================================================
// CRUD
// =============================================================================

#[tokio::test]
async fn test_create_then_get_returns_same_output() {
    let service = manager_over(InMemoryFormularios::new(), UnreachableEmpresa);

    let created = service
        .create_formulario(input("F-1", Some(1)))
        .await
        .unwrap();
    let id = created.id.expect("created formulario has an id");

    let fetched = service.get_formulario(id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_links_existing_estado() {
    let service = manager_over(InMemoryFormularios::new(), UnreachableEmpresa);

    let created = service
        .create_formulario(input("F-1", Some(2)))
        .await
        .unwrap();

    let estado = created.estado_formulario.expect("estado linked");
    assert_eq!(estado.id, 2);
    assert_eq!(estado.nombre, "CERRADO");
    assert_eq!(created.numero, "F-1");
    assert_eq!(created.evaluacion, 5);
}

#[tokio::test]
async fn test_create_with_unknown_estado_leaves_it_unset() {
    let service = manager_over(InMemoryFormularios::new(), UnreachableEmpresa);

    let created = service
        .create_formulario(input("F-1", Some(99)))
        .await
        .unwrap();

    assert!(created.estado_formulario.is_none());
}

#[tokio::test]
async fn test_create_defaults_missing_fecha() {
    let service = manager_over(InMemoryFormularios::new(), UnreachableEmpresa);
    let before = Utc::now();

    let mut request = input("F-1", None);
    request.fecha = None;
    let created = service.create_formulario(request).await.unwrap();

    assert!(created.fecha >= before);
    assert!(created.fecha <= Utc::now());
}

#[tokio::test]
async fn test_plain_reads_never_carry_remote_shapes() {
    let formularios = InMemoryFormularios::new();
    let id = formularios.seed(referenced_formulario());
    let service = manager_over(formularios, UnreachableEmpresa);

    let fetched = service.get_formulario(id).await.unwrap();
    assert!(fetched.proveedor.is_none());
    assert!(fetched.perito.is_none());
    assert!(fetched.categoria.is_none());
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let service = manager_over(InMemoryFormularios::new(), UnreachableEmpresa);

    let result = service.get_formulario(42).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_list_follows_store_order() {
    let service = manager_over(InMemoryFormularios::new(), UnreachableEmpresa);
    assert!(service.list_formularios().await.unwrap().is_empty());

    for numero in ["F-1", "F-2", "F-3"] {
        service.create_formulario(input(numero, None)).await.unwrap();
    }

    let numeros: Vec<String> = service
        .list_formularios()
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.numero)
        .collect();
    assert_eq!(numeros, vec!["F-1", "F-2", "F-3"]);
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_references() {
    let formularios = InMemoryFormularios::new();
    let id = formularios.seed(referenced_formulario());
    let service = manager_over(formularios.clone(), UnreachableEmpresa);

    let mut changes = input("F-REF-2", Some(2));
    changes.fecha = None;
    changes.evaluacion = 1;
    let before = Utc::now();
    let updated = service.update_formulario(id, changes).await.unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.numero, "F-REF-2");
    assert_eq!(updated.evaluacion, 1);
    assert!(updated.fecha >= before);
    assert_eq!(updated.estado_formulario.unwrap().id, 2);

    let stored = formularios.snapshot().pop().unwrap();
    assert_eq!(stored.proveedor_id, Some(10));
    assert_eq!(stored.categoria_id, Some(20));
    assert_eq!(stored.perito_id, Some(30));
}

#[tokio::test]
async fn test_update_with_unknown_estado_keeps_current_one() {
    let formularios = InMemoryFormularios::new();
    let id = formularios.seed(referenced_formulario());
    let service = manager_over(formularios, UnreachableEmpresa);

    let updated = service
        .update_formulario(id, input("F-REF", Some(99)))
        .await
        .unwrap();

    assert_eq!(updated.estado_formulario.unwrap().id, abierto().id);
}

#[tokio::test]
async fn test_update_missing_does_not_touch_store() {
    let mut repo = MockFormularioRepository::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .returning(|_| Ok(None));
    repo.expect_save().never();

    let mut estados = MockEstadoFormularioRepository::new();
    estados.expect_find_by_id().never();

    let service = FormularioManager::new(
        Arc::new(repo),
        Arc::new(estados),
        Arc::new(MockEmpresaClient::new()),
    );

    let result = service.update_formulario(7, input("F-7", Some(1))).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_missing_is_a_no_op() {
    let formularios = InMemoryFormularios::new();
    formularios.seed(referenced_formulario());
    let service = manager_over(formularios.clone(), UnreachableEmpresa);

    let deleted = tokio_test::assert_ok!(service.delete_formulario(404).await);

    assert!(!deleted);
    assert_eq!(formularios.snapshot().len(), 1);
}

#[tokio::test]
async fn test_delete_existing_removes_row() {
    let formularios = InMemoryFormularios::new();
    let id = formularios.seed(referenced_formulario());
    let service = manager_over(formularios.clone(), UnreachableEmpresa);

    assert!(tokio_test::assert_ok!(service.delete_formulario(id).await));
    assert!(formularios.snapshot().is_empty());
    assert!(matches!(
        service.get_formulario(id).await,
        Err(AppError::NotFound)
    ));
}

// =============================================================================
// Enrichment
// =============================================================================

#[tokio::test]
async fn test_enrich_attaches_all_remote_shapes() {
    let formularios = InMemoryFormularios::new();
    let id = formularios.seed(referenced_formulario());
    let service = manager_over(formularios, ok_empresa());

    let enriched = service.enrich_formulario(id).await.unwrap();

    let proveedor = enriched.proveedor.expect("proveedor attached");
    let perito = enriched.perito.expect("perito attached");
    let categoria = enriched.categoria.expect("categoria attached");

    assert_eq!(proveedor.id, 10);
    assert_eq!(proveedor.nombre.as_deref(), Some("Constructora Andes"));
    // Contact data on the provider shape comes from the appraiser
    assert_eq!(proveedor.telefono, perito.telefono);
    assert_eq!(proveedor.direccion, perito.direccion);
    assert_ne!(proveedor.telefono, support::proveedor().telefono);

    assert_eq!(perito.id, 30);
    assert_eq!(categoria.descripcion.as_deref(), Some("Obra civil"));
    assert_eq!(enriched.estado_formulario.unwrap().id, 1);
}

#[tokio::test]
async fn test_enrich_is_not_written_back() {
    let formularios = InMemoryFormularios::new();
    let id = formularios.seed(referenced_formulario());
    let service = manager_over(formularios.clone(), ok_empresa());

    service.enrich_formulario(id).await.unwrap();

    let stored = formularios.snapshot().pop().unwrap();
    assert!(!stored.is_enriched());
    assert!(service.get_formulario(id).await.unwrap().proveedor.is_none());
}

#[tokio::test]
async fn test_enrich_missing_formulario_is_not_found() {
    let service = manager_over(InMemoryFormularios::new(), MockEmpresaClient::new());

    let result = service.enrich_formulario(1).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_enrich_fails_when_any_lookup_fails() {
    let formularios = InMemoryFormularios::new();
    let id = formularios.seed(referenced_formulario());

    let mut empresa = MockEmpresaClient::new();
    empresa
        .expect_find_proveedor()
        .returning(|_| Ok(proveedor()));
    empresa
        .expect_find_categoria()
        .returning(|_| Err(AppError::remote_call("categoria 20 lookup returned 404 Not Found")));
    empresa.expect_find_perito().returning(|_| Ok(perito()));

    let service = manager_over(formularios, empresa);

    let result = service.enrich_formulario(id).await;
    assert!(matches!(result, Err(AppError::RemoteCall(_))));
}

#[tokio::test]
async fn test_enrich_without_reference_is_rejected() {
    let formularios = InMemoryFormularios::new();
    let mut formulario = referenced_formulario();
    formulario.perito_id = None;
    let id = formularios.seed(formulario);

    let mut empresa = MockEmpresaClient::new();
    empresa.expect_find_proveedor().never();
    empresa.expect_find_categoria().never();
    empresa.expect_find_perito().never();

    let service = manager_over(formularios, empresa);

    let result = service.enrich_formulario(id).await;
    assert!(matches!(result, Err(AppError::Validation(ref msg)) if msg.contains("perito_id")));
}
