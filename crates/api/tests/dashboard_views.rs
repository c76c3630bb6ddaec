//! Integration tests for the role-shaped dashboard aggregation.

mod common;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::{admin, body_json, build_test_app, get as http_get, spawn_mock, technician};

#[derive(Clone)]
struct MockDashboard {
    tasks: serde_json::Value,
    open_entries: serde_json::Value,
    view_reads: Arc<AtomicUsize>,
}

fn status_row(id: i64, tecnico_nome: Option<&str>, api: &str, teste: &str, doc: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "tecnico_id": tecnico_nome.map(|_| "7f3b0a52-0000-0000-0000-000000000001"),
        "tecnico_nome": tecnico_nome,
        "status_api": api,
        "status_teste": teste,
        "status_documentacao": doc,
        "modulo": "Operacao"
    })
}

async fn mock_tasks(
    State(state): State<MockDashboard>,
    Query(_params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    Json(state.tasks.clone())
}

async fn mock_open(State(state): State<MockDashboard>) -> Json<serde_json::Value> {
    Json(state.open_entries.clone())
}

async fn mock_weekly_screens(State(state): State<MockDashboard>) -> Json<serde_json::Value> {
    state.view_reads.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!([{
        "tecnico_id": "7f3b0a52-0000-0000-0000-000000000001",
        "tecnico_nome": "Ana Souza",
        "telas_finalizadas": 3
    }]))
}

async fn mock_weekly_hours(State(state): State<MockDashboard>) -> Json<serde_json::Value> {
    state.view_reads.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!([{
        "tecnico_id": "7f3b0a52-0000-0000-0000-000000000001",
        "tecnico_nome": "Ana Souza",
        "meta_semanal": 40.0,
        "horas_trabalhadas": 42.5
    }]))
}

fn mock_router(state: MockDashboard) -> Router {
    Router::new()
        .route("/rest/v1/controle_api", get(mock_tasks))
        .route("/rest/v1/apontamento_tempo", get(mock_open))
        .route("/rest/v1/vw_produtividade_telas_semana", get(mock_weekly_screens))
        .route("/rest/v1/vw_horas_tecnico_semana", get(mock_weekly_hours))
        .with_state(state)
}

fn default_mock() -> MockDashboard {
    MockDashboard {
        tasks: serde_json::json!([
            status_row(1, Some("Ana Souza"), "Pendente", "Pendente", "Pendente"),
            status_row(2, Some("Ana Souza"), "Trabalhando", "Pendente", "Pendente"),
            status_row(3, Some("Ana Souza"), "Finalizado", "Finalizado", "Finalizado"),
            status_row(4, None, "Pendente", "Pendente", "Pendente"),
        ]),
        open_entries: serde_json::json!([{ "controle_api_id": 2 }]),
        view_reads: Arc::new(AtomicUsize::new(0)),
    }
}

#[tokio::test]
async fn admin_gets_groups_productivity_and_projection() {
    let mock = default_mock();
    let app = build_test_app(spawn_mock(mock_router(mock.clone())).await);
    app.sessions.sign_in(admin()).unwrap();

    let response = http_get(app.router.clone(), "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["counts"]["total"], 4);
    assert_eq!(data["counts"]["pendentes"], 2);
    assert_eq!(data["counts"]["trabalhando"], 1);
    assert_eq!(data["counts"]["concluidas"], 1);

    // The unassigned bucket never appears in the per-technician view.
    let groups = data["por_tecnico"].as_object().unwrap();
    assert!(groups.contains_key("Ana Souza"));
    assert!(!groups.contains_key("Sem Técnico"));

    // 3 of 5 screens -> exactly 60% -> yellow.
    let telas = &data["produtividade_telas"][0];
    assert_eq!(telas["percent"], 60.0);
    assert_eq!(telas["band"], "yellow");

    // 42.5 of 40 hours -> over target -> green.
    let horas = &data["produtividade_horas"][0];
    assert_eq!(horas["band"], "green");

    // 2 pending + 1 running = 3 items remaining -> a projection exists.
    assert_eq!(data["previsao"]["remaining_items"], 3);
    assert!(data["previsao"]["projected_date"].is_string());
}

#[tokio::test]
async fn technician_gets_only_their_own_counts() {
    let mock = default_mock();
    let app = build_test_app(spawn_mock(mock_router(mock.clone())).await);
    app.sessions.sign_in(technician()).unwrap();

    let response = http_get(app.router.clone(), "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert!(data["counts"]["total"].is_number());
    assert!(data.get("por_tecnico").is_none());
    assert!(data.get("produtividade_telas").is_none());
    assert!(data.get("previsao").is_none());

    // The productivity views are an admin concern; no read happened.
    assert_eq!(mock.view_reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_backlog_has_no_projection() {
    let mock = MockDashboard {
        tasks: serde_json::json!([
            status_row(3, Some("Ana Souza"), "Finalizado", "Finalizado", "Finalizado"),
        ]),
        open_entries: serde_json::json!([]),
        view_reads: Arc::new(AtomicUsize::new(0)),
    };
    let app = build_test_app(spawn_mock(mock_router(mock)).await);
    app.sessions.sign_in(admin()).unwrap();

    let response = http_get(app.router.clone(), "/api/v1/dashboard").await;
    let json = body_json(response).await;

    assert!(json["data"].get("previsao").is_none());
    assert_eq!(json["data"]["counts"]["concluidas"], 1);
}
