//! In-process mock of the profile backend
//!
//! Serves the fixture documents for `KNOWN_ORCID`, a 500 for `BROKEN_ORCID`
//! and 404 for everything else, on an ephemeral localhost port.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use super::fixtures::load_response_fixture;

pub const KNOWN_ORCID: &str = "0000-0002-1825-0097";
pub const BROKEN_ORCID: &str = "0000-0000-0000-000X";
pub const KNOWN_EMAIL: &str = "josiah@brown.edu";
pub const KNOWN_PASSWORD: &str = "s3cret";
/// Account whose sign-in reply carries a non-numeric user id
pub const LEGACY_EMAIL: &str = "legacy@brown.edu";

/// Name searches always answer with this many hits, more than any client
/// should display.
pub const SEARCH_HITS: usize = 15;

/// Start the mock backend and return its base URL.
pub async fn spawn() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    format!("http://{}", addr)
}

fn router() -> Router {
    Router::new()
        .route("/orcid/search/name", get(search_by_name))
        .route("/orcid/{id}/name", get(author_name))
        .route("/orcid/{id}/all", get(profile))
        .route("/orcid/{id}/metrics", get(metrics))
        .route("/orcid/{id}/stats", get(stats))
        .route("/orcid/{id}/works/filter_by_citations", get(by_citations))
        .route("/orcid/{id}/works/filter_by_keyword", get(by_keyword))
        .route("/orcid/{id}/export/xml", get(export_xml))
        .route("/works/publication/{*doi}", get(publication))
        .route("/signin", post(sign_in))
        .route("/signup", post(sign_up))
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "ORCID não encontrado"})),
    )
        .into_response()
}

/// Fixture for the known researcher, 500 for the broken one.
fn researcher(id: &str, fixture: &str) -> Response {
    match id {
        KNOWN_ORCID => Json(load_response_fixture(fixture)).into_response(),
        BROKEN_ORCID => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "ORCID API indisponível"})),
        )
            .into_response(),
        _ => not_found(),
    }
}

async fn author_name(Path(id): Path<String>) -> Response {
    if id == KNOWN_ORCID {
        Json(json!({"full_name": "Josiah Carberry"})).into_response()
    } else {
        not_found()
    }
}

async fn search_by_name(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let query = params.get("query").cloned().unwrap_or_default();
    let hits: Vec<Value> = (0..SEARCH_HITS)
        .map(|i| {
            json!({
                "orcid": format!("0000-0001-0000-{:04}", i),
                "full_name": format!("{} {}", query, i),
            })
        })
        .collect();
    Json(Value::Array(hits))
}

async fn profile(Path(id): Path<String>) -> Response {
    researcher(&id, "profile.json")
}

async fn metrics(Path(id): Path<String>) -> Response {
    researcher(&id, "metrics.json")
}

async fn stats(Path(id): Path<String>) -> Response {
    researcher(&id, "stats.json")
}

async fn by_citations(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if id != KNOWN_ORCID {
        return researcher(&id, "");
    }
    let mut works = vec![
        json!({"title": "Toward a Unified Theory of High-Energy Metaphysics: Silly String Theory", "year": 2008, "citations": 1100}),
        json!({"title": "The Psychoceramics of Cracked Pots", "year": 2020, "citations": 134}),
    ];
    if params.get("keyword").map(String::as_str) == Some("cracked pots") {
        works.remove(0);
    }
    Json(json!({"works_sorted_by_citations": works})).into_response()
}

async fn by_keyword(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if id != KNOWN_ORCID {
        return researcher(&id, "");
    }
    let keyword = params.get("keyword").cloned().unwrap_or_default();
    Json(json!({
        "works": [
            {"title": format!("Works on {}", keyword), "year": "2019"}
        ]
    }))
    .into_response()
}

async fn export_xml(Path(id): Path<String>) -> Response {
    if id != KNOWN_ORCID {
        return researcher(&id, "");
    }
    (
        [("content-type", "application/xml")],
        format!("<record orcid=\"{}\"/>", id),
    )
        .into_response()
}

async fn publication(Path(doi): Path<String>) -> Response {
    let doi = doi.trim_start_matches('/');
    if doi == "10.5555/12345678" {
        Json(load_response_fixture("publication.json")).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Publicação não encontrada"})),
        )
            .into_response()
    }
}

async fn sign_in(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email == LEGACY_EMAIL {
        return Json(json!({
            "message": "Login realizado",
            "user": {"id": "legacy-7", "name": "Legacy", "email": LEGACY_EMAIL}
        }))
        .into_response();
    }
    if email == KNOWN_EMAIL && password == KNOWN_PASSWORD {
        Json(json!({
            "user": {
                "id": 1,
                "name": "Josiah Carberry",
                "email": KNOWN_EMAIL,
                "created_at": "2024-05-01T12:00:00"
            }
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Email ou senha inválidos"})),
        )
            .into_response()
    }
}

async fn sign_up(Json(body): Json<Value>) -> Response {
    if body["email"].as_str() == Some(KNOWN_EMAIL) {
        return (
            StatusCode::CONFLICT,
            Json(json!({"detail": "Email já cadastrado"})),
        )
            .into_response();
    }
    if body["name"].as_str().map_or(true, str::is_empty) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"loc": ["body", "name"], "msg": "field required"}]})),
        )
            .into_response();
    }
    Json(json!({"message": "Usuário cadastrado com sucesso"})).into_response()
}
