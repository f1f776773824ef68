//! Rotas HTTP: dashboard HTML + API JSON.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use serde_json::json;
use textlab_core::{
    analyze,
    corpus::demo_texts,
    glossary::{entries, TagKind},
    AnalysisError, AnalysisRequest, AnalysisResult, AnalyzerRegistry, AnalyzerSelection, Session,
};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::view::DashboardTemplate;

/// Estado compartilhado da aplicação
pub struct AppState {
    pub registry: Arc<AnalyzerRegistry>,
    pub default_text: String,
}

/// Erros de uma requisição, convertidos em resposta JSON `{"error": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("falha ao renderizar o dashboard: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Analysis(AnalysisError::EmptyInput) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("❌ {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Campos do formulário do dashboard. Checkbox desmarcado não é enviado.
#[derive(Deserialize)]
struct DashboardForm {
    #[serde(default)]
    text: String,
    use_lexical: Option<String>,
    use_pipeline: Option<String>,
}

#[derive(Deserialize)]
struct AnalyzeBody {
    text: String,
    #[serde(default)]
    use_lexical: Option<bool>,
    #[serde(default)]
    use_pipeline: Option<bool>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/glossary", get(glossary_handler))
        .route("/api/analyzers", get(analyzers_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Dashboard vazio (estado Idle)
async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let session = Session::new(state.default_text.clone());
    Ok(Html(DashboardTemplate::from_session(&session).render()?))
}

/// Envio do formulário: analisa e mostra o resultado, ou volta ao Idle com o erro
async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DashboardForm>,
) -> Result<Html<String>, AppError> {
    let selection = AnalyzerSelection {
        use_lexical: form.use_lexical.is_some(),
        use_pipeline: form.use_pipeline.is_some(),
    };

    let mut session = Session::new(state.default_text.clone());
    let view = match session.submit(&state.registry, &form.text, selection) {
        Ok(()) => {
            if let Some(result) = session.result() {
                log_result(result);
            }
            DashboardTemplate::from_session(&session)
        }
        Err(err @ AnalysisError::EmptyInput) => {
            DashboardTemplate::idle(&form.text, selection, Some(err.to_string()))
        }
        Err(err) => return Err(err.into()),
    };
    Ok(Html(view.render()?))
}

/// Análise via JSON
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeBody>,
) -> Result<Json<AnalysisResult>, AppError> {
    let selection = AnalyzerSelection {
        use_lexical: body.use_lexical.unwrap_or(true),
        use_pipeline: body.use_pipeline.unwrap_or(true),
    };
    let request = AnalysisRequest::new(body.text, selection)?;
    let result = analyze(&request, &state.registry);
    log_result(&result);
    Ok(Json(result))
}

/// Tabelas de descrição das tags POS e dos rótulos de entidade
async fn glossary_handler() -> impl IntoResponse {
    let table = |kind| {
        entries(kind)
            .into_iter()
            .map(|(tag, description)| json!({ "tag": tag, "description": description }))
            .collect::<Vec<_>>()
    };
    Json(json!({
        "part_of_speech": table(TagKind::PartOfSpeech),
        "entity_label": table(TagKind::EntityLabel),
    }))
}

async fn analyzers_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.registry.status())
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(domain, text)| json!({ "domain": domain, "text": text }))
        .collect();
    Json(texts)
}

fn log_result(result: &AnalysisResult) {
    info!(
        "📝 Análise concluída: {} caracteres, {} seções, {} avisos em {} ms",
        result.statistics.character_count,
        result.sections.len(),
        result.notices.len(),
        result.processing_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use textlab_core::corpus::DEFAULT_TEXT;
    use tower::ServiceExt;

    const SAMPLE: &str = "Apple Inc. was founded by Steve Jobs in California on April 1, 1976.";

    fn app() -> Router {
        router(AppState {
            registry: Arc::new(AnalyzerRegistry::builtin()),
            default_text: DEFAULT_TEXT.to_string(),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_is_idle() {
        let (status, html) = send(get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Steve Jobs in California"));
        assert!(!html.contains("Métricas"));
    }

    #[tokio::test]
    async fn test_form_submit_displays_result() {
        let (status, html) =
            send(form_request("text=Steve+Jobs+founded+Apple+in+California.&use_pipeline=on")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Métricas"));
        assert!(html.contains("PERSON"));
        assert!(html.contains("id=\"pipeline\""));
        assert!(!html.contains("id=\"lexical\""));
    }

    #[tokio::test]
    async fn test_form_blank_text_shows_error() {
        let (status, html) = send(form_request("text=+++&use_lexical=on")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("o texto de entrada está vazio"));
        assert!(!html.contains("Métricas"));
    }

    #[tokio::test]
    async fn test_api_analyze() {
        let (status, body) = send(json_request(json!({ "text": SAMPLE }))).await;
        assert_eq!(status, StatusCode::OK);

        let result: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(result["sections"].as_array().unwrap().len(), 2);
        assert_eq!(result["entity_count"], 4);
        assert_eq!(result["statistics"]["word_count"], 13);
        let rows = result["sections"][1]["entities"]["rows"].as_array().unwrap();
        assert!(rows.iter().any(|row| row["entity"] == "Steve Jobs" && row["source"] == "gazetteer"));
    }

    #[tokio::test]
    async fn test_api_analyze_without_analyzers() {
        let body = json!({ "text": SAMPLE, "use_lexical": false, "use_pipeline": false });
        let (status, body) = send(json_request(body)).await;
        assert_eq!(status, StatusCode::OK);

        let result: Value = serde_json::from_str(&body).unwrap();
        assert!(result["sections"].as_array().unwrap().is_empty());
        assert!(result["entity_count"].is_null());
    }

    #[tokio::test]
    async fn test_api_analyze_blank_text() {
        let (status, body) = send(json_request(json!({ "text": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["error"], "o texto de entrada está vazio");
    }

    #[tokio::test]
    async fn test_glossary() {
        let (status, body) = send(get_request("/api/glossary")).await;
        assert_eq!(status, StatusCode::OK);

        let glossary: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(glossary["entity_label"].as_array().unwrap().len(), 18);
        assert!(glossary["part_of_speech"]
            .as_array()
            .unwrap()
            .iter()
            .any(|entry| entry["tag"] == "NNP"));
    }

    #[tokio::test]
    async fn test_analyzers_status() {
        let (status, body) = send(get_request("/api/analyzers")).await;
        assert_eq!(status, StatusCode::OK);

        let analyzers: Value = serde_json::from_str(&body).unwrap();
        let analyzers = analyzers.as_array().unwrap();
        assert_eq!(analyzers.len(), 2);
        assert!(analyzers.iter().all(|a| a["available"] == true));
    }

    #[tokio::test]
    async fn test_demo_texts() {
        let (status, body) = send(get_request("/demo-texts")).await;
        assert_eq!(status, StatusCode::OK);

        let texts: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(texts.as_array().unwrap().len(), 7);
        assert_eq!(texts[0]["domain"], "Exemplo");
        assert_eq!(texts[0]["text"], DEFAULT_TEXT);
    }
}
