/// HTTP JSON API.
///
/// - `GET /api/subjects`: subject listing, always ending with "general"
/// - `GET /api/topics/{subject}`: topic keys of a subject
/// - `POST /api/generate-notes`: synthesize a study-note document
use std::path::Path;

use axum::{
    extract::{rejection::JsonRejection, Path as UrlPath, State},
    routing::{get, post},
    Json, Router,
};
use notes_engine::api::{GenerateNotesParams, GenerateNotesResponse};
use notes_engine::{NoteRequest, NoteSynthesizer, SubjectSummary};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

use crate::error::AppError;

pub fn create_router(synth: NoteSynthesizer, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/subjects", get(list_subjects))
        .route("/api/topics/{subject}", get(list_topics))
        .route("/api/generate-notes", post(generate_notes));

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(synth)
}

async fn list_subjects(State(synth): State<NoteSynthesizer>) -> Json<Vec<SubjectSummary>> {
    Json(synth.list_subjects())
}

async fn list_topics(
    State(synth): State<NoteSynthesizer>,
    UrlPath(subject): UrlPath<String>,
) -> Json<Vec<String>> {
    Json(synth.list_topics(&subject))
}

async fn generate_notes(
    State(synth): State<NoteSynthesizer>,
    payload: Result<Json<GenerateNotesParams>, JsonRejection>,
) -> Result<Json<GenerateNotesResponse>, AppError> {
    let Json(params) = payload?;
    let request = NoteRequest::new(params.subject(), &params.topic, params.note_type())?;
    info!(
        subject = %request.subject,
        topic = %request.topic,
        note_type = %request.style_text,
        "generating notes"
    );

    let notes = tokio::task::spawn_blocking({
        let request = request.clone();
        move || synth.synthesize(&request)
    })
    .await
    .map_err(|e| AppError::Internal(format!("note synthesis aborted: {e}")))?;

    Ok(Json(GenerateNotesResponse {
        success: true,
        notes,
        topic: request.topic,
        subject: request.subject,
        generated_at: chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use notes_engine::random::FixedRandom;
    use notes_engine::KnowledgeBase;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let synth = NoteSynthesizer::with_random(
            Arc::new(KnowledgeBase::builtin()),
            Arc::new(FixedRandom::default()),
        );
        create_router(synth, None)
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_notes(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate-notes")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn subjects_end_with_general() {
        let resp = app()
            .oneshot(Request::get("/api/subjects").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        let subjects = json.as_array().unwrap();
        assert_eq!(subjects.len(), 5);
        assert_eq!(subjects[0]["id"], "mathematics");
        assert_eq!(subjects[4]["id"], "general");
        assert_eq!(subjects[4]["name"], "General Studies");
    }

    #[tokio::test]
    async fn topics_for_known_and_unknown_subjects() {
        let resp = app()
            .oneshot(Request::get("/api/topics/science").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json, serde_json::json!(["physics", "chemistry", "biology"]));

        let resp = app()
            .oneshot(Request::get("/api/topics/cooking").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json, serde_json::json!(["general"]));
    }

    #[tokio::test]
    async fn generate_notes_normalises_request() {
        let resp = app()
            .oneshot(post_notes(
                r#"{"topic": "  Algebra ", "subject": "Mathematics", "note_type": "summary"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["topic"], "algebra");
        assert_eq!(json["subject"], "mathematics");
        assert_eq!(json["notes"]["title"], "Algebra - Complete Study Guide");
        assert_eq!(json["notes"]["subject"], "Mathematics");
        assert_eq!(json["notes"]["sections"][0]["content"][0], "• Variables");
        assert_eq!(json["generated_at"].as_str().unwrap().len(), 19);
    }

    #[tokio::test]
    async fn generate_notes_defaults_to_summary() {
        let resp = app()
            .oneshot(post_notes(r#"{"topic": "calculus", "subject": "mathematics"}"#))
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["notes"]["type"], "Summary");
        assert_eq!(json["notes"]["sections"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn blank_topic_is_rejected() {
        let resp = app()
            .oneshot(post_notes(r#"{"topic": "   ", "subject": "science"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Please enter a topic");
    }

    #[tokio::test]
    async fn malformed_body_gets_json_error() {
        let resp = app().oneshot(post_notes("{not json")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Failed to generate notes. Please try again.");
    }

    #[tokio::test]
    async fn missing_content_type_gets_json_error() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/generate-notes")
            .body(Body::from(r#"{"topic": "algebra"}"#))
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn missing_topic_is_rejected() {
        let resp = app().oneshot(post_notes(r#"{"subject": "science"}"#)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
