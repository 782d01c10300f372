use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use plank_planner::planner::CutPlanner;
use plank_planner::types::{CutList, PlanConfig};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

async fn analyze(Json(config): Json<PlanConfig>) -> Result<Json<CutList>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&config).unwrap_or_default(),
        "POST /analyze"
    );

    if config.plank_full_length <= 0.0 || config.plank_width <= 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "plank dimensions must be positive".to_string(),
        ));
    }
    if config.saw_kerf < 0.0 || config.min_cut_length < 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "kerf and minimum cut length must be non-negative".to_string(),
        ));
    }

    let plan = CutPlanner::new(config).plan();
    Ok(Json(plan))
}

#[tokio::main]
async fn main() {
    let _sentry = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
