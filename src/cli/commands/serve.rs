//! HTTP API server for integration with other systems.
//!
//! Provides REST endpoints for video lookups, transcripts, summaries and
//! study material generation.

use crate::cli::Output;
use crate::config::Settings;
use crate::study::{
    filter_flashcards, generate_flashcards, generate_quiz, CardCategory, CardDifficulty,
    Flashcard, Question,
};
use crate::summary::build_summary;
use crate::youtube::{extract_video_id, Comment, VideoMetadata, VideoProvider, YoutubeDataApi};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    provider: YoutubeDataApi,
    settings: Settings,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let provider = YoutubeDataApi::new(settings.api_key()?);

    let state = Arc::new(AppState { provider, settings });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/search", get(search))
        .route("/videos/{video_id}", get(get_video))
        .route("/videos/{video_id}/comments", get(get_comments))
        .route("/videos/{video_id}/related", get(get_related))
        .route("/videos/{video_id}/transcript", get(get_transcript))
        .route("/videos/{video_id}/summary", get(get_summary))
        .route("/videos/{video_id}/quiz", get(get_quiz))
        .route("/videos/{video_id}/flashcards", get(get_flashcards))
        .route("/channels/{channel_id}", get(get_channel))
        .route("/trending", get(get_trending))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("pugg API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET /health");
    Output::kv("Search", "GET /search?query=...");
    Output::kv("Video", "GET /videos/{video_id}");
    Output::kv("Comments", "GET /videos/{video_id}/comments");
    Output::kv("Related", "GET /videos/{video_id}/related");
    Output::kv("Transcript", "GET /videos/{video_id}/transcript");
    Output::kv("Summary", "GET /videos/{video_id}/summary");
    Output::kv("Quiz", "GET /videos/{video_id}/quiz");
    Output::kv("Flash cards", "GET /videos/{video_id}/flashcards");
    Output::kv("Channel", "GET /channels/{channel_id}");
    Output::kv("Trending", "GET /trending");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct SearchParams {
    query: String,
    #[serde(default = "default_search_results")]
    max_results: usize,
}

fn default_search_results() -> usize {
    10
}

#[derive(Deserialize)]
struct CommentParams {
    #[serde(default = "default_comment_results")]
    max_results: usize,
}

fn default_comment_results() -> usize {
    100
}

#[derive(Deserialize)]
struct RelatedParams {
    #[serde(default = "default_related_results")]
    max_results: usize,
}

fn default_related_results() -> usize {
    25
}

#[derive(Deserialize)]
struct TrendingParams {
    region: Option<String>,
    #[serde(default = "default_trending_results")]
    max_results: usize,
}

fn default_trending_results() -> usize {
    50
}

#[derive(Deserialize)]
struct SummaryParams {
    #[serde(default = "default_include_comments")]
    include_comments: bool,
}

fn default_include_comments() -> bool {
    true
}

#[derive(Deserialize)]
struct QuizParams {
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct FlashcardParams {
    max_cards: Option<usize>,
    /// Comma-separated category names.
    categories: Option<String>,
    difficulty: Option<String>,
    seed: Option<u64>,
}

#[derive(Serialize)]
struct VideoListResponse {
    total: usize,
    videos: Vec<VideoMetadata>,
}

#[derive(Serialize)]
struct CommentListResponse {
    total: usize,
    comments: Vec<Comment>,
}

#[derive(Serialize)]
struct SummaryResponse {
    video_id: String,
    summary: String,
}

#[derive(Serialize)]
struct QuizResponse {
    video_id: String,
    title: String,
    questions: Vec<Question>,
}

#[derive(Serialize)]
struct FlashcardsResponse {
    video_id: String,
    total: usize,
    cards: Vec<Flashcard>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    match state
        .provider
        .search_videos(&params.query, params.max_results)
        .await
    {
        Ok(videos) => Json(VideoListResponse {
            total: videos.len(),
            videos,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    let video_id = match extract_video_id(&video_id) {
        Some(id) => id,
        None => return bad_request(format!("Invalid video ID: {}", video_id)),
    };

    match state.provider.fetch_video(&video_id).await {
        Ok(Some(video)) => Json(video).into_response(),
        Ok(None) => not_found(format!("Video not found: {}", video_id)),
        Err(e) => internal_error(e),
    }
}

async fn get_comments(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    Query(params): Query<CommentParams>,
) -> impl IntoResponse {
    let video_id = match extract_video_id(&video_id) {
        Some(id) => id,
        None => return bad_request(format!("Invalid video ID: {}", video_id)),
    };

    match state
        .provider
        .fetch_comments(&video_id, params.max_results)
        .await
    {
        Ok(comments) => Json(CommentListResponse {
            total: comments.len(),
            comments,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

async fn get_related(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    Query(params): Query<RelatedParams>,
) -> impl IntoResponse {
    let video_id = match extract_video_id(&video_id) {
        Some(id) => id,
        None => return bad_request(format!("Invalid video ID: {}", video_id)),
    };

    match state
        .provider
        .fetch_related(&video_id, params.max_results)
        .await
    {
        Ok(videos) => Json(VideoListResponse {
            total: videos.len(),
            videos,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

async fn get_transcript(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    let video_id = match extract_video_id(&video_id) {
        Some(id) => id,
        None => return bad_request(format!("Invalid video ID: {}", video_id)),
    };

    match state.provider.fetch_transcript(&video_id).await {
        Ok(Some(transcript)) => Json(transcript).into_response(),
        Ok(None) => not_found(format!("No transcript available for video: {}", video_id)),
        Err(e) => internal_error(e),
    }
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    let video_id = match extract_video_id(&video_id) {
        Some(id) => id,
        None => return bad_request(format!("Invalid video ID: {}", video_id)),
    };

    match build_summary(&state.provider, &video_id, params.include_comments).await {
        Ok(Some(summary)) => Json(SummaryResponse { video_id, summary }).into_response(),
        Ok(None) => not_found(format!("Video not found: {}", video_id)),
        Err(e) => internal_error(e),
    }
}

async fn get_quiz(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    Query(params): Query<QuizParams>,
) -> impl IntoResponse {
    let video_id = match extract_video_id(&video_id) {
        Some(id) => id,
        None => return bad_request(format!("Invalid video ID: {}", video_id)),
    };

    let video = match state.provider.fetch_video(&video_id).await {
        Ok(Some(video)) => video,
        Ok(None) => return not_found(format!("Video not found: {}", video_id)),
        Err(e) => return internal_error(e),
    };

    let transcript = match state.provider.fetch_transcript(&video_id).await {
        Ok(transcript) => transcript,
        Err(e) => {
            tracing::warn!("Transcript fetch failed: {}", e);
            None
        }
    };

    let mut rng = rng_from_seed(params.seed);
    let questions = generate_quiz(&video, transcript.as_ref(), &mut rng);

    Json(QuizResponse {
        video_id,
        title: video.title,
        questions,
    })
    .into_response()
}

async fn get_flashcards(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    Query(params): Query<FlashcardParams>,
) -> impl IntoResponse {
    let video_id = match extract_video_id(&video_id) {
        Some(id) => id,
        None => return bad_request(format!("Invalid video ID: {}", video_id)),
    };

    let categories = match params.categories.as_deref() {
        Some(raw) => match parse_categories(raw) {
            Ok(categories) => Some(categories),
            Err(message) => return bad_request(message),
        },
        None => None,
    };
    let difficulty = match params.difficulty.as_deref() {
        Some(raw) => match raw.parse::<CardDifficulty>() {
            Ok(difficulty) => Some(difficulty),
            Err(message) => return bad_request(message),
        },
        None => None,
    };

    let transcript = match state.provider.fetch_transcript(&video_id).await {
        Ok(Some(transcript)) => transcript,
        Ok(None) => {
            return not_found(format!("No transcript available for video: {}", video_id))
        }
        Err(e) => return internal_error(e),
    };

    let max_cards = params
        .max_cards
        .unwrap_or(state.settings.study.default_max_cards);
    let mut rng = rng_from_seed(params.seed);
    let cards = match generate_flashcards(&transcript, max_cards, &mut rng) {
        Ok(cards) => cards,
        Err(e) => return internal_error(e),
    };
    let cards = filter_flashcards(cards, categories.as_deref(), difficulty);

    Json(FlashcardsResponse {
        video_id,
        total: cards.len(),
        cards,
    })
    .into_response()
}

async fn get_channel(
    State(state): State<Arc<AppState>>,
    Path(channel_id): Path<String>,
) -> impl IntoResponse {
    match state.provider.fetch_channel(&channel_id).await {
        Ok(Some(channel)) => Json(channel).into_response(),
        Ok(None) => not_found(format!("Channel not found: {}", channel_id)),
        Err(e) => internal_error(e),
    }
}

async fn get_trending(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendingParams>,
) -> impl IntoResponse {
    let region = params
        .region
        .unwrap_or_else(|| state.settings.youtube.region.clone());

    match state
        .provider
        .fetch_trending(&region, params.max_results)
        .await
    {
        Ok(videos) => Json(VideoListResponse {
            total: videos.len(),
            videos,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

// === Helpers ===

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message })).into_response()
}

fn internal_error(e: impl std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Parse a comma-separated list of category names.
fn parse_categories(raw: &str) -> Result<Vec<CardCategory>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<CardCategory>)
        .collect()
}

/// Seeded RNG when a seed was supplied, entropy otherwise.
fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
