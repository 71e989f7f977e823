mod analysis;
mod config;
mod errors;
mod feedback;
mod keywords;
mod language;
mod routes;
mod scoring;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::{Config, EmbeddingBackend};
use crate::feedback::FeedbackClient;
use crate::keywords::lexical::{LexicalConfig, LexicalExtractor};
use crate::language::LanguageDetector;
use crate::routes::build_router;
use crate::scoring::embedder::{Embedder, HashEmbedder, OllamaEmbedder};
use crate::scoring::AtsScorer;
use crate::skills::pipeline::PipelineRegistry;
use crate::skills::vocabulary::VocabularyExtensions;
use crate::skills::SkillExtractor;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Skill pipelines (built-in vocabularies + optional extension file)
    let extensions = match &config.skill_vocabulary_path {
        Some(path) => {
            info!("Loading skill vocabulary extensions from {}", path.display());
            VocabularyExtensions::load(path)?
        }
        None => VocabularyExtensions::default(),
    };
    let pipelines = Arc::new(PipelineRegistry::with_extensions(&extensions));

    // Embedder for the semantic score
    let embedder: Arc<dyn Embedder> = match config.embedding_backend {
        EmbeddingBackend::Hash => Arc::new(HashEmbedder::default()),
        EmbeddingBackend::Ollama => Arc::new(OllamaEmbedder::new(
            reqwest::Client::new(),
            &config.ollama_url,
            &config.embedding_model,
        )),
    };
    info!("Embedder initialized (model: {})", embedder.model_name());

    let analyzer = Analyzer::new(
        LanguageDetector::new(),
        LexicalExtractor::new(LexicalConfig::default()),
        SkillExtractor::new(pipelines),
        AtsScorer::new(embedder),
    );

    let feedback = FeedbackClient::new(
        &config.ollama_url,
        &config.feedback_model,
        config.feedback_timeout,
    )?;
    info!(
        "Feedback client initialized (model: {}, enabled by default: {})",
        config.feedback_model, config.enable_feedback
    );

    // Build app state
    let state = AppState {
        analyzer: Arc::new(analyzer),
        feedback,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
