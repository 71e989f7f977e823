use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Upper bound for `TOP_K` and per-request `top_k`.
pub const MAX_TOP_K: usize = 1000;

/// Which `Embedder` backs the semantic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingBackend {
    Hash,
    Ollama,
}

impl FromStr for EmbeddingBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hash" => Ok(Self::Hash),
            "ollama" => Ok(Self::Ollama),
            other => bail!("EMBEDDING_BACKEND must be 'hash' or 'ollama', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub top_k: usize,
    pub embedding_backend: EmbeddingBackend,
    pub ollama_url: String,
    pub feedback_model: String,
    pub embedding_model: String,
    pub feedback_timeout: Duration,
    pub enable_feedback: bool,
    pub skill_vocabulary_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let top_k = var("TOP_K", "10")
            .parse::<usize>()
            .context("TOP_K must be a positive integer")?;
        if top_k == 0 || top_k > MAX_TOP_K {
            bail!("TOP_K must be between 1 and {MAX_TOP_K}");
        }

        let feedback_timeout_secs = var("FEEDBACK_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .context("FEEDBACK_TIMEOUT_SECS must be a whole number of seconds")?;
        if feedback_timeout_secs == 0 {
            bail!("FEEDBACK_TIMEOUT_SECS must be at least 1");
        }

        Ok(Config {
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            top_k,
            embedding_backend: var("EMBEDDING_BACKEND", "hash").parse()?,
            ollama_url: var("OLLAMA_URL", "http://localhost:11434"),
            feedback_model: var("FEEDBACK_MODEL", "mistral"),
            embedding_model: var("EMBEDDING_MODEL", "all-minilm"),
            feedback_timeout: Duration::from_secs(feedback_timeout_secs),
            enable_feedback: parse_bool(&var("ENABLE_FEEDBACK", "false"))
                .context("ENABLE_FEEDBACK must be true or false")?,
            skill_vocabulary_path: lookup("SKILL_VOCABULARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: '{other}'"),
    }
}
