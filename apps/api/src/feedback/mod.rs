/// Feedback client — recruiter-style improvement suggestions from a local
/// text-generation service (Ollama `/api/generate`).
///
/// Callers get a plain string either way: `generate_feedback` turns every
/// `FeedbackError` into its user-facing message.
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

use prompts::build_feedback_prompt;

pub const NO_FEEDBACK: &str = "No feedback generated.";

#[derive(Debug, Error, PartialEq)]
pub enum FeedbackError {
    #[error("Feedback service request timed out. Try again.")]
    Timeout,

    #[error("Cannot connect to the feedback service at {url}. Make sure it is running.")]
    Connect { url: String },

    #[error("Feedback service returned status code {0}")]
    Status(u16),

    #[error("Unexpected error: {0}")]
    Other(String),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateChunk {
    response: String,
}

#[derive(Clone)]
pub struct FeedbackClient {
    client: Client,
    base_url: String,
    model: String,
}

impl FeedbackClient {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build feedback HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Feedback text, or the message of whatever went wrong.
    pub async fn generate_feedback(&self, resume_text: &str) -> String {
        match self.try_generate(resume_text).await {
            Ok(feedback) => feedback,
            Err(e) => {
                warn!("Feedback generation failed: {e}");
                e.to_string()
            }
        }
    }

    pub async fn try_generate(&self, resume_text: &str) -> Result<String, FeedbackError> {
        let prompt = build_feedback_prompt(resume_text);
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.model,
                prompt: &prompt,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(FeedbackError::Status(status.as_u16()));
        }

        let raw = response.text().await.map_err(|e| self.classify(e))?;
        let feedback = clean_feedback(&raw);

        debug!(
            "Feedback generated by {}: {} chars",
            self.model,
            feedback.len()
        );

        Ok(feedback)
    }

    fn classify(&self, error: reqwest::Error) -> FeedbackError {
        if error.is_timeout() {
            FeedbackError::Timeout
        } else if error.is_connect() {
            FeedbackError::Connect {
                url: self.base_url.clone(),
            }
        } else {
            FeedbackError::Other(error.to_string())
        }
    }
}

/// Concatenates `response` fields when the body is JSON (single object or
/// NDJSON stream), otherwise keeps the raw text. Lines are trimmed and blank
/// lines dropped.
fn clean_feedback(raw: &str) -> String {
    let chunks: Option<Vec<GenerateChunk>> = raw
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<GenerateChunk>(l).ok())
        .collect();

    let text = match chunks {
        Some(chunks) if !chunks.is_empty() => {
            chunks.into_iter().map(|c| c.response).collect::<String>()
        }
        _ => raw.to_string(),
    };

    let cleaned = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if cleaned.is_empty() {
        NO_FEEDBACK.to_string()
    } else {
        cleaned
    }
}
