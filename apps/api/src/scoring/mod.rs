//! ATS scoring — keyword coverage blended with embedding similarity.
//!
//! final = round(KEYWORD_WEIGHT · keyword_score + SEMANTIC_WEIGHT · semantic_score, 2),
//! computed from the already-rounded sub-scores so the reported numbers satisfy it.

pub mod coverage;
pub mod embedder;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::keywords::normalize;
use crate::scoring::embedder::{cosine_similarity, EmbedError, Embedder};

pub const KEYWORD_WEIGHT: f64 = 0.6;
pub const SEMANTIC_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub keyword_score: f64,
    pub semantic_score: f64,
    pub final_score: f64,
    /// Sorted, normalized, a subset of the scored targets.
    pub matched_keywords: Vec<String>,
}

impl ScoreReport {
    pub fn zero() -> Self {
        Self {
            keyword_score: 0.0,
            semantic_score: 0.0,
            final_score: 0.0,
            matched_keywords: Vec::new(),
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn weighted_final(keyword_score: f64, semantic_score: f64) -> f64 {
    round2(KEYWORD_WEIGHT * keyword_score + SEMANTIC_WEIGHT * semantic_score).clamp(0.0, 100.0)
}

/// Normalized, deduplicated targets in sorted order. Empty entries are dropped.
pub fn normalize_targets<S: AsRef<str>>(targets: &[S]) -> Vec<String> {
    targets
        .iter()
        .map(|t| normalize(t.as_ref()))
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub struct AtsScorer {
    embedder: Arc<dyn Embedder>,
}

impl AtsScorer {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    pub async fn score<S: AsRef<str>>(&self, resume_text: &str, targets: &[S]) -> ScoreReport {
        let targets = normalize_targets(targets);
        if targets.is_empty() {
            return ScoreReport::zero();
        }

        let resume_lower = resume_text.to_lowercase();
        let matched_keywords: Vec<String> = targets
            .iter()
            .filter(|t| resume_lower.contains(t.as_str()))
            .cloned()
            .collect();

        let keyword_score =
            round2(matched_keywords.len() as f64 / targets.len() as f64 * 100.0);

        let semantic_score = match self.semantic_similarity(resume_text, &targets.join(" ")).await {
            Ok(similarity) => round2((f64::from(similarity) * 100.0).clamp(0.0, 100.0)),
            Err(e) => {
                warn!(
                    "Semantic similarity via {} failed, scoring it as 0: {e}",
                    self.embedder.model_name()
                );
                0.0
            }
        };

        let final_score = weighted_final(keyword_score, semantic_score);

        debug!(
            "ATS score: keyword={keyword_score} semantic={semantic_score} final={final_score} ({}/{} matched)",
            matched_keywords.len(),
            targets.len()
        );

        ScoreReport {
            keyword_score,
            semantic_score,
            final_score,
            matched_keywords,
        }
    }

    async fn semantic_similarity(&self, resume_text: &str, targets: &str) -> Result<f32, EmbedError> {
        let resume = self.embedder.embed(resume_text).await?;
        let target = self.embedder.embed(targets).await?;
        cosine_similarity(&resume, &target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::embedder::HashEmbedder;
    use async_trait::async_trait;

    struct FailingEmbedder;

    #[async_trait]
    impl Embedder for FailingEmbedder {
        fn model_name(&self) -> &str {
            "failing"
        }

        async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbedError> {
            Err(EmbedError::EmptyEmbedding)
        }
    }

    /// Always returns the same vector, so every pair is maximally similar.
    struct ConstantEmbedder;

    #[async_trait]
    impl Embedder for ConstantEmbedder {
        fn model_name(&self) -> &str {
            "constant"
        }

        async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbedError> {
            Ok(vec![0.5, 0.5, 0.5])
        }
    }

    fn hash_scorer() -> AtsScorer {
        AtsScorer::new(Arc::new(HashEmbedder::default()))
    }

    #[tokio::test]
    async fn test_partial_keyword_coverage() {
        let report = hash_scorer()
            .score(
                "I have experience with Python and Docker.",
                &["python", "docker", "kubernetes"],
            )
            .await;
        assert_eq!(report.keyword_score, 66.67);
        assert_eq!(report.matched_keywords, vec!["docker", "python"]);
        assert!(report.semantic_score > 0.0);
        assert_eq!(
            report.final_score,
            round2(0.6 * report.keyword_score + 0.4 * report.semantic_score)
        );
    }

    #[tokio::test]
    async fn test_empty_targets_return_zero_report() {
        let empty: [&str; 0] = [];
        assert_eq!(hash_scorer().score("Python", &empty).await, ScoreReport::zero());
        assert_eq!(hash_scorer().score("Python", &["  ", ""]).await, ScoreReport::zero());
    }

    #[tokio::test]
    async fn test_all_targets_contained_scores_100() {
        let report = hash_scorer()
            .score("Rust, Tokio and Axum services", &["rust", "TOKIO", "axum"])
            .await;
        assert_eq!(report.keyword_score, 100.0);
        assert_eq!(report.matched_keywords.len(), 3);
    }

    #[tokio::test]
    async fn test_targets_are_deduplicated() {
        let report = hash_scorer()
            .score("python", &["Python", "python ", "docker"])
            .await;
        assert_eq!(report.keyword_score, 50.0);
    }

    #[tokio::test]
    async fn test_embedder_failure_degrades_to_zero() {
        let scorer = AtsScorer::new(Arc::new(FailingEmbedder));
        let report = scorer.score("python", &["python"]).await;
        assert_eq!(report.semantic_score, 0.0);
        assert_eq!(report.keyword_score, 100.0);
        assert_eq!(report.final_score, 60.0);
    }

    #[tokio::test]
    async fn test_identical_embeddings_score_full_marks() {
        let scorer = AtsScorer::new(Arc::new(ConstantEmbedder));
        let report = scorer.score("python docker", &["python", "docker"]).await;
        assert_eq!(report.semantic_score, 100.0);
        assert_eq!(report.final_score, 100.0);
    }

    #[tokio::test]
    async fn test_final_score_invariant_and_bounds() {
        let scorer = hash_scorer();
        let cases: [(&str, &[&str]); 4] = [
            ("", &["python"]),
            ("Senior Rust engineer", &["rust", "go", "c++"]),
            ("Baker and pastry chef", &["kubernetes", "terraform"]),
            ("SQL, Excel and Tableau reporting", &["sql", "excel", "tableau", "power bi"]),
        ];

        for (resume, targets) in cases {
            let report = scorer.score(resume, targets).await;
            assert!((0.0..=100.0).contains(&report.final_score));
            assert!((0.0..=100.0).contains(&report.semantic_score));
            assert_eq!(
                report.final_score,
                round2(KEYWORD_WEIGHT * report.keyword_score + SEMANTIC_WEIGHT * report.semantic_score)
            );
            let normalized = normalize_targets(targets);
            assert!(report.matched_keywords.iter().all(|m| normalized.contains(m)));
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(99.994), 99.99);
    }
}
