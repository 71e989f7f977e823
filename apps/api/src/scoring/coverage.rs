//! Per-keyword coverage listing derived from a score report.

use serde::Serialize;

use crate::scoring::{normalize_targets, ScoreReport};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageEntry {
    pub keyword: String,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordCoverage {
    /// Every target, sorted by keyword.
    pub entries: Vec<CoverageEntry>,
    pub missing: Vec<String>,
    pub recommendation: String,
}

pub fn build_coverage<S: AsRef<str>>(targets: &[S], report: &ScoreReport) -> KeywordCoverage {
    let entries: Vec<CoverageEntry> = normalize_targets(targets)
        .into_iter()
        .map(|keyword| CoverageEntry {
            matched: report.matched_keywords.contains(&keyword),
            keyword,
        })
        .collect();

    let missing: Vec<String> = entries
        .iter()
        .filter(|e| !e.matched)
        .map(|e| e.keyword.clone())
        .collect();

    let recommendation = build_recommendation(&missing);

    KeywordCoverage {
        entries,
        missing,
        recommendation,
    }
}

fn build_recommendation(missing: &[String]) -> String {
    if missing.is_empty() {
        "All job description hard skills are covered!".to_string()
    } else {
        format!(
            "{} hard skills not found in resume. Consider adding: {}.",
            missing.len(),
            missing.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(matched: &[&str]) -> ScoreReport {
        ScoreReport {
            matched_keywords: matched.iter().map(|s| s.to_string()).collect(),
            ..ScoreReport::zero()
        }
    }

    #[test]
    fn test_entries_are_sorted_and_tagged() {
        let coverage = build_coverage(&["Kubernetes", "python", "docker"], &report(&["docker", "python"]));
        let keywords: Vec<_> = coverage.entries.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["docker", "kubernetes", "python"]);
        assert!(coverage.entries[0].matched);
        assert!(!coverage.entries[1].matched);
        assert_eq!(coverage.missing, vec!["kubernetes"]);
        assert_eq!(
            coverage.recommendation,
            "1 hard skills not found in resume. Consider adding: kubernetes."
        );
    }

    #[test]
    fn test_full_coverage_message() {
        let coverage = build_coverage(&["rust"], &report(&["rust"]));
        assert!(coverage.missing.is_empty());
        assert_eq!(coverage.recommendation, "All job description hard skills are covered!");
    }

    #[test]
    fn test_empty_targets() {
        let empty: [&str; 0] = [];
        let coverage = build_coverage(&empty, &ScoreReport::zero());
        assert!(coverage.entries.is_empty());
        assert_eq!(coverage.recommendation, "All job description hard skills are covered!");
    }
}
