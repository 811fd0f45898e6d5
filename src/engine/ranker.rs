//! Role ranking against the precomputed job index
//!
//! Two ranking paths coexist behind the `RoleScorer` trait: this module's
//! vector-similarity path over the fixed, well-weighted corpus, and the
//! keyword-density path in `suitability` for roles discovered dynamically
//! outside the corpus.

use crate::engine::normalizer;
use crate::engine::vectorizer::JobIndex;
use crate::error::{Result, ResumeInsightError};
use serde::{Deserialize, Serialize};

/// A scored candidate role for a resume. Ordering is by score descending;
/// the highest-scored entry is the authoritative best match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: String,
    pub score: f32,
    pub reason: String,
}

/// Polymorphic role-scoring capability so callers can select or combine
/// ranking paths without branching on the concrete type.
pub trait RoleScorer {
    /// Rank candidate roles for the resume, best first.
    /// Implementations backed by a fixed corpus may ignore `candidates`.
    fn rank(&self, resume_text: &str, candidates: &[String], top_k: usize)
        -> Result<Vec<RoleMatch>>;
}

/// Cosine similarity between two vectors of equal dimensionality.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ResumeInsightError::Processing(format!(
            "Vector dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / (norm_a * norm_b))
    }
}

/// Ranks resumes against the immutable TF-IDF job index.
#[derive(Debug)]
pub struct VectorMatchRanker {
    index: JobIndex,
}

impl VectorMatchRanker {
    pub fn new(index: JobIndex) -> Self {
        Self { index }
    }

    /// Load the ranker from a persisted index. A missing or corrupt index
    /// surfaces as `ModelUnavailable`.
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self::new(JobIndex::load(path)?))
    }

    /// Predict the `top_k` closest corpus roles for the resume text.
    pub fn predict(&self, resume_text: &str, top_k: usize) -> Result<Vec<RoleMatch>> {
        if normalizer::normalize(resume_text).is_empty() {
            return Err(ResumeInsightError::EmptyInput);
        }

        let resume_vector = self.index.vectorizer.transform(resume_text);

        let mut scored: Vec<(usize, f32)> = Vec::with_capacity(self.index.len());
        for (idx, vector) in self.index.vectors.iter().enumerate() {
            scored.push((idx, cosine_similarity(&resume_vector, vector)?));
        }

        // Stable sort keeps corpus insertion order for equal similarities.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k.min(self.index.len()));

        Ok(scored
            .into_iter()
            .map(|(idx, score)| {
                let entry = &self.index.entries[idx];
                RoleMatch {
                    role: entry.role.clone(),
                    score,
                    reason: entry.description.clone(),
                }
            })
            .collect())
    }

    pub fn corpus_size(&self) -> usize {
        self.index.len()
    }
}

impl RoleScorer for VectorMatchRanker {
    fn rank(
        &self,
        resume_text: &str,
        _candidates: &[String],
        top_k: usize,
    ) -> Result<Vec<RoleMatch>> {
        self.predict(resume_text, top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::vectorizer::JobCorpusEntry;

    fn sample_index() -> JobIndex {
        JobIndex::build(vec![
            JobCorpusEntry {
                role: "Backend Developer".to_string(),
                description: "Builds REST services, databases, caching layers and message queues"
                    .to_string(),
            },
            JobCorpusEntry {
                role: "Data Scientist".to_string(),
                description: "Statistical modeling, machine learning pipelines, dashboards"
                    .to_string(),
            },
            JobCorpusEntry {
                role: "DevOps Engineer".to_string(),
                description: "Deployment automation, container orchestration, monitoring"
                    .to_string(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_cosine_similarity_basics() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]).unwrap() - 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).unwrap(), 0.0);
        assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_identical_description_ranks_first() {
        let index = sample_index();
        let description = index.entries[1].description.clone();
        let ranker = VectorMatchRanker::new(index);

        let matches = ranker.predict(&description, 3).unwrap();
        assert_eq!(matches[0].role, "Data Scientist");
        assert!((matches[0].score - 1.0).abs() < 1e-4);
        assert!(matches
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn test_empty_resume_is_empty_input() {
        let ranker = VectorMatchRanker::new(sample_index());
        assert!(matches!(
            ranker.predict("", 3),
            Err(ResumeInsightError::EmptyInput)
        ));
        assert!(matches!(
            ranker.predict("1234 !!!", 3),
            Err(ResumeInsightError::EmptyInput)
        ));
    }

    #[test]
    fn test_top_k_clamped_to_corpus_size() {
        let ranker = VectorMatchRanker::new(sample_index());
        let matches = ranker
            .predict("deployment automation and monitoring", 10)
            .unwrap();
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_reason_carries_description() {
        let ranker = VectorMatchRanker::new(sample_index());
        let matches = ranker
            .predict("container orchestration and deployment automation", 1)
            .unwrap();
        assert_eq!(matches[0].role, "DevOps Engineer");
        assert!(matches[0].reason.contains("orchestration"));
    }
}
