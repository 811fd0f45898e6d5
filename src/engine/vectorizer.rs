//! TF-IDF vectorization and the persisted job-role index
//!
//! The index is built offline by the `train` command from a labeled role
//! dataset and only consumed at analysis time. Resume vectors must be
//! projected with the exact vocabulary and IDF weights recorded in the
//! index, otherwise cosine similarities are meaningless; keeping both in
//! one serialized artifact enforces that coupling.

use crate::engine::normalizer;
use crate::error::{Result, ResumeInsightError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Common English words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
    "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours",
];

/// TF-IDF vectorizer with a fixed, alphabetically ordered vocabulary and
/// smooth IDF weights (`ln((1+n)/(1+df)) + 1`). Vectors are L2-normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: Vec<String>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and IDF weights from raw document texts.
    /// Documents are normalized with the same normalizer used at query time.
    pub fn fit(documents: &[String]) -> Result<Self> {
        if documents.is_empty() {
            return Err(ResumeInsightError::InvalidInput(
                "Cannot fit a vectorizer on an empty document set".to_string(),
            ));
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| tokenize(&normalizer::normalize(d)))
            .collect();

        // Document frequency per term
        let mut df: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
            seen.sort_unstable();
            seen.dedup();
            for token in seen {
                *df.entry(token).or_insert(0) += 1;
            }
        }

        let mut vocabulary: Vec<String> = df.keys().map(|t| t.to_string()).collect();
        vocabulary.sort_unstable();

        if vocabulary.is_empty() {
            return Err(ResumeInsightError::InvalidInput(
                "Document set produced an empty vocabulary".to_string(),
            ));
        }

        let n = documents.len() as f32;
        let idf = vocabulary
            .iter()
            .map(|term| {
                let freq = df[term.as_str()] as f32;
                ((1.0 + n) / (1.0 + freq)).ln() + 1.0
            })
            .collect();

        Ok(Self { vocabulary, idf })
    }

    /// Project raw text into the learned vector space.
    /// Returns a zero vector when no known terms occur.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for token in tokenize(&normalizer::normalize(text)) {
            if let Ok(idx) = self.vocabulary.binary_search(&token) {
                vector[idx] += 1.0;
            }
        }

        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let norm: f32 = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    fn validate(&self) -> Result<()> {
        if self.idf.len() != self.vocabulary.len() {
            return Err(ResumeInsightError::Processing(format!(
                "IDF table length {} does not match vocabulary size {}",
                self.idf.len(),
                self.vocabulary.len()
            )));
        }
        Ok(())
    }
}

/// Split normalized text into vocabulary candidates: words of at least two
/// letters that are not stop words.
fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|w| w.len() >= 2 && !STOP_WORDS.contains(w))
        .map(|w| w.to_string())
        .collect()
}

/// One reference job role in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCorpusEntry {
    pub role: String,
    pub description: String,
}

/// Persisted job-role index: reference entries plus their precomputed
/// vectors and the vectorizer that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobIndex {
    pub entries: Vec<JobCorpusEntry>,
    pub vectorizer: TfidfVectorizer,
    pub vectors: Vec<Vec<f32>>,
}

impl JobIndex {
    /// Build an index from labeled role records (the offline training step).
    pub fn build(entries: Vec<JobCorpusEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ResumeInsightError::InvalidInput(
                "Role dataset is empty".to_string(),
            ));
        }

        let descriptions: Vec<String> = entries.iter().map(|e| e.description.clone()).collect();
        let vectorizer = TfidfVectorizer::fit(&descriptions)?;
        let vectors = descriptions
            .iter()
            .map(|d| vectorizer.transform(d))
            .collect();

        Ok(Self {
            entries,
            vectorizer,
            vectors,
        })
    }

    /// Load and validate a persisted index.
    /// Any failure maps to `ModelUnavailable` so callers can surface a
    /// structured "model not found" result instead of crashing.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumeInsightError::ModelUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let index: JobIndex = serde_json::from_str(&content).map_err(|e| {
            ResumeInsightError::ModelUnavailable(format!("{}: {}", path.display(), e))
        })?;
        index.validate().map_err(|e| {
            ResumeInsightError::ModelUnavailable(format!("{}: {}", path.display(), e))
        })?;
        Ok(index)
    }

    /// Persist the index as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Internal consistency: every vector must live in the vectorizer's
    /// space, and every entry must have a vector.
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        if self.vectors.len() != self.entries.len() {
            return Err(ResumeInsightError::Processing(format!(
                "Index holds {} vectors for {} entries",
                self.vectors.len(),
                self.entries.len()
            )));
        }
        let dim = self.vectorizer.dimension();
        if let Some(bad) = self.vectors.iter().find(|v| v.len() != dim) {
            return Err(ResumeInsightError::Processing(format!(
                "Vector dimensionality {} does not match vocabulary size {}",
                bad.len(),
                dim
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<JobCorpusEntry> {
        vec![
            JobCorpusEntry {
                role: "Backend Developer".to_string(),
                description: "Designs REST services with databases, caching and message queues"
                    .to_string(),
            },
            JobCorpusEntry {
                role: "Data Scientist".to_string(),
                description: "Builds statistical models, machine learning pipelines and dashboards"
                    .to_string(),
            },
            JobCorpusEntry {
                role: "DevOps Engineer".to_string(),
                description: "Automates deployment pipelines, container orchestration and monitoring"
                    .to_string(),
            },
        ]
    }

    #[test]
    fn test_fit_rejects_empty_input() {
        assert!(TfidfVectorizer::fit(&[]).is_err());
    }

    #[test]
    fn test_transform_is_normalized() {
        let docs = vec![
            "rust systems programming".to_string(),
            "python data analysis".to_string(),
        ];
        let vectorizer = TfidfVectorizer::fit(&docs).unwrap();
        let vector = vectorizer.transform("rust programming");
        let norm: f32 = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_unknown_terms_produce_zero_vector() {
        let docs = vec!["rust systems programming".to_string()];
        let vectorizer = TfidfVectorizer::fit(&docs).unwrap();
        let vector = vectorizer.transform("completely unrelated words");
        assert!(vector.iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_stop_words_excluded() {
        let docs = vec!["the quick brown fox and the lazy dog".to_string()];
        let vectorizer = TfidfVectorizer::fit(&docs).unwrap();
        // "the" and "and" must not enter the vocabulary.
        assert_eq!(vectorizer.dimension(), 5);
    }

    #[test]
    fn test_index_build_and_validate() {
        let index = JobIndex::build(sample_entries()).unwrap();
        assert_eq!(index.len(), 3);
        assert!(index.validate().is_ok());
        assert!(index
            .vectors
            .iter()
            .all(|v| v.len() == index.vectorizer.dimension()));
    }

    #[test]
    fn test_index_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job_index.json");

        let index = JobIndex::build(sample_entries()).unwrap();
        index.save(&path).unwrap();

        let loaded = JobIndex::load(&path).unwrap();
        assert_eq!(loaded.len(), index.len());
        assert_eq!(loaded.vectorizer.dimension(), index.vectorizer.dimension());
    }

    #[test]
    fn test_load_missing_index_is_model_unavailable() {
        let err = JobIndex::load(Path::new("/nonexistent/index.json")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ResumeInsightError::ModelUnavailable(_)
        ));
    }

    #[test]
    fn test_load_rejects_inconsistent_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_index.json");

        let mut index = JobIndex::build(sample_entries()).unwrap();
        index.vectors[0].push(0.5);
        index.save(&path).unwrap();

        assert!(JobIndex::load(&path).is_err());
    }
}
