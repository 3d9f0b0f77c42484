//! TF-IDF vectorizer for text feature extraction.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// Sparse feature vector: feature index -> tf-idf weight.
///
/// Ordered by feature index so downstream accumulation is deterministic.
pub type FeatureVector = BTreeMap<usize, f64>;

/// TF-IDF vectorizer for text feature extraction.
///
/// `fit` learns a vocabulary and per-term inverse document frequencies from
/// the training documents; the vocabulary is fixed afterwards and terms not in
/// it are ignored by `transform`.
pub struct TfIdfVectorizer {
    /// Vocabulary: word -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each word.
    idf: Vec<f64>,
    /// Total number of documents seen during training.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();
        let mut vocabulary = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        // Build vocabulary and count document frequencies
        for doc in documents {
            let tokens = self.tokenize(doc)?;
            let unique_tokens: HashSet<_> = tokens.into_iter().collect();

            for token in unique_tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
                if !vocabulary.contains_key(&token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token, idx);
                }
            }
        }

        // Calculate IDF for each term
        let mut idf = vec![0.0; vocabulary.len()];
        for (word, idx) in &vocabulary {
            let df = document_frequency.get(word).unwrap_or(&0);
            // IDF = log((N + 1) / (df + 1)) + 1
            idf[*idx] = ((self.n_documents as f64 + 1.0) / (*df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into a sparse TF-IDF feature vector.
    ///
    /// Terms outside the learned vocabulary contribute nothing.
    pub fn transform(&self, document: &str) -> Result<FeatureVector> {
        let tokens = self.tokenize(document)?;
        let mut features = FeatureVector::new();

        // Count term frequencies for in-vocabulary terms
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *features.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        // Normalize by document length, then apply IDF
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for (idx, weight) in features.iter_mut() {
                *weight = *weight / doc_length * self.idf[*idx];
            }
        }

        Ok(features)
    }

    /// Tokenize a document using the configured analyzer.
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the number of documents seen during training.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}
