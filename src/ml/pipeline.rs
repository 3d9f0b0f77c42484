//! Classification pipeline composing the vectorizer and the classifier.

use std::sync::Arc;

use log::{info, warn};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::{Result, TriageError};
use crate::ml::naive_bayes::MultinomialNb;
use crate::ml::vectorizer::TfIdfVectorizer;

/// Trait for text classifiers that produce a label and a posterior.
///
/// Any conforming implementation can stand in for the statistical pipeline,
/// which keeps consumers such as the interactive shell testable with stubs.
pub trait TicketClassifier: Send + Sync {
    /// Predict the most likely label for the given text.
    fn predict(&self, text: &str) -> Result<String>;

    /// Full normalized posterior distribution over all known labels.
    fn predict_proba(&self, text: &str) -> Result<Vec<(String, f64)>>;

    /// Get the name of this classifier.
    fn name(&self) -> &'static str;
}

/// TF-IDF + multinomial Naive Bayes pipeline.
///
/// Raw text goes in, a department label (and confidence) comes out. The model
/// is read-only after `fit`; predictions never mutate it.
pub struct ClassifierPipeline {
    vectorizer: TfIdfVectorizer,
    model: Option<MultinomialNb>,
}

impl std::fmt::Debug for ClassifierPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierPipeline")
            .field("vectorizer", &self.vectorizer)
            .field("fitted", &self.model.is_some())
            .finish()
    }
}

impl ClassifierPipeline {
    /// Create an unfitted pipeline with the default English analyzer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(EnglishAnalyzer::new()?)))
    }

    /// Create an unfitted pipeline with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        ClassifierPipeline {
            vectorizer: TfIdfVectorizer::new(analyzer),
            model: None,
        }
    }

    /// Fit the pipeline on parallel sequences of texts and labels.
    pub fn fit(&mut self, texts: &[String], labels: &[String]) -> Result<()> {
        if texts.is_empty() || labels.is_empty() {
            return Err(TriageError::invalid_argument(
                "training texts and labels cannot be empty",
            ));
        }
        if texts.len() != labels.len() {
            return Err(TriageError::invalid_argument(format!(
                "got {} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }

        let distinct_labels = labels
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len();
        if distinct_labels < 2 {
            // Degenerate one-class corpus: every prediction will be that label.
            warn!("training corpus contains a single department label");
        }

        self.vectorizer.fit(texts)?;
        let vectors = texts
            .iter()
            .map(|text| self.vectorizer.transform(text))
            .collect::<Result<Vec<_>>>()?;

        let model = MultinomialNb::fit(&vectors, labels, self.vectorizer.vocabulary_size())?;
        info!(
            "fitted pipeline: {} documents, {} terms, {} classes",
            texts.len(),
            self.vectorizer.vocabulary_size(),
            model.classes().len()
        );
        self.model = Some(model);

        Ok(())
    }

    /// Check whether the pipeline has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    fn model(&self) -> Result<&MultinomialNb> {
        self.model.as_ref().ok_or(TriageError::ModelNotFitted)
    }
}

impl TicketClassifier for ClassifierPipeline {
    fn predict(&self, text: &str) -> Result<String> {
        let model = self.model()?;
        let features = self.vectorizer.transform(text)?;
        Ok(model.predict(&features).to_string())
    }

    fn predict_proba(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let model = self.model()?;
        let features = self.vectorizer.transform(text)?;
        Ok(model.predict_proba(&features))
    }

    fn name(&self) -> &'static str {
        "tfidf_naive_bayes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    fn fitted_pipeline() -> ClassifierPipeline {
        let texts = strings(&[
            "printer not working",
            "password reset needed",
            "printer jammed again",
            "forgot my password",
        ]);
        let labels = strings(&["Hardware", "Security", "Hardware", "Security"]);

        let mut pipeline = ClassifierPipeline::new().unwrap();
        pipeline.fit(&texts, &labels).unwrap();
        pipeline
    }

    #[test]
    fn test_predict_before_fit() {
        let pipeline = ClassifierPipeline::new().unwrap();

        assert!(!pipeline.is_fitted());
        assert!(matches!(
            pipeline.predict("printer broken"),
            Err(TriageError::ModelNotFitted)
        ));
        assert!(matches!(
            pipeline.predict_proba("printer broken"),
            Err(TriageError::ModelNotFitted)
        ));
    }

    #[test]
    fn test_fit_validation() {
        let mut pipeline = ClassifierPipeline::new().unwrap();

        assert!(pipeline.fit(&[], &[]).is_err());
        assert!(
            pipeline
                .fit(&strings(&["one", "two"]), &strings(&["a"]))
                .is_err()
        );
    }

    #[test]
    fn test_fit_and_predict() {
        let pipeline = fitted_pipeline();

        assert!(pipeline.is_fitted());
        assert_eq!(pipeline.predict("my printer is broken").unwrap(), "Hardware");
        assert_eq!(pipeline.predict("reset my password").unwrap(), "Security");
    }

    #[test]
    fn test_predict_is_idempotent() {
        let pipeline = fitted_pipeline();

        let first = pipeline.predict_proba("printer trouble").unwrap();
        let second = pipeline.predict_proba("printer trouble").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_accepted() {
        let pipeline = fitted_pipeline();

        let proba = pipeline.predict_proba("").unwrap();
        let total: f64 = proba.iter().map(|(_, p)| p).sum();

        assert_eq!(proba.len(), 2);
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_label_corpus_fits() {
        let mut pipeline = ClassifierPipeline::new().unwrap();
        pipeline
            .fit(
                &strings(&["printer broken", "printer jammed"]),
                &strings(&["Hardware", "Hardware"]),
            )
            .unwrap();

        assert_eq!(pipeline.predict("anything at all").unwrap(), "Hardware");
    }
}
