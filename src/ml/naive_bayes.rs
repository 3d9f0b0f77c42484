//! Multinomial Naive Bayes classifier over TF-IDF features.

use std::collections::BTreeSet;

use crate::error::{Result, TriageError};
use crate::ml::vectorizer::FeatureVector;

/// Default additive smoothing parameter (Laplace smoothing).
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Multinomial Naive Bayes model.
///
/// Classes are kept in sorted label order, so prediction is deterministic and
/// exact posterior ties resolve to the lexicographically smallest label.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Class labels in sorted order.
    classes: Vec<String>,
    /// Log prior probability per class.
    log_prior: Vec<f64>,
    /// Smoothed log likelihood per class and feature.
    feature_log_prob: Vec<Vec<f64>>,
    /// Number of features the model was trained on.
    n_features: usize,
}

impl MultinomialNb {
    /// Fit a model with the default smoothing parameter.
    pub fn fit(vectors: &[FeatureVector], labels: &[String], n_features: usize) -> Result<Self> {
        Self::fit_with_alpha(vectors, labels, n_features, DEFAULT_ALPHA)
    }

    /// Fit a model with additive smoothing parameter `alpha`.
    pub fn fit_with_alpha(
        vectors: &[FeatureVector],
        labels: &[String],
        n_features: usize,
        alpha: f64,
    ) -> Result<Self> {
        if vectors.is_empty() {
            return Err(TriageError::invalid_argument(
                "training data cannot be empty",
            ));
        }
        if vectors.len() != labels.len() {
            return Err(TriageError::invalid_argument(format!(
                "got {} feature vectors but {} labels",
                vectors.len(),
                labels.len()
            )));
        }
        if alpha <= 0.0 {
            return Err(TriageError::invalid_argument(
                "smoothing parameter alpha must be positive",
            ));
        }

        // Sorted class order keeps everything below independent of input order.
        let class_set: BTreeSet<&str> = labels.iter().map(String::as_str).collect();
        let classes: Vec<String> = class_set.iter().map(|s| s.to_string()).collect();
        let index_of = |label: &str| {
            classes
                .binary_search_by(|c| c.as_str().cmp(label))
                .expect("label seen during class collection")
        };

        let n_classes = classes.len();
        let mut class_counts = vec![0usize; n_classes];
        let mut feature_totals = vec![vec![0.0; n_features]; n_classes];

        for (vector, label) in vectors.iter().zip(labels) {
            let c = index_of(label);
            class_counts[c] += 1;
            for (&idx, &weight) in vector {
                feature_totals[c][idx] += weight;
            }
        }

        let n_samples = vectors.len() as f64;
        let log_prior = class_counts
            .iter()
            .map(|&count| (count as f64 / n_samples).ln())
            .collect();

        // Laplace smoothing: every term keeps non-zero mass in every class.
        let mut feature_log_prob = Vec::with_capacity(n_classes);
        for totals in &feature_totals {
            let class_total: f64 = totals.iter().sum();
            let denominator = class_total + alpha * n_features as f64;
            let log_probs = totals
                .iter()
                .map(|&total| ((total + alpha) / denominator).ln())
                .collect();
            feature_log_prob.push(log_probs);
        }

        Ok(MultinomialNb {
            classes,
            log_prior,
            feature_log_prob,
            n_features,
        })
    }

    /// Get the class labels in sorted order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Get the number of features the model was trained on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Joint log likelihood of the feature vector under each class.
    fn joint_log_likelihood(&self, features: &FeatureVector) -> Vec<f64> {
        self.log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                let likelihood: f64 = features
                    .iter()
                    .filter(|&(&idx, _)| idx < self.n_features)
                    .map(|(&idx, &weight)| weight * log_probs[idx])
                    .sum();
                prior + likelihood
            })
            .collect()
    }

    /// Predict the label with the maximum posterior probability.
    ///
    /// Exact ties resolve to the lexicographically smallest label.
    pub fn predict(&self, features: &FeatureVector) -> &str {
        let scores = self.joint_log_likelihood(features);
        let mut best = 0;
        for (idx, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = idx;
            }
        }
        &self.classes[best]
    }

    /// Normalized posterior probability per class, in sorted label order.
    ///
    /// Values are in [0, 1] and sum to 1.0 within floating-point tolerance.
    pub fn predict_proba(&self, features: &FeatureVector) -> Vec<(String, f64)> {
        let scores = self.joint_log_likelihood(features);

        // Normalize in log space for numerical stability.
        let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exp_scores: Vec<f64> = scores.iter().map(|s| (s - max_score).exp()).collect();
        let total: f64 = exp_scores.iter().sum();

        self.classes
            .iter()
            .zip(exp_scores)
            .map(|(class, score)| (class.clone(), score / total))
            .collect()
    }
}
