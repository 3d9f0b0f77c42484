//! Machine learning components.
//!
//! The classification stack is a TF-IDF vectorizer feeding a multinomial
//! Naive Bayes model, composed into a single fit/predict unit by
//! [`pipeline::ClassifierPipeline`].

pub mod naive_bayes;
pub mod pipeline;
pub mod vectorizer;
