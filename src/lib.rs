//! # ticket-triage
//!
//! A small text classification library and CLI that routes free-text IT
//! support tickets to a responsible department.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flexible text analysis pipeline (tokenizer + filter chain)
//! - TF-IDF feature extraction with English stop-word removal
//! - Multinomial Naive Bayes classification with posterior probabilities
//! - Interactive prediction shell

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod ml;
pub mod shell;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
