//! Text analysis pipeline.
//!
//! Raw ticket text flows through an [`analyzer::Analyzer`], which combines a
//! tokenizer with a chain of token filters:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
