//! Analyzer trait and implementations.
//!
//! An analyzer is the complete text processing pipeline: a tokenizer followed
//! by a chain of token filters. [`EnglishAnalyzer`] is the default pipeline
//! used for ticket text (word tokenization, lowercasing, English stop-word
//! removal).
//!
//! # Examples
//!
//! ```
//! use ticket_triage::analysis::analyzer::{Analyzer, EnglishAnalyzer};
//!
//! let analyzer = EnglishAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("The Printer is Broken").unwrap().collect();
//!
//! // "the" and "is" are filtered out
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "printer");
//! assert_eq!(tokens[1].text, "broken");
//! ```

use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for complete text analysis pipelines.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a token stream.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Filters are applied sequentially in the order they were added.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Get the number of filters in the pipeline.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut stream = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        Ok(stream)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &self.filters.len())
            .field("name", &self.name)
            .finish()
    }
}

/// English-optimized analyzer: word tokenization, lowercasing, stop words.
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::default()))
            .with_name("english".to_string());

        Ok(Self { inner: analyzer })
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new().expect("English analyzer should be creatable with default settings")
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_pipeline_analyzer() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));

        let tokens: Vec<Token> = analyzer
            .analyze("Hello THE world AND test")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_english_analyzer() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer
            .analyze("My email is not working again")
            .unwrap()
            .collect();

        // "my", "is", "not", "again" are stop words
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "email");
        assert_eq!(tokens[1].text, "working");
    }

    #[test]
    fn test_english_analyzer_empty_input() {
        let analyzer = EnglishAnalyzer::new().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_english_analyzer_name() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        assert_eq!(analyzer.name(), "english");
    }
}
