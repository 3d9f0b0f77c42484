//! Training corpus loading.
//!
//! The training data is a delimited text file with a header row and at least
//! the columns `Body` (free ticket text) and `Department` (category label).
//! Extra columns are ignored. Rows missing either required field are dropped
//! from the corpus, not imputed.

use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::{Result, TriageError};

/// A single support ticket used for training.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRecord {
    /// Free-text ticket body.
    #[serde(rename = "Body", default)]
    pub body: String,
    /// Department label assigned to the ticket.
    #[serde(rename = "Department", default)]
    pub department: String,
}

impl TicketRecord {
    /// Check that both required fields are present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.body.trim().is_empty() && !self.department.trim().is_empty()
    }
}

/// An ordered, immutable collection of ticket records.
#[derive(Debug, Clone, Default)]
pub struct TrainingCorpus {
    records: Vec<TicketRecord>,
}

impl TrainingCorpus {
    /// Create a corpus from pre-built records.
    ///
    /// Records missing a body or department are dropped here as well, so a
    /// corpus is complete by construction regardless of its source.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TicketRecord>,
    {
        TrainingCorpus {
            records: records.into_iter().filter(TicketRecord::is_complete).collect(),
        }
    }

    /// Get the number of records in the corpus.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the records in load order.
    pub fn records(&self) -> &[TicketRecord] {
        &self.records
    }

    /// Collect the ticket bodies in load order.
    pub fn texts(&self) -> Vec<String> {
        self.records.iter().map(|r| r.body.clone()).collect()
    }

    /// Collect the department labels in load order.
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.department.clone()).collect()
    }
}

/// Load a training corpus from a CSV file.
///
/// A missing or unreadable file is fatal and reported as
/// [`TriageError::DataSourceNotFound`]. Individual rows that fail to parse or
/// lack a required field are skipped silently.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<TrainingCorpus> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TriageError::data_source_not_found(path));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|_| TriageError::data_source_not_found(path))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<TicketRecord>() {
        match row {
            Ok(record) if record.is_complete() => records.push(record),
            Ok(_) | Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("skipped {skipped} rows with missing Body or Department");
    }
    info!(
        "loaded {} ticket records from {}",
        records.len(),
        path.display()
    );

    Ok(TrainingCorpus { records })
}
