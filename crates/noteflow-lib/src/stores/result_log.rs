// Result Log
// Ordered collection of settled analysis results, newest first.

use crate::models::analysis::AnalysisResult;

/// Newest-first log of analysis results.
#[derive(Debug, Default)]
pub struct ResultLog {
    records: Vec<AnalysisResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a settled result at the head of the log.
    pub fn prepend(&mut self, record: AnalysisResult) {
        self.records.insert(0, record);
    }

    /// Remove exactly the matching record; the relative order of the rest is
    /// preserved. Unknown ids are a no-op, not an error.
    pub fn delete_one(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() < before
    }

    /// Empty the log. Idempotent; returns the number of records removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    pub fn get(&self, id: &str) -> Option<&AnalysisResult> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[AnalysisResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
