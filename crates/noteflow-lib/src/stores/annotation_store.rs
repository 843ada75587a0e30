// Annotation Store
// In-memory ordered collection of annotation records, scoped to the
// currently selected document. Newest records first.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::annotation::{Annotation, AnnotationContent, AnnotationLabel, NewAnnotation};

/// Store mutation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id exists
    #[error("annotation not found: {0}")]
    UnknownId(String),
}

/// Whether the store has been populated for a document yet.
///
/// An `Unloaded` store (no document selected) and a `Loaded` store that
/// happens to be empty (all annotations cleared) are distinct states, so
/// observers never have to guess which of the two an empty snapshot means.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Unloaded,
    Loaded,
}

/// In-memory annotation collection.
///
/// Owned by the session; all mutation goes through these operations so
/// consumers only ever observe committed states.
#[derive(Debug)]
pub struct AnnotationStore {
    records: Vec<Annotation>,
    state: LoadState,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Unloaded,
        }
    }

    /// Create a record from the partial input, assign it a fresh id, and
    /// prepend it. Returns the stored record.
    pub fn create(&mut self, partial: NewAnnotation) -> Annotation {
        let annotation = Annotation::new(partial);
        self.state = LoadState::Loaded;
        self.records.insert(0, annotation.clone());
        annotation
    }

    /// Merge geometry/content patches into the matching record. The id and
    /// every other record are left untouched.
    pub fn update(
        &mut self,
        id: &str,
        position_patch: Option<&Value>,
        content_patch: Option<&AnnotationContent>,
    ) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;

        if let Some(patch) = position_patch {
            record.apply_position_patch(patch);
        }
        if let Some(patch) = content_patch {
            record.content.merge(patch);
        }
        Ok(())
    }

    /// Replace only the label of the matching record (intent switch).
    pub fn relabel(&mut self, id: &str, label: AnnotationLabel) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;
        record.label = label;
        Ok(())
    }

    /// Remove exactly the matching record. Returns `false` when the id is
    /// unknown; deleting a missing record is not an error.
    pub fn delete_one(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() < before
    }

    /// Empty the collection. Idempotent; returns the number of records
    /// removed so callers can observe the transition even from N to 0.
    /// The store stays `Loaded`: "cleared" is not "never loaded".
    pub fn reset_all(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        self.state = LoadState::Loaded;
        removed
    }

    /// Drop all records and return to the unloaded state (no document).
    pub fn unload(&mut self) {
        self.records.clear();
        self.state = LoadState::Unloaded;
    }

    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[Annotation] {
        &self.records
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
