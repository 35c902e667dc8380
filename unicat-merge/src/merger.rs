use std::collections::HashMap;

use tracing::debug;
use unicat_types::{Diagnostic, University};

use crate::university::{merge_university, normalize_university};

/// One named dataset of university records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub universities: Vec<University>,
}

impl Source {
    pub fn new(name: impl Into<String>, universities: Vec<University>) -> Self {
        Self {
            name: name.into(),
            universities,
        }
    }
}

/// The merged catalog together with everything that was skipped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub universities: Vec<University>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Folds sources into one deduplicated catalog.
///
/// Sources must be absorbed lowest precedence first. Universities are stored
/// in first-seen order; `index` maps an id to its slot.
#[derive(Debug, Clone, Default)]
pub struct CatalogMerger {
    universities: Vec<University>,
    index: HashMap<String, usize>,
    diagnostics: Vec<Diagnostic>,
}

impl CatalogMerger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges every record of one source into the catalog built so far.
    pub fn absorb(&mut self, source: &str, universities: &[University]) {
        let mut inserted = 0usize;
        let mut merged = 0usize;

        for (position, record) in universities.iter().enumerate() {
            let Some(incoming) =
                normalize_university(record, source, position, &mut self.diagnostics)
            else {
                continue;
            };

            match self.index.get(&incoming.id).copied() {
                Some(slot) => {
                    let changed = merge_university(&mut self.universities[slot], &incoming);
                    if !changed.is_empty() {
                        debug!(
                            source = %source,
                            university = %incoming.id,
                            fields = ?changed,
                            "Scalar fields overridden"
                        );
                    }
                    merged += 1;
                }
                None => {
                    self.index.insert(incoming.id.clone(), self.universities.len());
                    self.universities.push(incoming);
                    inserted += 1;
                }
            }
        }

        debug!(
            source = %source,
            records = universities.len(),
            inserted,
            merged,
            "Source absorbed"
        );
    }

    /// Number of distinct universities so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.universities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    /// Diagnostics collected so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the merger, returning the catalog in first-seen order.
    #[must_use]
    pub fn finish(self) -> MergeOutcome {
        MergeOutcome {
            universities: self.universities,
            diagnostics: self.diagnostics,
        }
    }
}

/// Merges unnamed sources, lowest precedence first.
///
/// Sources are named `source[0]`, `source[1]`, … in diagnostics, which this
/// function discards. Use [`merge_sources`] to keep them.
#[must_use]
pub fn merge(sources: &[Vec<University>]) -> Vec<University> {
    let mut merger = CatalogMerger::new();
    for (i, source) in sources.iter().enumerate() {
        merger.absorb(&format!("source[{i}]"), source);
    }
    merger.finish().universities
}

/// Merges named sources, lowest precedence first.
#[must_use]
pub fn merge_sources(sources: &[Source]) -> MergeOutcome {
    let mut merger = CatalogMerger::new();
    for source in sources {
        merger.absorb(&source.name, &source.universities);
    }
    merger.finish()
}
