//! Per-generation convergence bookkeeping.
//!
//! Each engine appends exactly one record per completed generation.
//! The log is append-only: records are never rewritten, and outside the
//! crate the history is read-only — the seam the visualization
//! collaborator consumes.

/// Record appended by the continuous engines (PSO, ABC).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmRecord {
    /// Zero-based generation index.
    pub generation: usize,
    /// Global best fitness after this generation's updates.
    pub best: f64,
    /// Highest (worst) fitness in the just-evaluated population.
    ///
    /// Diagnostic only; the search never uses it.
    pub worst: f64,
}

/// Record appended by the knapsack GA.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackRecord {
    /// Zero-based generation index.
    pub generation: usize,
    /// Maximum fitness (total value) in this generation.
    pub best: f64,
    /// Per item index, how many individuals currently select it.
    pub selection_counts: Vec<usize>,
}

/// Append-only sequence of per-generation records.
///
/// Holds exactly `generations` entries once a run reaches its terminal
/// state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History<R> {
    records: Vec<R>,
}

impl<R> Default for History<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> History<R> {
    pub(crate) fn with_capacity(generations: usize) -> Self {
        Self {
            records: Vec::with_capacity(generations),
        }
    }

    pub(crate) fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// All records, in generation order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of completed generations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` before the first generation completes.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record, if any generation has completed.
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }
}

impl<'a, R> IntoIterator for &'a History<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
