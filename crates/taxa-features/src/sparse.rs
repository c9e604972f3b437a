use serde::{Deserialize, Serialize};

/// Sparse feature vector: sorted (index, value) pairs over a fixed dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from unsorted pairs; entries are sorted by index and zero
    /// values dropped.
    pub fn new(dimension: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, v)| v != 0.0);
        entries.sort_by_key(|&(i, _)| i);
        Self { dimension, entries }
    }

    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Dot product against a dense weight vector of the same dimension.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|&(i, v)| v * dense.get(i).copied().unwrap_or(0.0))
            .sum()
    }

    /// L2 norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, v)| v * v)
            .sum::<f64>()
            .sqrt()
    }

    /// Return an L2-normalized copy; a zero vector stays zero.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n <= f64::EPSILON {
            return self.clone();
        }
        Self {
            dimension: self.dimension,
            entries: self.entries.iter().map(|&(i, v)| (i, v / n)).collect(),
        }
    }

    /// Project onto a subset of dimensions, remapping indices to 0..len.
    ///
    /// `selected` must be sorted ascending.
    pub fn project(&self, selected: &[usize]) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|&(i, v)| selected.binary_search(&i).ok().map(|new_i| (new_i, v)))
            .collect();
        Self {
            dimension: selected.len(),
            entries,
        }
    }
}
