//! Compressed sparse row feature matrix.
//!
//! One row per catalog item, one column per vocabulary term. Row entries are
//! kept sorted by column with duplicates summed, so a row can be walked or
//! densified without further checks.

use serde::{Deserialize, Serialize};

use crate::errors::{AnirecError, AnirecResult};

const ARTIFACT: &str = "feature_matrix";

/// Immutable CSR matrix of term weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCsr")]
pub struct FeatureMatrix {
    n_rows: usize,
    n_cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
}

/// On-disk CSR layout, validated before it becomes a `FeatureMatrix`.
#[derive(Deserialize)]
struct RawCsr {
    n_rows: usize,
    n_cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
}

impl TryFrom<RawCsr> for FeatureMatrix {
    type Error = AnirecError;

    fn try_from(raw: RawCsr) -> AnirecResult<Self> {
        Self::from_csr(raw.n_rows, raw.n_cols, raw.indptr, raw.indices, raw.data)
    }
}

/// Borrowed view of one matrix row.
#[derive(Debug, Clone, Copy)]
pub struct SparseRow<'a> {
    pub indices: &'a [usize],
    pub values: &'a [f64],
}

impl SparseRow<'_> {
    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Dot product against a dense vector of at least `n_cols` length.
    pub fn dot_dense(&self, dense: &[f64]) -> f64 {
        self.indices
            .iter()
            .zip(self.values)
            .map(|(&col, &v)| v * dense[col])
            .sum()
    }

    /// Dot product against another sorted sparse row.
    pub fn dot(&self, other: &SparseRow<'_>) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut acc = 0.0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    acc += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        acc
    }
}

impl FeatureMatrix {
    /// Build a matrix from CSR components.
    ///
    /// Row entries are sorted by column and duplicate columns summed.
    /// Fails with `ArtifactCorrupt` when the components do not describe a
    /// valid `n_rows x n_cols` matrix.
    pub fn from_csr(
        n_rows: usize,
        n_cols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
    ) -> AnirecResult<Self> {
        if indptr.len().checked_sub(1) != Some(n_rows) {
            return Err(AnirecError::corrupt(
                ARTIFACT,
                format!("indptr has {} entries for {n_rows} rows", indptr.len()),
            ));
        }
        if indptr[0] != 0 {
            return Err(AnirecError::corrupt(ARTIFACT, "indptr must start at 0"));
        }
        if indptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(AnirecError::corrupt(ARTIFACT, "indptr is not monotonic"));
        }
        if indices.len() != data.len() {
            return Err(AnirecError::corrupt(
                ARTIFACT,
                format!(
                    "indices ({}) and data ({}) lengths differ",
                    indices.len(),
                    data.len()
                ),
            ));
        }
        if indptr[n_rows] != indices.len() {
            return Err(AnirecError::corrupt(
                ARTIFACT,
                format!(
                    "indptr ends at {}, but {} entries are stored",
                    indptr[n_rows],
                    indices.len()
                ),
            ));
        }
        if let Some(&col) = indices.iter().find(|&&c| c >= n_cols) {
            return Err(AnirecError::corrupt(
                ARTIFACT,
                format!("column index {col} out of range for {n_cols} columns"),
            ));
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(AnirecError::corrupt(ARTIFACT, "non-finite weight"));
        }

        // Canonicalize: sorted columns, duplicates summed.
        let mut out_indptr = Vec::with_capacity(n_rows + 1);
        let mut out_indices = Vec::with_capacity(indices.len());
        let mut out_data = Vec::with_capacity(data.len());
        out_indptr.push(0);
        for row in 0..n_rows {
            let (start, end) = (indptr[row], indptr[row + 1]);
            let mut entries: Vec<(usize, f64)> = indices[start..end]
                .iter()
                .copied()
                .zip(data[start..end].iter().copied())
                .collect();
            entries.sort_by_key(|&(col, _)| col);
            for (col, value) in entries {
                match out_indices.last() {
                    Some(&last) if last == col && out_indices.len() > out_indptr[row] => {
                        if let Some(v) = out_data.last_mut() {
                            *v += value;
                        }
                    }
                    _ => {
                        out_indices.push(col);
                        out_data.push(value);
                    }
                }
            }
            out_indptr.push(out_indices.len());
        }

        Ok(Self {
            n_rows,
            n_cols,
            indptr: out_indptr,
            indices: out_indices,
            data: out_data,
        })
    }

    /// Build a matrix from dense rows, dropping zero entries.
    ///
    /// All rows must have the same length.
    pub fn from_dense(rows: &[Vec<f64>]) -> AnirecResult<Self> {
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut indptr = Vec::with_capacity(rows.len() + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        indptr.push(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(AnirecError::corrupt(
                    ARTIFACT,
                    format!("row {i} has {} columns, expected {n_cols}", row.len()),
                ));
            }
            for (col, &v) in row.iter().enumerate() {
                if v != 0.0 {
                    indices.push(col);
                    data.push(v);
                }
            }
            indptr.push(indices.len());
        }
        Self::from_csr(rows.len(), n_cols, indptr, indices, data)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of feature columns (vocabulary size).
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Borrow row `i`, or `None` when out of range.
    pub fn row(&self, i: usize) -> Option<SparseRow<'_>> {
        if i >= self.n_rows {
            return None;
        }
        let (start, end) = (self.indptr[i], self.indptr[i + 1]);
        Some(SparseRow {
            indices: &self.indices[start..end],
            values: &self.data[start..end],
        })
    }

    /// Expand row `i` into a dense vector of `n_cols` entries.
    pub fn densify_row(&self, i: usize) -> Option<Vec<f64>> {
        let row = self.row(i)?;
        let mut dense = vec![0.0; self.n_cols];
        for (&col, &v) in row.indices.iter().zip(row.values) {
            dense[col] = v;
        }
        Some(dense)
    }

    /// Iterate rows in canonical order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = SparseRow<'_>> + '_ {
        (0..self.n_rows).map(move |i| {
            let (start, end) = (self.indptr[i], self.indptr[i + 1]);
            SparseRow {
                indices: &self.indices[start..end],
                values: &self.data[start..end],
            }
        })
    }
}
