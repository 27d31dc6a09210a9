//! Sigmoid kernel similarity.
//!
//! `k(x, y) = tanh(gamma * <x, y> + coef0)`, bounded in (-1, 1). With the
//! default `gamma = 1 / n_features` and `coef0 = 1` this matches the kernel the
//! offline pipeline was tuned against.

use anirec_core::config::EngineConfig;
use anirec_core::constants::DEFAULT_SIGMOID_COEF0;
use anirec_core::errors::{AnirecError, AnirecResult};
use anirec_core::models::{FeatureMatrix, SparseRow};
use rayon::prelude::*;

use crate::ranking::ScoredRow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidKernel {
    /// `None` resolves to `1 / n_features` at scoring time.
    gamma: Option<f64>,
    coef0: f64,
}

impl SigmoidKernel {
    pub fn new(gamma: Option<f64>, coef0: f64) -> Self {
        Self { gamma, coef0 }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.gamma, config.coef0)
    }

    /// Slope used for a matrix with `n_features` columns.
    ///
    /// A zero-width matrix has only zero dot products; 1.0 keeps the kernel
    /// finite there.
    pub fn gamma_for(&self, n_features: usize) -> f64 {
        match self.gamma {
            Some(g) => g,
            None if n_features == 0 => 1.0,
            None => 1.0 / n_features as f64,
        }
    }

    pub fn coef0(&self) -> f64 {
        self.coef0
    }

    /// Kernel value for a precomputed dot product.
    #[inline]
    pub fn apply(&self, gamma: f64, dot: f64) -> f64 {
        (gamma * dot + self.coef0).tanh()
    }

    /// Score `query` against every row of `matrix`, in row order, including
    /// the query row itself. Catalogs of at least `parallel_threshold` rows
    /// are scored on the rayon pool.
    pub fn score_all(
        &self,
        matrix: &FeatureMatrix,
        query: usize,
        parallel_threshold: usize,
    ) -> AnirecResult<Vec<ScoredRow>> {
        let dense = matrix.densify_row(query).ok_or_else(|| {
            AnirecError::invalid_argument(format!(
                "row {query} out of range for {} rows",
                matrix.n_rows()
            ))
        })?;
        let gamma = self.gamma_for(matrix.n_cols());

        let score_row = |(index, row): (usize, SparseRow<'_>)| {
            ScoredRow::new(index, self.apply(gamma, row.dot_dense(&dense)))
        };

        let scored: Vec<ScoredRow> = if matrix.n_rows() >= parallel_threshold {
            (0..matrix.n_rows())
                .into_par_iter()
                .filter_map(|i| matrix.row(i).map(|row| score_row((i, row))))
                .collect()
        } else {
            matrix.rows().enumerate().map(score_row).collect()
        };
        Ok(scored)
    }
}

impl Default for SigmoidKernel {
    fn default() -> Self {
        Self::new(None, DEFAULT_SIGMOID_COEF0)
    }
}
