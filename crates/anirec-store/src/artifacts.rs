//! The validated artifact bundle.

use anirec_core::errors::{AnirecError, AnirecResult};
use anirec_core::models::{FeatureMatrix, ItemMetadata, NameIndex, VectorizerInfo};
use tracing::warn;

/// Vectorizer, feature matrix, name index, and metadata, checked to agree.
///
/// Invariants (enforced by [`Artifacts::new`]):
/// - the catalog has at least one row;
/// - `metadata.len() == matrix.n_rows()`;
/// - every name index value is a valid row;
/// - the vectorizer vocabulary has exactly `matrix.n_cols()` terms.
#[derive(Debug, Clone)]
pub struct Artifacts {
    vectorizer: VectorizerInfo,
    matrix: FeatureMatrix,
    names: NameIndex,
    metadata: ItemMetadata,
}

impl Artifacts {
    pub fn new(
        vectorizer: VectorizerInfo,
        matrix: FeatureMatrix,
        names: NameIndex,
        metadata: ItemMetadata,
    ) -> AnirecResult<Self> {
        vectorizer.validate()?;

        if matrix.is_empty() {
            return Err(AnirecError::corrupt("feature_matrix", "catalog is empty"));
        }
        if metadata.len() != matrix.n_rows() {
            return Err(AnirecError::corrupt(
                "item_metadata",
                format!(
                    "{} metadata rows for {} matrix rows",
                    metadata.len(),
                    matrix.n_rows()
                ),
            ));
        }
        if let Some(max) = names.max_index() {
            if max >= matrix.n_rows() {
                return Err(AnirecError::corrupt(
                    "name_index",
                    format!("row index {max} out of range for {} rows", matrix.n_rows()),
                ));
            }
        }
        if vectorizer.n_features() != matrix.n_cols() {
            return Err(AnirecError::corrupt(
                "vectorizer",
                format!(
                    "vocabulary has {} terms, matrix has {} columns",
                    vectorizer.n_features(),
                    matrix.n_cols()
                ),
            ));
        }

        let unkeyed = names.unkeyed_rows(matrix.n_rows());
        if !unkeyed.is_empty() {
            warn!(
                count = unkeyed.len(),
                first = unkeyed[0],
                "rows without a name index key cannot be queried"
            );
        }

        Ok(Self {
            vectorizer,
            matrix,
            names,
            metadata,
        })
    }

    pub fn vectorizer(&self) -> &VectorizerInfo {
        &self.vectorizer
    }

    pub fn matrix(&self) -> &FeatureMatrix {
        &self.matrix
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    pub fn metadata(&self) -> &ItemMetadata {
        &self.metadata
    }

    /// Catalog size (rows shared by matrix and metadata).
    pub fn n_rows(&self) -> usize {
        self.matrix.n_rows()
    }

    pub fn n_features(&self) -> usize {
        self.matrix.n_cols()
    }
}
