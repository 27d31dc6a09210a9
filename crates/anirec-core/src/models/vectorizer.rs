//! Description of the offline feature transform that produced the matrix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AnirecError, AnirecResult};

const ARTIFACT: &str = "vectorizer";

/// Vocabulary and weighting of the offline vectorizer.
///
/// The engine never re-vectorizes text; this is loaded so the matrix can be
/// checked against the vocabulary it was built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorizerInfo {
    /// Term → column index.
    pub vocabulary: BTreeMap<String, usize>,
    /// Per-column inverse document frequency, when the transform was TF-IDF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idf: Option<Vec<f64>>,
    /// Free-form transform parameters (analyzer, n-gram range, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, serde_json::Value>,
}

impl VectorizerInfo {
    pub fn new(vocabulary: BTreeMap<String, usize>) -> Self {
        Self {
            vocabulary,
            ..Default::default()
        }
    }

    /// Number of feature columns the transform emits.
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Check that the vocabulary maps onto `0..n_features` exactly once and
    /// that idf weights, if present, cover every column.
    pub fn validate(&self) -> AnirecResult<()> {
        let n = self.n_features();
        let mut seen = vec![false; n];
        for (term, &col) in &self.vocabulary {
            match seen.get_mut(col) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(AnirecError::corrupt(
                        ARTIFACT,
                        format!("column {col} assigned twice (term '{term}')"),
                    ))
                }
                None => {
                    return Err(AnirecError::corrupt(
                        ARTIFACT,
                        format!("term '{term}' maps to column {col}, vocabulary has {n}"),
                    ))
                }
            }
        }
        if let Some(idf) = &self.idf {
            if idf.len() != n {
                return Err(AnirecError::corrupt(
                    ARTIFACT,
                    format!("idf has {} weights for {n} terms", idf.len()),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[(&str, usize)]) -> VectorizerInfo {
        VectorizerInfo::new(terms.iter().map(|(t, c)| (t.to_string(), *c)).collect())
    }

    #[test]
    fn valid_vocabulary_passes() {
        let v = vocab(&[("action", 0), ("ninja", 1)]);
        assert_eq!(v.n_features(), 2);
        v.validate().unwrap();
    }

    #[test]
    fn duplicate_column_is_corrupt() {
        let v = vocab(&[("action", 0), ("ninja", 0)]);
        assert!(v.validate().unwrap_err().to_string().contains("assigned twice"));
    }

    #[test]
    fn column_out_of_range_is_corrupt() {
        let v = vocab(&[("action", 0), ("ninja", 5)]);
        assert!(v.validate().is_err());
    }

    #[test]
    fn idf_length_must_match() {
        let mut v = vocab(&[("action", 0)]);
        v.idf = Some(vec![1.0, 2.0]);
        assert!(v.validate().is_err());
    }
}
