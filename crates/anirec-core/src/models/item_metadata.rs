//! Row-aligned item metadata, stored column-wise on disk.

use serde::{Deserialize, Serialize};

use super::Rating;
use crate::errors::{AnirecError, AnirecResult};

/// One catalog item's metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub name: String,
    pub rating: Rating,
}

/// Metadata table; record `i` describes feature matrix row `i`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "MetadataColumns", into = "MetadataColumns")]
pub struct ItemMetadata {
    records: Vec<MetadataRecord>,
}

/// Columnar layout: `{"name": [...], "rating": [number | null, ...]}`.
#[derive(Serialize, Deserialize)]
struct MetadataColumns {
    name: Vec<String>,
    rating: Vec<Option<f64>>,
}

impl TryFrom<MetadataColumns> for ItemMetadata {
    type Error = AnirecError;

    fn try_from(cols: MetadataColumns) -> AnirecResult<Self> {
        if cols.name.len() != cols.rating.len() {
            return Err(AnirecError::corrupt(
                "item_metadata",
                format!(
                    "column lengths differ: name={}, rating={}",
                    cols.name.len(),
                    cols.rating.len()
                ),
            ));
        }
        Ok(cols
            .name
            .into_iter()
            .zip(cols.rating)
            .map(|(name, rating)| MetadataRecord {
                name,
                rating: Rating::from_option(rating),
            })
            .collect())
    }
}

impl From<ItemMetadata> for MetadataColumns {
    fn from(meta: ItemMetadata) -> Self {
        let (name, rating) = meta
            .records
            .into_iter()
            .map(|r| (r.name, r.rating.value()))
            .unzip();
        Self { name, rating }
    }
}

impl FromIterator<MetadataRecord> for ItemMetadata {
    fn from_iter<I: IntoIterator<Item = MetadataRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl ItemMetadata {
    pub fn new(records: Vec<MetadataRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, row: usize) -> Option<&MetadataRecord> {
        self.records.get(row)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows with no rating.
    pub fn missing_ratings(&self) -> usize {
        self.records.iter().filter(|r| !r.rating.is_available()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataRecord> {
        self.records.iter()
    }
}
