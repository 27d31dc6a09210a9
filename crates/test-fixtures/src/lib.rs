//! Test fixtures for anirec: catalog builders, artifact-directory writers,
//! and golden-file loading shared by tests and benchmarks across crates.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anirec_core::config::defaults;
use anirec_core::models::{
    FeatureMatrix, ItemMetadata, MetadataRecord, NameIndex, Rating, VectorizerInfo,
};
use serde::de::DeserializeOwned;

/// The four artifacts of a catalog, before they are handed to a store.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    pub vectorizer: VectorizerInfo,
    pub matrix: FeatureMatrix,
    pub names: NameIndex,
    pub metadata: ItemMetadata,
}

/// One item described by its name, rating, and the terms it carries.
pub type ItemSpec<'a> = (&'a str, Option<f64>, &'a [&'a str]);

/// Build a catalog where each item's row is the L2-normalized binary bag of
/// its terms. Vocabulary columns are assigned in sorted term order; rows
/// follow the order of `items`.
///
/// # Panics
/// Panics if the items do not form a valid matrix (never for non-empty input).
pub fn catalog_from_terms(items: &[ItemSpec<'_>]) -> FixtureCatalog {
    let terms: BTreeSet<&str> = items.iter().flat_map(|(_, _, t)| t.iter().copied()).collect();
    let vocabulary: BTreeMap<String, usize> = terms
        .iter()
        .enumerate()
        .map(|(col, term)| (term.to_string(), col))
        .collect();

    let rows: Vec<Vec<f64>> = items
        .iter()
        .map(|(_, _, item_terms)| {
            let mut row = vec![0.0; vocabulary.len()];
            let distinct: BTreeSet<&str> = item_terms.iter().copied().collect();
            let weight = if distinct.is_empty() {
                0.0
            } else {
                1.0 / (distinct.len() as f64).sqrt()
            };
            for term in distinct {
                row[vocabulary[term]] = weight;
            }
            row
        })
        .collect();

    let matrix = FeatureMatrix::from_dense(&rows).expect("fixture rows are rectangular");
    let names = items
        .iter()
        .enumerate()
        .map(|(i, (name, _, _))| (*name, i))
        .collect();
    let metadata = items
        .iter()
        .map(|(name, rating, _)| MetadataRecord {
            name: name.to_string(),
            rating: Rating::from_option(*rating),
        })
        .collect();

    FixtureCatalog {
        vectorizer: VectorizerInfo::new(vocabulary),
        matrix,
        names,
        metadata,
    }
}

/// The four-item example catalog.
///
/// "Naruto" shares three terms with "Bleach", two with "One Piece", and one
/// with "Dragon Ball". "Dragon Ball" has no rating. Row order is
/// Naruto, Bleach, One Piece, Dragon Ball.
pub fn example_catalog() -> FixtureCatalog {
    catalog_from_terms(&[
        (
            "Naruto",
            Some(7.91),
            &["action", "shounen", "ninja", "supernatural"],
        ),
        (
            "Bleach",
            Some(7.95),
            &["action", "shounen", "supernatural", "comedy"],
        ),
        (
            "One Piece",
            Some(8.58),
            &["action", "shounen", "pirate", "adventure", "comedy"],
        ),
        (
            "Dragon Ball",
            None,
            &["action", "adventure", "martial arts", "comedy"],
        ),
    ])
}

/// Deterministic pseudo-random catalog of `n_rows` items over `n_terms`
/// terms, each item carrying `terms_per_item` distinct terms.
pub fn synthetic_catalog(n_rows: usize, n_terms: usize, terms_per_item: usize) -> FixtureCatalog {
    let vocab: Vec<String> = (0..n_terms).map(|t| format!("term{t:05}")).collect();
    let names: Vec<String> = (0..n_rows).map(|i| format!("Title {i:06}")).collect();

    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        // xorshift64*
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    };

    let item_terms: Vec<Vec<&str>> = (0..n_rows)
        .map(|_| {
            let mut picked = BTreeSet::new();
            while picked.len() < terms_per_item.min(n_terms) {
                picked.insert((next() % n_terms as u64) as usize);
            }
            picked.into_iter().map(|t| vocab[t].as_str()).collect()
        })
        .collect();

    let items: Vec<ItemSpec<'_>> = names
        .iter()
        .zip(&item_terms)
        .enumerate()
        .map(|(i, (name, terms))| {
            let rating = (i % 7 != 0).then(|| 5.0 + (i % 50) as f64 / 10.0);
            (name.as_str(), rating, terms.as_slice())
        })
        .collect();

    catalog_from_terms(&items)
}

/// Write a catalog's artifacts into `dir` under the default file names.
pub fn write_artifact_dir(dir: &Path, catalog: &FixtureCatalog) -> std::io::Result<()> {
    write_json(&dir.join(defaults::DEFAULT_VECTORIZER_FILE), &catalog.vectorizer)?;
    write_json(&dir.join(defaults::DEFAULT_MATRIX_FILE), &catalog.matrix)?;
    write_json(&dir.join(defaults::DEFAULT_NAME_INDEX_FILE), &catalog.names)?;
    write_json(&dir.join(defaults::DEFAULT_METADATA_FILE), &catalog.metadata)?;
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(std::io::Error::other)?;
    std::fs::write(path, bytes)
}

/// Root directory of this crate's fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
