//! Reads artifact files from disk.
//!
//! Each file is JSON. A file that does not exist is `ArtifactMissing`; a file
//! that exists but cannot be read or parsed is `ArtifactCorrupt`.

use std::io::ErrorKind;
use std::path::Path;

use anirec_core::config::ArtifactConfig;
use anirec_core::errors::{AnirecError, AnirecResult};
use anirec_core::models::{FeatureMatrix, ItemMetadata, NameIndex, VectorizerInfo};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::artifacts::Artifacts;

/// Artifacts plus a blake3 digest over the raw bytes they were parsed from.
#[derive(Debug)]
pub struct LoadedArtifacts {
    pub artifacts: Artifacts,
    pub fingerprint: String,
}

/// Read, parse, and cross-check every artifact named by `config`.
pub fn load_artifacts(config: &ArtifactConfig) -> AnirecResult<LoadedArtifacts> {
    // Check presence up front so a missing file is reported before any parse
    // error in its siblings.
    let files = [
        ("vectorizer", config.vectorizer_path()),
        ("feature_matrix", config.matrix_path()),
        ("name_index", config.name_index_path()),
        ("item_metadata", config.metadata_path()),
    ];
    for (artifact, path) in &files {
        if !path.is_file() {
            return Err(AnirecError::ArtifactMissing {
                artifact: artifact.to_string(),
                path: path.display().to_string(),
            });
        }
    }

    let mut hasher = blake3::Hasher::new();
    let vectorizer: VectorizerInfo = read_json("vectorizer", &files[0].1, &mut hasher)?;
    let matrix: FeatureMatrix = read_json("feature_matrix", &files[1].1, &mut hasher)?;
    let names: NameIndex = read_json("name_index", &files[2].1, &mut hasher)?;
    let metadata: ItemMetadata = read_json("item_metadata", &files[3].1, &mut hasher)?;

    let artifacts = Artifacts::new(vectorizer, matrix, names, metadata)?;
    Ok(LoadedArtifacts {
        artifacts,
        fingerprint: hasher.finalize().to_hex().to_string(),
    })
}

fn read_json<T: DeserializeOwned>(
    artifact: &str,
    path: &Path,
    hasher: &mut blake3::Hasher,
) -> AnirecResult<T> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnirecError::ArtifactMissing {
            artifact: artifact.to_string(),
            path: path.display().to_string(),
        },
        _ => AnirecError::corrupt(artifact, format!("{}: {e}", path.display())),
    })?;
    hasher.update(&bytes);

    let value = serde_json::from_slice(&bytes)
        .map_err(|e| AnirecError::corrupt(artifact, format!("{}: {e}", path.display())))?;
    debug!(artifact, bytes = bytes.len(), "artifact parsed");
    Ok(value)
}
