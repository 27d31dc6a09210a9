use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the offline pipeline's artifacts live and what they are called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Directory holding all artifact files.
    pub dir: PathBuf,
    /// Serialized feature-transform description.
    pub vectorizer_file: String,
    /// Serialized CSR feature matrix.
    pub matrix_file: String,
    /// Serialized name → row index map.
    pub name_index_file: String,
    /// Columnar metadata table (`name`, `rating`).
    pub metadata_file: String,
}

impl ArtifactConfig {
    /// Default file names under a custom directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn vectorizer_path(&self) -> PathBuf {
        self.dir.join(&self.vectorizer_file)
    }

    pub fn matrix_path(&self) -> PathBuf {
        self.dir.join(&self.matrix_file)
    }

    pub fn name_index_path(&self) -> PathBuf {
        self.dir.join(&self.name_index_file)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(&self.metadata_file)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(defaults::DEFAULT_ARTIFACT_DIR),
            vectorizer_file: defaults::DEFAULT_VECTORIZER_FILE.to_string(),
            matrix_file: defaults::DEFAULT_MATRIX_FILE.to_string(),
            name_index_file: defaults::DEFAULT_NAME_INDEX_FILE.to_string(),
            metadata_file: defaults::DEFAULT_METADATA_FILE.to_string(),
        }
    }
}
