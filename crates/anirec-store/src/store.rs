//! ArtifactStore: the Unloaded → Ready state machine.

use std::path::Path;
use std::sync::Arc;

use anirec_core::config::ArtifactConfig;
use anirec_core::constants::VERSION;
use anirec_core::errors::{AnirecError, AnirecResult};
use anirec_core::models::{StoreState, StoreStatus};
use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::artifacts::Artifacts;
use crate::loader;

#[derive(Debug)]
enum State {
    Unloaded {
        last_error: Option<String>,
    },
    Ready {
        artifacts: Arc<Artifacts>,
        loaded_at: DateTime<Utc>,
        fingerprint: Option<String>,
    },
}

/// Process-wide, read-only artifact holder.
///
/// Built once at startup, then shared (typically behind `Arc`) by any number
/// of readers. The only transition is `Unloaded → Ready`.
#[derive(Debug)]
pub struct ArtifactStore {
    state: State,
}

impl ArtifactStore {
    /// An empty, unloaded store.
    pub fn new() -> Self {
        Self {
            state: State::Unloaded { last_error: None },
        }
    }

    /// Create a store and attempt one load. Never fails: on error the store
    /// is returned unloaded with the reason recorded in [`status`](Self::status).
    pub fn open(config: &ArtifactConfig) -> Self {
        let mut store = Self::new();
        // The error is already logged and recorded in the store state.
        let _ = store.load(config);
        store
    }

    /// A ready store over in-memory artifacts.
    pub fn from_artifacts(artifacts: Artifacts) -> Self {
        Self {
            state: State::Ready {
                artifacts: Arc::new(artifacts),
                loaded_at: Utc::now(),
                fingerprint: None,
            },
        }
    }

    /// Load artifacts from the locations in `config`.
    ///
    /// On failure the store stays unloaded and the error is returned. Loading
    /// a store that is already ready is a no-op.
    pub fn load(&mut self, config: &ArtifactConfig) -> AnirecResult<()> {
        let _span = anirec_observability::load_span!(config.dir().display()).entered();

        if self.is_ready() {
            info!("artifact store already loaded, skipping");
            return Ok(());
        }

        match loader::load_artifacts(config) {
            Ok(loaded) => {
                info!(
                    rows = loaded.artifacts.n_rows(),
                    features = loaded.artifacts.n_features(),
                    names = loaded.artifacts.names().len(),
                    fingerprint = %loaded.fingerprint,
                    version = VERSION,
                    "model artifacts loaded"
                );
                self.state = State::Ready {
                    artifacts: Arc::new(loaded.artifacts),
                    loaded_at: Utc::now(),
                    fingerprint: Some(loaded.fingerprint),
                };
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to load model artifacts");
                self.state = State::Unloaded {
                    last_error: Some(e.to_string()),
                };
                Err(e)
            }
        }
    }

    /// Load from `dir` using the default artifact file names.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> AnirecResult<()> {
        self.load(&ArtifactConfig::in_dir(dir.as_ref()))
    }

    /// Whether all artifacts are loaded and consistent.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    /// The loaded artifacts, or `ServiceUnavailable` while unloaded.
    pub fn artifacts(&self) -> AnirecResult<&Arc<Artifacts>> {
        match &self.state {
            State::Ready { artifacts, .. } => Ok(artifacts),
            State::Unloaded { last_error } => Err(AnirecError::ServiceUnavailable {
                reason: match last_error {
                    Some(e) => format!("model artifacts are not loaded ({e})"),
                    None => "model artifacts are not loaded".to_string(),
                },
            }),
        }
    }

    /// Health snapshot.
    pub fn status(&self) -> StoreStatus {
        match &self.state {
            State::Unloaded { last_error } => StoreStatus::unloaded(last_error.clone()),
            State::Ready {
                artifacts,
                loaded_at,
                fingerprint,
            } => StoreStatus {
                version: VERSION.to_string(),
                state: StoreState::Ready,
                rows: artifacts.n_rows(),
                features: artifacts.n_features(),
                names: artifacts.names().len(),
                missing_ratings: artifacts.metadata().missing_ratings(),
                loaded_at: Some(*loaded_at),
                fingerprint: fingerprint.clone(),
                last_error: None,
            },
        }
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}
