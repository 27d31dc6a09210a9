use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::VERSION;

/// Artifact store lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreState {
    Unloaded,
    Ready,
}

/// Health snapshot of the artifact store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStatus {
    /// anirec version serving this store.
    pub version: String,
    pub state: StoreState,
    pub rows: usize,
    pub features: usize,
    pub names: usize,
    pub missing_ratings: usize,
    pub loaded_at: Option<DateTime<Utc>>,
    /// blake3 digest over the loaded artifact files.
    pub fingerprint: Option<String>,
    /// Reason the last load attempt failed, while unloaded.
    pub last_error: Option<String>,
}

impl StoreStatus {
    pub fn unloaded(last_error: Option<String>) -> Self {
        Self {
            version: VERSION.to_string(),
            state: StoreState::Unloaded,
            rows: 0,
            features: 0,
            names: 0,
            missing_ratings: 0,
            loaded_at: None,
            fingerprint: None,
            last_error,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state == StoreState::Ready
    }
}
