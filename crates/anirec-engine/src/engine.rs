//! RecommendationEngine: implements IRecommender, orchestrates the pipeline.
//!
//! readiness check → resolve name → score all rows → rank and truncate → format.

use std::sync::Arc;

use anirec_core::config::EngineConfig;
use anirec_core::errors::{AnirecError, AnirecResult};
use anirec_core::models::{RecommendationResult, StoreStatus};
use anirec_core::traits::IRecommender;
use anirec_store::{ArtifactStore, Artifacts};
use tracing::{debug, info};

use crate::format;
use crate::kernel::SigmoidKernel;
use crate::ranking::{self, ScoredRow};
use crate::resolve::{NameResolver, ResolvedName};

/// The recommendation engine.
///
/// Owns a shared handle to a read-only [`ArtifactStore`]; holds no mutable
/// state, so one engine can serve any number of concurrent callers.
pub struct RecommendationEngine {
    store: Arc<ArtifactStore>,
    resolver: NameResolver,
    kernel: SigmoidKernel,
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(store: Arc<ArtifactStore>, config: EngineConfig) -> Self {
        Self {
            store,
            resolver: NameResolver::new(config.fuzzy_match),
            kernel: SigmoidKernel::from_config(&config),
            config,
        }
    }

    /// Engine over a ready store built from in-memory artifacts.
    pub fn from_artifacts(artifacts: Artifacts, config: EngineConfig) -> Self {
        Self::new(Arc::new(ArtifactStore::from_artifacts(artifacts)), config)
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn status(&self) -> StoreStatus {
        self.store.status()
    }

    /// Number of catalogued items, or `ServiceUnavailable`.
    pub fn catalog_size(&self) -> AnirecResult<usize> {
        Ok(self.store.artifacts()?.n_rows())
    }

    /// Resolve a query to a catalog row (exact, then fuzzy).
    pub fn resolve_name(&self, query: &str) -> AnirecResult<ResolvedName> {
        let artifacts = self.store.artifacts()?;
        let resolved = self.resolver.resolve(artifacts.names(), query)?;
        if resolved.fuzzy {
            info!(query, resolved = %resolved.name, "no exact match, using substring match");
        }
        Ok(resolved)
    }

    /// Kernel score of `row_index` against every row, in row order.
    pub fn score(&self, row_index: usize) -> AnirecResult<Vec<ScoredRow>> {
        let artifacts = self.store.artifacts()?;
        self.kernel
            .score_all(artifacts.matrix(), row_index, self.config.parallel_threshold)
    }

    /// Apply the configured `max_top_n` clamp.
    fn effective_top_n(&self, top_n: usize) -> AnirecResult<usize> {
        if top_n == 0 {
            return Err(AnirecError::invalid_argument(
                "top_n must be a positive integer",
            ));
        }
        Ok(self.config.max_top_n.map_or(top_n, |max| top_n.min(max)))
    }
}

impl IRecommender for RecommendationEngine {
    fn get_recommendations(
        &self,
        name: &str,
        top_n: usize,
    ) -> AnirecResult<RecommendationResult> {
        let _span = anirec_observability::recommend_span!(name, top_n).entered();

        // Fail fast before touching any artifact.
        let artifacts = self.store.artifacts()?;
        let top_n = self.effective_top_n(top_n)?;

        let resolved = self.resolve_name(name)?;
        let scored = self.score(resolved.index)?;
        debug!(rows = scored.len(), "scored catalog");

        let ranked = ranking::rank_and_truncate(scored, resolved.index, top_n)?;
        let result = format::format_result(resolved.name, &ranked, artifacts.metadata())?;

        debug!(
            input = %result.input_anime,
            returned = result.len(),
            "recommendations ready"
        );
        Ok(result)
    }

    fn recommend(&self, name: &str) -> AnirecResult<RecommendationResult> {
        self.get_recommendations(name, self.config.default_top_n)
    }

    fn search_names(&self, query: &str, limit: usize) -> AnirecResult<Vec<String>> {
        let _span = anirec_observability::search_span!(query).entered();

        let artifacts = self.store.artifacts()?;
        if limit == 0 {
            return Err(AnirecError::invalid_argument("limit must be a positive integer"));
        }
        let found = self.resolver.matches(artifacts.names(), query)?;
        Ok(found
            .into_iter()
            .take(limit)
            .map(|e| e.name.to_string())
            .collect())
    }

    fn is_ready(&self) -> bool {
        self.store.is_ready()
    }
}
