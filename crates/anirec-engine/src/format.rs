//! Ranked rows → `RecommendationResult`.
//!
//! Scores are rounded here and nowhere earlier, so rounding never affects
//! rank order.

use anirec_core::constants::SIMILARITY_DECIMALS;
use anirec_core::errors::{AnirecError, AnirecResult};
use anirec_core::models::{ItemMetadata, Recommendation, RecommendationResult};

use crate::ranking::ScoredRow;

/// Round a similarity score to the published precision.
///
/// Rounds the exact binary value, so `0.56785` (stored just below the
/// midpoint) becomes `0.5678`. Scaling by `10^4` first would round it up.
pub fn round_score(score: f64) -> f64 {
    format!("{:.*}", SIMILARITY_DECIMALS, score)
        .parse()
        .unwrap_or(score)
}

/// Attach metadata and 1-based ranks to ranked rows.
pub fn format_result(
    input_anime: impl Into<String>,
    ranked: &[ScoredRow],
    metadata: &ItemMetadata,
) -> AnirecResult<RecommendationResult> {
    let recommendations = ranked
        .iter()
        .enumerate()
        .map(|(pos, row)| {
            let record = metadata.get(row.index).ok_or_else(|| {
                AnirecError::corrupt(
                    "item_metadata",
                    format!("no metadata for row {}", row.index),
                )
            })?;
            Ok(Recommendation {
                rank: pos + 1,
                anime_name: record.name.clone(),
                rating: record.rating,
                similarity_score: round_score(row.score),
            })
        })
        .collect::<AnirecResult<Vec<_>>>()?;

    Ok(RecommendationResult {
        input_anime: input_anime.into(),
        recommendations,
    })
}
