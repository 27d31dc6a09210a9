//! Ranking: order scored rows, drop the query row, truncate.

use std::cmp::Ordering;

use anirec_core::errors::{AnirecError, AnirecResult};

/// A catalog row and its raw (unrounded) kernel score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRow {
    pub index: usize,
    pub score: f64,
}

impl ScoredRow {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

/// Rank order: score descending, then row index ascending. NaN scores sort
/// after every number.
pub fn rank_order(a: &ScoredRow, b: &ScoredRow) -> Ordering {
    let by_score = match (a.score.is_nan(), b.score.is_nan()) {
        (false, false) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };
    by_score.then(a.index.cmp(&b.index))
}

/// Sort rows into rank order.
pub fn sort_ranked(rows: &mut [ScoredRow]) {
    rows.sort_by(rank_order);
}

/// Best `top_n` rows other than `query_index`, in rank order.
///
/// The query row is removed by index, never by position. The result holds
/// `min(top_n, scored.len() - 1)` rows. Fails with `InvalidArgument` when
/// `top_n` is zero.
pub fn rank_and_truncate(
    mut scored: Vec<ScoredRow>,
    query_index: usize,
    top_n: usize,
) -> AnirecResult<Vec<ScoredRow>> {
    if top_n == 0 {
        return Err(AnirecError::invalid_argument("top_n must be a positive integer"));
    }

    let available = scored.len().saturating_sub(1);
    let keep = top_n.min(available);

    scored.retain(|row| row.index != query_index);
    if keep < scored.len() {
        // rank_order is total, so partitioning first yields the same prefix
        // as a full sort.
        scored.select_nth_unstable_by(keep, rank_order);
        scored.truncate(keep);
    }
    sort_ranked(&mut scored);
    scored.truncate(keep);
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(scores: &[f64]) -> Vec<ScoredRow> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| ScoredRow::new(i, s))
            .collect()
    }

    fn indices(rows: &[ScoredRow]) -> Vec<usize> {
        rows.iter().map(|r| r.index).collect()
    }

    #[test]
    fn sorts_descending_and_drops_query() {
        let ranked = rank_and_truncate(rows(&[0.9, 0.2, 0.99, 0.5]), 2, 10).unwrap();
        assert_eq!(indices(&ranked), vec![0, 3, 1]);
    }

    #[test]
    fn ties_break_by_ascending_index() {
        let ranked = rank_and_truncate(rows(&[0.7, 0.5, 0.7, 0.7, 1.0]), 4, 3).unwrap();
        assert_eq!(indices(&ranked), vec![0, 2, 3]);
    }

    #[test]
    fn query_removed_even_when_not_first() {
        // Another row ties the query at the top.
        let ranked = rank_and_truncate(rows(&[1.0, 1.0, 0.3]), 1, 2).unwrap();
        assert_eq!(indices(&ranked), vec![0, 2]);
    }

    #[test]
    fn clamps_to_available_rows() {
        let ranked = rank_and_truncate(rows(&[0.1, 0.2, 0.3]), 0, 100).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn single_row_catalog_yields_nothing() {
        let ranked = rank_and_truncate(rows(&[1.0]), 0, 5).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn zero_top_n_is_invalid() {
        let err = rank_and_truncate(rows(&[0.1, 0.2]), 0, 0).unwrap_err();
        assert!(matches!(err, AnirecError::InvalidArgument { .. }));
    }

    #[test]
    fn nan_scores_rank_last() {
        let ranked = rank_and_truncate(rows(&[f64::NAN, 0.1, 0.2, 1.0]), 3, 3).unwrap();
        assert_eq!(indices(&ranked), vec![2, 1, 0]);
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let ranked = rank_and_truncate(rows(&[1.0, 0.0, -0.0]), 0, 2).unwrap();
        assert_eq!(indices(&ranked), vec![1, 2]);
        let ranked = rank_and_truncate(rows(&[1.0, -0.0, 0.0]), 0, 2).unwrap();
        assert_eq!(indices(&ranked), vec![1, 2]);
    }

    #[test]
    fn partial_selection_matches_full_sort() {
        let scores: Vec<f64> = (0..200).map(|i| ((i * 37) % 23) as f64 / 23.0).collect();
        let mut full = rows(&scores);
        full.retain(|r| r.index != 7);
        sort_ranked(&mut full);
        full.truncate(15);

        let partial = rank_and_truncate(rows(&scores), 7, 15).unwrap();
        assert_eq!(partial, full);
    }
}
