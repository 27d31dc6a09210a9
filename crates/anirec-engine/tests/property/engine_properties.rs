use anirec_core::config::EngineConfig;
use anirec_core::traits::IRecommender;
use anirec_engine::ranking::{rank_and_truncate, sort_ranked, ScoredRow};
use anirec_engine::RecommendationEngine;
use anirec_store::Artifacts;
use proptest::prelude::*;
use test_fixtures::synthetic_catalog;

fn engine_for(rows: usize, terms: usize, per_item: usize) -> RecommendationEngine {
    let c = synthetic_catalog(rows, terms, per_item);
    let artifacts = Artifacts::new(c.vectorizer, c.matrix, c.names, c.metadata).unwrap();
    RecommendationEngine::from_artifacts(artifacts, EngineConfig::default())
}

fn arb_scored() -> impl Strategy<Value = Vec<ScoredRow>> {
    // Coarse scores so exact ties are common.
    prop::collection::vec(0u8..8, 1..60).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| ScoredRow::new(i, s as f64 / 8.0))
            .collect()
    })
}

// ── Length is min(top_n, rows - 1) ─────────────────────────────────────

proptest! {
    #[test]
    fn result_length_is_clamped(rows in 1usize..40, top_n in 1usize..60, query in 0usize..40) {
        let engine = engine_for(rows, 24, 4);
        let name = format!("Title {:06}", query % rows);
        let result = engine.get_recommendations(&name, top_n).unwrap();
        prop_assert_eq!(result.len(), top_n.min(rows - 1));
    }
}

// ── Self never appears, ranks are sequential ──────────────────────────

proptest! {
    #[test]
    fn query_is_excluded_and_ranks_are_sequential(rows in 2usize..40, query in 0usize..40) {
        let engine = engine_for(rows, 16, 3);
        let name = format!("Title {:06}", query % rows);
        let result = engine.get_recommendations(&name, rows).unwrap();
        prop_assert!(!result.names().contains(&name.as_str()));
        for (i, rec) in result.recommendations.iter().enumerate() {
            prop_assert_eq!(rec.rank, i + 1);
        }
    }
}

// ── Self-similarity is maximal ─────────────────────────────────────────

proptest! {
    #[test]
    fn self_score_is_maximal(rows in 1usize..40, query in 0usize..40) {
        let engine = engine_for(rows, 20, 5);
        let q = query % rows;
        let scores = engine.score(q).unwrap();
        prop_assert_eq!(scores.len(), rows);
        let own = scores[q].score;
        for s in &scores {
            prop_assert!(s.score <= own + 1e-12);
        }
    }
}

// ── Ranked output is a fixed point of re-sorting ───────────────────────

proptest! {
    #[test]
    fn ranking_is_a_sort_fixed_point(scored in arb_scored(), top_n in 1usize..80, query in 0usize..60) {
        let ranked = rank_and_truncate(scored, query, top_n).unwrap();
        let mut resorted = ranked.clone();
        sort_ranked(&mut resorted);
        prop_assert_eq!(resorted, ranked);
    }
}

// ── Ties break by ascending index, deterministically ───────────────────

proptest! {
    #[test]
    fn ties_break_by_ascending_index(scored in arb_scored(), top_n in 1usize..80) {
        let first = rank_and_truncate(scored.clone(), usize::MAX, top_n).unwrap();
        let second = rank_and_truncate(scored, usize::MAX, top_n).unwrap();
        prop_assert_eq!(&first, &second);
        for pair in first.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }
}

// ── Fuzzy resolution reports the catalog name ──────────────────────────

proptest! {
    #[test]
    fn unique_substring_resolves_to_full_name(rows in 1usize..40, query in 0usize..40) {
        let engine = engine_for(rows, 12, 2);
        let q = query % rows;
        // "tle 000007" only occurs in "Title 000007".
        let fragment = format!("TLE {q:06}");
        let result = engine.get_recommendations(&fragment, 1).unwrap();
        prop_assert_eq!(result.input_anime, format!("Title {q:06}"));
    }
}
